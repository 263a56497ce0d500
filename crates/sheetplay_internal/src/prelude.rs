//! Prelude module for `sheetplay_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use sheetplay_internal::prelude::*;
//!
//! let sheet = Sheet::new(vec![Frame::with_duration(100)], Vec::new()).unwrap();
//! let mut playback = Playback::simple(&sheet);
//! assert_eq!(playback.advance(0.1), 0);
//! ```

// Re-export everything from sheetplay_types::prelude
#[doc(inline)]
pub use sheetplay_types::prelude::*;

// Re-export the entire sheetplay_types module for advanced usage
#[doc(inline)]
pub use sheetplay_types;
