//! Prelude module for `sheetplay_types`.
//!
//! This module provides a convenient way to import commonly used types.
//!
//! # Examples
//!
//! ```
//! use sheetplay_types::prelude::*;
//!
//! // Now you can use all common types directly
//! let tag = Tag::new("idle", 0, 0).with_direction(Direction::Reverse);
//! let config = DecodeConfig::lenient();
//! ```

// Sheet types
#[doc(inline)]
pub use crate::sheet::{
	DecodeConfig, Direction, Frame, Sheet, SheetError, SheetMeta, SourceRect, Tag,
};

// Playback types
#[doc(inline)]
pub use crate::playback::{Playback, PlaybackError, PlaybackMode, TagCursor, TagRef};
