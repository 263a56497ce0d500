//! This crate provides the sprite sheet model and frame playback for the `sheetplay` project.
//!
//! # Modules
//!
//! - **sheet**: Immutable sprite sheet data (frames with durations, named tags) and
//!   decoding of the JSON sheet description exported by the sprite-authoring tool
//! - **playback**: The play-head state machine that turns elapsed time into the
//!   frame index to draw
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```
//! use sheetplay_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let frames = (0..4).map(|_| Frame::with_duration(100)).collect();
//! let sheet = Sheet::new(frames, vec![Tag::new("walk", 0, 3)])?;
//!
//! let mut playback = Playback::for_tag(&sheet, "walk")?;
//! let frame = playback.advance(1.0 / 60.0);
//! assert_eq!(frame, 0);
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use sheetplay_types::playback::Playback;
//! use sheetplay_types::sheet::Sheet;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let sheet = Sheet::open("hero.json")?;
//! let playback = Playback::simple(&sheet);
//! # Ok(())
//! # }
//! ```

pub mod playback;
pub mod sheet;

/// `use sheetplay_types::prelude::*;` to import commonly used items.
pub mod prelude;
