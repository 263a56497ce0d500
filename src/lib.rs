#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `sheetplay` plays back frame-based sprite sheet animations driven by the named,
//! tagged frame ranges exported from a sprite-authoring tool.
//!
//! Given the time that has passed, a [`Playback`] tells the host which frame of a
//! [`Sheet`] to draw and moves on to the next tag when the current one has played
//! its repeats.
//!
//! ```
//! use sheetplay::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let frames = (0..3).map(|_| Frame::with_duration(100)).collect();
//! let sheet = Sheet::new(frames, Vec::new())?;
//!
//! let mut playback = Playback::simple(&sheet);
//! assert_eq!(playback.advance(0.25), 2);
//! # Ok(())
//! # }
//! ```
pub use sheetplay_internal::*;
