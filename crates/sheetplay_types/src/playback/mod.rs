//! Frame playback over a sprite sheet.
//!
//! This module answers one question, once per host frame: given the time that
//! has passed, which frame of the sheet should be on screen now?
//!
//! # Overview
//!
//! A [`Playback`] borrows a [`Sheet`](crate::sheet::Sheet) and keeps a
//! play-head over it. The host calls [`Playback::advance`] with the elapsed
//! time and draws the returned frame index. Nothing here reads a clock, touches
//! pixels or issues draw calls.
//!
//! ```text
//! Operation        Effect
//! ---------------  --------------------------------------------------------
//! simple           play all frames in order, looping
//! for_tag          play one tag, then chain to the next when repeats run out
//! advance(dt)      consume dt seconds, return the frame to display
//! set_speed(s)     scale time by |s|; a sign change reverses travel
//! play/stop/pause  run, halt, toggle
//! ```
//!
//! # Timing
//!
//! Each frame owns its display duration. Time is accumulated in a timer; when
//! the timer covers the duration of the frame on screen, that duration is
//! subtracted and the play-head moves. Leftover time is kept, so the result is
//! the same whether a second is fed in one call or in sixty.
//!
//! # Usage Examples
//!
//! ## Playing a tag
//!
//! ```
//! use sheetplay_types::playback::Playback;
//! use sheetplay_types::sheet::{Frame, Sheet, Tag};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let frames = (0..8).map(|_| Frame::with_duration(100)).collect();
//! let sheet = Sheet::new(frames, vec![Tag::new("bounce", 2, 5).with_ping_pong(true)])?;
//!
//! let mut playback = Playback::for_tag(&sheet, "bounce")?;
//! let shown: Vec<usize> = (0..8).map(|_| playback.advance(0.1)).collect();
//! assert_eq!(shown, vec![3, 4, 5, 4, 3, 2, 3, 4]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Handling a missing tag without branching
//!
//! ```
//! use sheetplay_types::playback::Playback;
//! use sheetplay_types::sheet::{Frame, Sheet};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let sheet = Sheet::new(vec![Frame::with_duration(100)], Vec::new())?;
//!
//! let mut playback = Playback::for_tag_or_idle(&sheet, "missing");
//! assert!(!playback.is_ready());
//! assert_eq!(playback.advance(1.0), 0);
//! # Ok(())
//! # }
//! ```

mod cursor;
mod error;
mod state;

pub use self::cursor::TagCursor;
pub use self::error::PlaybackError;
pub use self::state::{Playback, PlaybackMode, TagRef};
