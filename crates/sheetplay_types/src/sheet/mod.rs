//! Sprite sheet data model for `sheetplay`.
//!
//! A sheet is the decoded, read-only description of an animation source:
//! - **Frames:** an ordered list of image regions, each with a display duration
//! - **Tags:** named frame ranges with a direction, a ping-pong flag and a repeat count
//!
//! Sheets are built once (usually by decoding the JSON description exported by
//! the sprite-authoring tool) and then shared by reference with any number of
//! [`Playback`](crate::playback::Playback) cursors.
//!
//! # Tag Semantics
//!
//! ```text
//! Field       Meaning
//! ----------  ------------------------------------------------------------
//! from_frame  First frame of the range (inclusive)
//! to_frame    Last frame of the range (inclusive)
//! direction   Forward (from → to) or Reverse (to → from)
//! ping_pong   Bounce at the range edges instead of wrapping
//! repeat      Passes before handing off to the next tag, 0 = loop forever
//! ```
//!
//! # Usage Examples
//!
//! ## Building a sheet by hand
//!
//! ```
//! use sheetplay_types::sheet::{Direction, Frame, Sheet, Tag};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let frames = (0..6).map(|_| Frame::with_duration(100)).collect();
//! let tags = vec![
//!     Tag::new("idle", 0, 1),
//!     Tag::new("attack", 2, 5).with_direction(Direction::Reverse).with_repeat(1),
//! ];
//!
//! let sheet = Sheet::new(frames, tags)?;
//! assert_eq!(sheet.find_tag_by_name("attack").map(|tag| tag.start_frame()), Some(5));
//! # Ok(())
//! # }
//! ```
//!
//! ## Decoding an exported sheet
//!
//! ```no_run
//! use sheetplay_types::sheet::{DecodeConfig, Sheet};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let sheet = Sheet::open_with_config("hero.json", &DecodeConfig::lenient())?;
//! for tag in sheet.tags() {
//!     println!("{}", tag);
//! }
//! # Ok(())
//! # }
//! ```

mod decode;
mod decode_config;
mod error;
mod frame;
mod model;
mod tag;

pub use self::decode_config::DecodeConfig;
pub use self::error::SheetError;
pub use self::frame::{Frame, SourceRect};
pub use self::model::{Sheet, SheetMeta};
pub use self::tag::{Direction, Tag};
