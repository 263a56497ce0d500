//! Frame types for sprite sheets.
//!
//! A frame pairs a region of the packed sheet image with the time it stays on
//! screen. Playback only ever reads the duration; the region is handed through
//! to whatever draws the frame.

use serde::{Deserialize, Serialize};

/// Region of the packed sheet image displayed by a frame.
///
/// # Examples
///
/// ```
/// use sheetplay_types::sheet::SourceRect;
///
/// let rect = SourceRect::new(32, 0, 32, 32);
/// assert_eq!(rect.area(), 1024);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceRect {
	/// Left edge in pixels
	pub x: u32,
	/// Top edge in pixels
	pub y: u32,
	/// Width in pixels
	pub w: u32,
	/// Height in pixels
	pub h: u32,
}

impl SourceRect {
	/// Creates a new source rectangle.
	pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
		Self {
			x,
			y,
			w,
			h,
		}
	}

	/// Number of pixels covered by the rectangle.
	pub fn area(&self) -> u64 {
		u64::from(self.w) * u64::from(self.h)
	}
}

impl std::fmt::Display for SourceRect {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}x{}@({}, {})", self.w, self.h, self.x, self.y)
	}
}

/// A single frame of a sprite sheet.
///
/// # Examples
///
/// ```
/// use sheetplay_types::sheet::{Frame, SourceRect};
///
/// let frame = Frame::new(SourceRect::new(0, 0, 16, 16), 100);
/// assert_eq!(frame.duration_ms(), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Frame {
	source: SourceRect,
	duration_ms: u32,
}

impl Frame {
	/// Creates a new frame.
	///
	/// The duration is stored as given; [`Sheet::new`](super::Sheet::new)
	/// rejects frames with a zero duration.
	pub fn new(source: SourceRect, duration_ms: u32) -> Self {
		Self {
			source,
			duration_ms,
		}
	}

	/// Creates a frame with an empty source region.
	///
	/// Useful when the host keeps its own frame images and only needs timing.
	pub fn with_duration(duration_ms: u32) -> Self {
		Self::new(SourceRect::default(), duration_ms)
	}

	/// Region of the sheet image to draw.
	pub fn source(&self) -> SourceRect {
		self.source
	}

	/// Display duration in milliseconds.
	pub fn duration_ms(&self) -> u32 {
		self.duration_ms
	}
}

impl std::fmt::Display for Frame {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Frame({}, {} ms)", self.source, self.duration_ms)
	}
}
