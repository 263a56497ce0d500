//! Tag types for sprite sheets.
//!
//! A tag names a contiguous range of frames and says how that range is played:
//! which way the play-head moves, whether it bounces at the edges, and how many
//! passes to make before handing off to the next tag.

use serde::{Deserialize, Serialize};

/// Direction the play-head moves through a range of frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
	/// Increasing frame indices
	#[default]
	Forward,
	/// Decreasing frame indices
	Reverse,
}

impl Direction {
	/// Returns the opposite direction.
	///
	/// # Examples
	///
	/// ```
	/// use sheetplay_types::sheet::Direction;
	///
	/// assert_eq!(Direction::Forward.flipped(), Direction::Reverse);
	/// assert_eq!(Direction::Reverse.flipped(), Direction::Forward);
	/// ```
	pub fn flipped(self) -> Self {
		match self {
			Self::Forward => Self::Reverse,
			Self::Reverse => Self::Forward,
		}
	}

	/// End of the inclusive range `from_frame..=to_frame` that travel in this
	/// direction starts from.
	pub fn start_of(self, from_frame: usize, to_frame: usize) -> usize {
		match self {
			Self::Forward => from_frame,
			Self::Reverse => to_frame,
		}
	}
}

impl std::fmt::Display for Direction {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Forward => write!(f, "forward"),
			Self::Reverse => write!(f, "reverse"),
		}
	}
}

/// A named range of frames with its playback rules.
///
/// `repeat == 0` marks a tag that loops forever. Any other value is the number
/// of passes through the range, counted each time playback wraps from one end
/// back to the other. Ping-pong bounces never wrap, so a ping-pong tag keeps
/// bouncing whatever its repeat count.
///
/// The `id` is the tag's position in its sheet and is assigned by
/// [`Sheet::new`](super::Sheet::new).
///
/// # Examples
///
/// ```
/// use sheetplay_types::sheet::{Direction, Tag};
///
/// let tag = Tag::new("walk", 2, 5).with_direction(Direction::Reverse).with_repeat(3);
/// assert_eq!(tag.len(), 4);
/// assert_eq!(tag.start_frame(), 5);
/// assert!(tag.contains(4));
/// assert!(!tag.is_looping());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
	/// Index of the tag in its sheet
	#[serde(default)]
	pub id: usize,
	/// Tag name as exported by the authoring tool
	pub name: String,
	/// First frame of the range (inclusive)
	pub from_frame: usize,
	/// Last frame of the range (inclusive)
	pub to_frame: usize,
	/// Declared playback direction
	#[serde(default)]
	pub direction: Direction,
	/// Bounce at the range edges instead of wrapping
	#[serde(default)]
	pub ping_pong: bool,
	/// Number of passes, `0` loops forever
	#[serde(default)]
	pub repeat: u32,
}

impl Tag {
	/// Creates a forward, looping tag over `from_frame..=to_frame`.
	pub fn new(name: impl Into<String>, from_frame: usize, to_frame: usize) -> Self {
		Self {
			id: 0,
			name: name.into(),
			from_frame,
			to_frame,
			direction: Direction::Forward,
			ping_pong: false,
			repeat: 0,
		}
	}

	/// Sets the declared direction.
	pub fn with_direction(mut self, direction: Direction) -> Self {
		self.direction = direction;
		self
	}

	/// Sets the ping-pong flag.
	pub fn with_ping_pong(mut self, ping_pong: bool) -> Self {
		self.ping_pong = ping_pong;
		self
	}

	/// Sets the repeat count (`0` loops forever).
	pub fn with_repeat(mut self, repeat: u32) -> Self {
		self.repeat = repeat;
		self
	}

	/// Returns `true` if the tag never runs out of repeats.
	pub fn is_looping(&self) -> bool {
		self.repeat == 0
	}

	/// Number of frames in the range.
	pub fn len(&self) -> usize {
		self.to_frame.saturating_sub(self.from_frame) + 1
	}

	/// A tag always spans at least one frame.
	pub fn is_empty(&self) -> bool {
		false
	}

	/// Returns `true` if `frame` lies inside the range.
	pub fn contains(&self, frame: usize) -> bool {
		(self.from_frame..=self.to_frame).contains(&frame)
	}

	/// Frame the tag starts on when entered in `direction`.
	pub fn start_frame_for(&self, direction: Direction) -> usize {
		direction.start_of(self.from_frame, self.to_frame)
	}

	/// Frame the tag starts on in its declared direction.
	pub fn start_frame(&self) -> usize {
		self.start_frame_for(self.direction)
	}
}

impl std::fmt::Display for Tag {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"Tag#{} \"{}\" [{}..={}] {}",
			self.id, self.name, self.from_frame, self.to_frame, self.direction
		)?;
		if self.ping_pong {
			write!(f, " ping-pong")?;
		}
		if self.is_looping() {
			write!(f, " loop")
		} else {
			write!(f, " x{}", self.repeat)
		}
	}
}
