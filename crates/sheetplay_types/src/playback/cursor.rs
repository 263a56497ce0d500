//! Working copy of the tag a playback is bound to.

use crate::sheet::Tag;

/// Mutable per-playback view of a [`Tag`].
///
/// The sheet's tags never change; the remaining repeat count lives here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagCursor {
	pub(crate) id: usize,
	pub(crate) from_frame: usize,
	pub(crate) to_frame: usize,
	pub(crate) ping_pong: bool,
	pub(crate) looping: bool,
	pub(crate) repeat: u32,
}

impl TagCursor {
	/// Creates a cursor at the start of `tag`.
	pub fn from_tag(tag: &Tag) -> Self {
		Self {
			id: tag.id,
			from_frame: tag.from_frame,
			to_frame: tag.to_frame,
			ping_pong: tag.ping_pong,
			looping: tag.is_looping(),
			repeat: tag.repeat,
		}
	}

	/// Id of the tag this cursor was created from.
	pub fn id(&self) -> usize {
		self.id
	}

	/// First frame of the range.
	pub fn from_frame(&self) -> usize {
		self.from_frame
	}

	/// Last frame of the range.
	pub fn to_frame(&self) -> usize {
		self.to_frame
	}

	/// Returns `true` if the range bounces at its edges.
	pub fn ping_pong(&self) -> bool {
		self.ping_pong
	}

	/// Returns `true` if the tag never runs out of repeats.
	pub fn is_looping(&self) -> bool {
		self.looping
	}

	/// Passes left before hand-off, `None` for looping tags.
	pub fn remaining_repeats(&self) -> Option<u32> {
		(!self.looping).then_some(self.repeat)
	}

	/// Returns `true` if `frame` lies inside the range.
	pub fn contains(&self, frame: usize) -> bool {
		(self.from_frame..=self.to_frame).contains(&frame)
	}

	pub(crate) fn consume_pass(&mut self) {
		if !self.looping {
			self.repeat = self.repeat.saturating_sub(1);
		}
	}

	pub(crate) fn is_exhausted(&self) -> bool {
		!self.looping && self.repeat == 0
	}
}
