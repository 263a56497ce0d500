//! The immutable sprite sheet model.
//!
//! This module defines the `Sheet` struct, the decoded description of an
//! animation source that any number of playbacks can borrow at once.

use serde::{Deserialize, Serialize};

use super::{error::SheetError, frame::Frame, tag::Tag};

/// Metadata carried along with a decoded sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetMeta {
	/// Packed image the frame regions refer to
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub image: Option<String>,
	/// Width of the packed image in pixels
	#[serde(default)]
	pub width: u32,
	/// Height of the packed image in pixels
	#[serde(default)]
	pub height: u32,
}

/// Decoded animation source: frames with durations and the tags over them.
///
/// A `Sheet` is validated once at construction and never changes afterwards:
/// - there is at least one frame
/// - every frame has a non-zero duration
/// - every tag satisfies `from_frame <= to_frame < frame_count`
/// - every tag's `id` equals its index in [`tags`](Self::tags)
///
/// # Examples
///
/// ```
/// use sheetplay_types::sheet::{Frame, Sheet, Tag};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let frames = (0..4).map(|_| Frame::with_duration(100)).collect();
/// let sheet = Sheet::new(frames, vec![Tag::new("idle", 0, 1), Tag::new("walk", 2, 3)])?;
///
/// assert_eq!(sheet.frame_count(), 4);
/// assert_eq!(sheet.find_tag_by_name("walk").map(|tag| tag.id), Some(1));
/// assert!(sheet.find_tag_by_id(2).is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SheetParts")]
pub struct Sheet {
	frames: Vec<Frame>,
	tags: Vec<Tag>,
	#[serde(default)]
	meta: SheetMeta,
}

/// Unvalidated sheet contents, used to route deserialization through [`Sheet::new`].
#[derive(Deserialize)]
struct SheetParts {
	frames: Vec<Frame>,
	#[serde(default)]
	tags: Vec<Tag>,
	#[serde(default)]
	meta: SheetMeta,
}

impl TryFrom<SheetParts> for Sheet {
	type Error = SheetError;

	fn try_from(parts: SheetParts) -> Result<Self, Self::Error> {
		Ok(Sheet::new(parts.frames, parts.tags)?.with_meta(parts.meta))
	}
}

impl Sheet {
	/// Builds a sheet from frames and tags.
	///
	/// Tag ids are reassigned to match their positions.
	///
	/// # Errors
	///
	/// Returns an error if:
	/// - `frames` is empty
	/// - a frame has a zero duration
	/// - a tag range is reversed or reaches past the last frame
	pub fn new(frames: Vec<Frame>, mut tags: Vec<Tag>) -> Result<Self, SheetError> {
		if frames.is_empty() {
			return Err(SheetError::NoFrames);
		}

		if let Some(frame) = frames.iter().position(|frame| frame.duration_ms() == 0) {
			return Err(SheetError::ZeroDuration {
				frame,
			});
		}

		for (id, tag) in tags.iter_mut().enumerate() {
			if tag.from_frame > tag.to_frame || tag.to_frame >= frames.len() {
				return Err(SheetError::TagOutOfBounds {
					tag: tag.name.clone(),
					from: tag.from_frame,
					to: tag.to_frame,
					frame_count: frames.len(),
				});
			}
			tag.id = id;
		}

		Ok(Self {
			frames,
			tags,
			meta: SheetMeta::default(),
		})
	}

	/// Attaches metadata to the sheet.
	pub fn with_meta(mut self, meta: SheetMeta) -> Self {
		self.meta = meta;
		self
	}

	/// Returns the sheet metadata.
	pub fn meta(&self) -> &SheetMeta {
		&self.meta
	}

	/// Returns all frames in display order.
	pub fn frames(&self) -> &[Frame] {
		&self.frames
	}

	/// Returns all tags in sheet order.
	pub fn tags(&self) -> &[Tag] {
		&self.tags
	}

	/// Returns the number of frames (always at least 1).
	pub fn frame_count(&self) -> usize {
		self.frames.len()
	}

	/// Returns the number of tags.
	pub fn tag_count(&self) -> usize {
		self.tags.len()
	}

	/// Gets a frame by index.
	pub fn frame(&self, index: usize) -> Option<&Frame> {
		self.frames.get(index)
	}

	/// Finds the first tag with the given name.
	///
	/// Names are not required to be unique; when several tags share a name the
	/// one with the lowest id wins.
	pub fn find_tag_by_name(&self, name: &str) -> Option<&Tag> {
		self.tags.iter().find(|tag| tag.name == name)
	}

	/// Gets a tag by id.
	pub fn find_tag_by_id(&self, id: usize) -> Option<&Tag> {
		self.tags.get(id)
	}

	/// Sum of all frame durations in milliseconds.
	pub fn total_duration_ms(&self) -> u64 {
		self.frames.iter().map(|frame| u64::from(frame.duration_ms())).sum()
	}

	/// Time one pass through a tag's range takes, in milliseconds.
	///
	/// Returns `None` if the tag's range does not fit this sheet.
	pub fn tag_duration_ms(&self, tag: &Tag) -> Option<u64> {
		let frames = self.frames.get(tag.from_frame..=tag.to_frame)?;
		Some(frames.iter().map(|frame| u64::from(frame.duration_ms())).sum())
	}
}

impl std::fmt::Display for Sheet {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Sheet({} frames, {} tags)", self.frames.len(), self.tags.len())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::sheet::Direction;

	fn frames(count: usize, duration_ms: u32) -> Vec<Frame> {
		(0..count).map(|_| Frame::with_duration(duration_ms)).collect()
	}

	#[test]
	fn test_new_rejects_empty_frames() {
		let result = Sheet::new(Vec::new(), Vec::new());
		assert!(matches!(result, Err(SheetError::NoFrames)));
	}

	#[test]
	fn test_new_rejects_zero_duration() {
		let mut list = frames(3, 100);
		list[2] = Frame::with_duration(0);
		let result = Sheet::new(list, Vec::new());
		assert!(matches!(
			result,
			Err(SheetError::ZeroDuration {
				frame: 2
			})
		));
	}

	#[test]
	fn test_new_rejects_tag_past_last_frame() {
		let result = Sheet::new(frames(4, 100), vec![Tag::new("bad", 2, 4)]);
		match result {
			Err(SheetError::TagOutOfBounds {
				tag,
				from,
				to,
				frame_count,
			}) => {
				assert_eq!(tag, "bad");
				assert_eq!((from, to, frame_count), (2, 4, 4));
			}
			other => panic!("Expected TagOutOfBounds, got {:?}", other),
		}
	}

	#[test]
	fn test_new_rejects_reversed_tag() {
		let result = Sheet::new(frames(4, 100), vec![Tag::new("bad", 3, 1)]);
		assert!(matches!(result, Err(SheetError::TagOutOfBounds { .. })));
	}

	#[test]
	fn test_new_assigns_tag_ids() {
		let mut first = Tag::new("a", 0, 0);
		first.id = 7;
		let sheet = Sheet::new(frames(2, 100), vec![first, Tag::new("b", 1, 1)]).unwrap();
		assert_eq!(sheet.tags()[0].id, 0);
		assert_eq!(sheet.tags()[1].id, 1);
	}

	#[test]
	fn test_find_tag_by_name_returns_first_match() {
		let sheet = Sheet::new(
			frames(4, 100),
			vec![Tag::new("dup", 0, 1), Tag::new("dup", 2, 3).with_direction(Direction::Reverse)],
		)
		.unwrap();

		let tag = sheet.find_tag_by_name("dup").unwrap();
		assert_eq!(tag.id, 0);
		assert!(sheet.find_tag_by_name("missing").is_none());
	}

	#[test]
	fn test_durations() {
		let mut list = frames(4, 100);
		list[3] = Frame::with_duration(250);
		let sheet = Sheet::new(list, vec![Tag::new("tail", 2, 3)]).unwrap();

		assert_eq!(sheet.total_duration_ms(), 550);
		assert_eq!(sheet.tag_duration_ms(&sheet.tags()[0]), Some(350));
		assert_eq!(sheet.tag_duration_ms(&Tag::new("outside", 3, 9)), None);
	}

	#[test]
	fn test_deserialize_validates() {
		let json = r#"{"frames":[{"source":{"x":0,"y":0,"w":8,"h":8},"duration_ms":0}]}"#;
		let result: Result<Sheet, _> = serde_json::from_str(json);
		assert!(result.is_err());

		let json = r#"{"frames":[{"source":{"x":0,"y":0,"w":8,"h":8},"duration_ms":40}]}"#;
		let sheet: Sheet = serde_json::from_str(json).unwrap();
		assert_eq!(sheet.frame_count(), 1);
		assert_eq!(sheet.tag_count(), 0);
	}
}
