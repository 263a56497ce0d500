//! Benchmark helper utilities for sheetplay
//!
//! This module provides generators for synthetic sheets and exported sheet
//! descriptions, so the benchmark suite does not depend on any asset files.
//!
//! Frame durations cycle through a short list of values so that `advance`
//! crosses frame edges at uneven intervals, the way real exports do.

use serde_json::json;
use sheetplay_types::sheet::{Direction, Frame, Sheet, SourceRect, Tag};

/// Durations (in milliseconds) assigned to generated frames, in order
pub const DURATIONS_MS: [u32; 4] = [100, 80, 120, 60];

/// Width and height of one generated cell
pub const CELL_SIZE: u32 = 32;

/// Generates `frame_count` frames laid out left to right
pub fn generate_frames(frame_count: usize) -> Vec<Frame> {
	(0..frame_count)
		.map(|index| {
			let x = index as u32 * CELL_SIZE;
			let duration = DURATIONS_MS[index % DURATIONS_MS.len()];
			Frame::new(SourceRect::new(x, 0, CELL_SIZE, CELL_SIZE), duration)
		})
		.collect()
}

/// Generates tags splitting `frame_count` frames into ranges of `tag_len` frames
///
/// Tags alternate between forward, reverse and ping-pong travel, and every
/// other tag plays twice before handing off.
pub fn generate_tags(frame_count: usize, tag_len: usize) -> Vec<Tag> {
	let tag_len = tag_len.max(1);
	(0..frame_count)
		.step_by(tag_len)
		.enumerate()
		.map(|(index, from)| {
			let to = (from + tag_len - 1).min(frame_count - 1);
			let repeat = (index % 2) as u32 * 2;
			let tag = Tag::new(format!("tag_{index}"), from, to).with_repeat(repeat);
			match index % 3 {
				0 => tag,
				1 => tag.with_direction(Direction::Reverse),
				_ => tag.with_ping_pong(true),
			}
		})
		.collect()
}

/// Builds a sheet with generated frames and tags
///
/// # Panics
///
/// Panics if `frame_count` is zero.
pub fn generate_sheet(frame_count: usize, tag_len: usize) -> Sheet {
	assert!(frame_count > 0, "a sheet needs at least one frame");
	Sheet::new(generate_frames(frame_count), generate_tags(frame_count, tag_len))
		.expect("generated sheet is valid")
}

/// Generates the JSON description an authoring tool would export for the same sheet
pub fn generate_export_json(frame_count: usize, tag_len: usize) -> String {
	let frames: Vec<_> = generate_frames(frame_count)
		.iter()
		.map(|frame| {
			let source = frame.source();
			json!({
				"frame": { "x": source.x, "y": source.y, "w": source.w, "h": source.h },
				"duration": frame.duration_ms(),
			})
		})
		.collect();

	let tags: Vec<_> = generate_tags(frame_count, tag_len)
		.iter()
		.map(|tag| {
			let direction = match (tag.ping_pong, tag.direction) {
				(true, Direction::Forward) => "pingpong",
				(true, Direction::Reverse) => "pingpong_reverse",
				(false, Direction::Forward) => "forward",
				(false, Direction::Reverse) => "reverse",
			};
			let mut value = json!({
				"name": tag.name,
				"from": tag.from_frame,
				"to": tag.to_frame,
				"direction": direction,
			});
			if tag.repeat > 0 {
				value["repeat"] = json!(tag.repeat.to_string());
			}
			value
		})
		.collect();

	json!({
		"frames": frames,
		"meta": {
			"image": "bench.png",
			"size": { "w": frame_count as u32 * CELL_SIZE, "h": CELL_SIZE },
			"frameTags": tags,
		},
	})
	.to_string()
}

/// Common sheet sizes for benchmarking, as (frame count, frames per tag)
pub mod sizes {
	/// Small sheet: a single character with a handful of moves
	pub const SMALL: (usize, usize) = (16, 4);
	/// Medium sheet: a full character set
	pub const MEDIUM: (usize, usize) = (128, 8);
	/// Large sheet: an atlas of many characters
	pub const LARGE: (usize, usize) = (1024, 16);
}

#[cfg(test)]
mod tests {
	use super::*;
	use sheetplay_types::sheet::DecodeConfig;

	#[test]
	fn test_generate_sheet() {
		let sheet = generate_sheet(10, 4);

		assert_eq!(sheet.frame_count(), 10);
		assert_eq!(sheet.tag_count(), 3);

		// Last tag is cut short at the end of the sheet
		let last = &sheet.tags()[2];
		assert_eq!((last.from_frame, last.to_frame), (8, 9));
		assert!(last.ping_pong);
	}

	#[test]
	fn test_export_json_decodes_to_same_sheet() {
		let (frames, tag_len) = sizes::SMALL;
		let json = generate_export_json(frames, tag_len);
		let decoded = Sheet::from_json_str(&json, &DecodeConfig::default()).unwrap();
		let generated = generate_sheet(frames, tag_len);

		assert_eq!(decoded.frames(), generated.frames());
		assert_eq!(decoded.tags(), generated.tags());
		assert_eq!(decoded.meta().image.as_deref(), Some("bench.png"));
	}

	#[test]
	fn test_sizes_constants() {
		assert_eq!(sizes::SMALL, (16, 4));
		assert_eq!(sizes::MEDIUM, (128, 8));
		assert_eq!(sizes::LARGE, (1024, 16));
	}
}
