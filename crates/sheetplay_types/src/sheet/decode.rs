//! Decoding of exported sheet descriptions.
//!
//! The authoring tool packs every frame of a sprite into one image and writes a
//! JSON description next to it. Only the parts playback needs are read here:
//!
//! ```text
//! {
//!   "frames": [                                  // or an object keyed by filename
//!     { "frame": { "x": 0, "y": 0, "w": 32, "h": 32 }, "duration": 100 },
//!     ...
//!   ],
//!   "meta": {
//!     "image": "hero.png",
//!     "size": { "w": 128, "h": 32 },
//!     "frameTags": [
//!       { "name": "walk", "from": 0, "to": 3, "direction": "pingpong", "repeat": "2" }
//!     ]
//!   }
//! }
//! ```
//!
//! Tag directions are `forward`, `reverse`, `pingpong` and `pingpong_reverse`.
//! `repeat` is optional (absent means loop forever) and may be a string or a
//! number.

use std::io::Read;

use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;

use super::{
	Direction, Frame, Sheet, SheetMeta, SourceRect, Tag, decode_config::DecodeConfig,
	error::SheetError,
};

#[derive(Debug, Deserialize)]
struct ExportDocument {
	frames: ExportFrames,
	#[serde(default)]
	meta: ExportMeta,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ExportFrames {
	List(Vec<ExportFrame>),
	Map(serde_json::Map<String, Value>),
}

#[derive(Debug, Deserialize)]
struct ExportFrame {
	frame: SourceRect,
	#[serde(default)]
	duration: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct ExportMeta {
	#[serde(default)]
	image: Option<String>,
	#[serde(default)]
	size: Option<ExportSize>,
	#[serde(default, rename = "frameTags")]
	frame_tags: Vec<ExportTag>,
}

#[derive(Debug, Deserialize)]
struct ExportSize {
	w: u32,
	h: u32,
}

#[derive(Debug, Deserialize)]
struct ExportTag {
	name: String,
	from: usize,
	to: usize,
	#[serde(default)]
	direction: Option<String>,
	#[serde(default)]
	repeat: Option<Value>,
}

impl Sheet {
	/// Opens an exported sheet description with the default configuration.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be read or does not describe a
	/// valid sheet.
	///
	/// # Examples
	///
	/// ```no_run
	/// use sheetplay_types::sheet::Sheet;
	///
	/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
	/// let sheet = Sheet::open("hero.json")?;
	/// println!("{} frames, {} tags", sheet.frame_count(), sheet.tag_count());
	/// # Ok(())
	/// # }
	/// ```
	pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, SheetError> {
		Self::open_with_config(path, &DecodeConfig::default())
	}

	/// Opens an exported sheet description with a custom configuration.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be read or does not describe a
	/// valid sheet.
	pub fn open_with_config(
		path: impl AsRef<std::path::Path>,
		config: &DecodeConfig,
	) -> Result<Self, SheetError> {
		let data = std::fs::read(path)?;
		Self::from_json_bytes(&data, config)
	}

	/// Reads an exported sheet description from a reader.
	///
	/// # Errors
	///
	/// Returns an error if reading fails or the data does not describe a
	/// valid sheet.
	pub fn from_reader<R: Read>(mut reader: R, config: &DecodeConfig) -> Result<Self, SheetError> {
		let mut data = Vec::new();
		reader.read_to_end(&mut data)?;
		Self::from_json_bytes(&data, config)
	}

	/// Decodes an exported sheet description from a string.
	///
	/// # Errors
	///
	/// See [`from_json_bytes`](Self::from_json_bytes).
	pub fn from_json_str(json: &str, config: &DecodeConfig) -> Result<Self, SheetError> {
		Self::from_json_bytes(json.as_bytes(), config)
	}

	/// Decodes an exported sheet description.
	///
	/// # Errors
	///
	/// Returns an error if:
	/// - the JSON is malformed or lacks a `frames` entry
	/// - a tag has an unknown direction or an invalid repeat value
	/// - the decoded frames and tags fail [`Sheet::new`] validation
	///
	/// # Examples
	///
	/// ```
	/// use sheetplay_types::sheet::{DecodeConfig, Sheet};
	///
	/// let json = br#"{
	///     "frames": [
	///         { "frame": { "x": 0, "y": 0, "w": 16, "h": 16 }, "duration": 100 },
	///         { "frame": { "x": 16, "y": 0, "w": 16, "h": 16 }, "duration": 150 }
	///     ],
	///     "meta": { "frameTags": [ { "name": "blink", "from": 0, "to": 1, "direction": "pingpong" } ] }
	/// }"#;
	///
	/// let sheet = Sheet::from_json_bytes(json, &DecodeConfig::default()).unwrap();
	/// assert_eq!(sheet.frame_count(), 2);
	/// assert!(sheet.tags()[0].ping_pong);
	/// ```
	pub fn from_json_bytes(data: &[u8], config: &DecodeConfig) -> Result<Self, SheetError> {
		let document: ExportDocument = serde_json::from_slice(data)?;

		let exported = match document.frames {
			ExportFrames::List(frames) => frames,
			ExportFrames::Map(entries) => entries
				.into_iter()
				.map(|(_, value)| serde_json::from_value(value))
				.collect::<Result<Vec<ExportFrame>, _>>()?,
		};

		let frames: Vec<Frame> = exported
			.into_iter()
			.map(|frame| {
				let duration = match frame.duration {
					Some(0) | None => config.default_duration_ms.unwrap_or(0),
					Some(duration) => duration,
				};
				Frame::new(frame.frame, duration)
			})
			.collect();

		let tags = if config.load_tags {
			document
				.meta
				.frame_tags
				.iter()
				.map(|tag| convert_tag(tag, frames.len(), config))
				.collect::<Result<Vec<_>, _>>()?
		} else {
			Vec::new()
		};

		let meta = SheetMeta {
			image: document.meta.image,
			width: document.meta.size.as_ref().map_or(0, |size| size.w),
			height: document.meta.size.as_ref().map_or(0, |size| size.h),
		};

		let sheet = Sheet::new(frames, tags)?.with_meta(meta);
		debug!("Decoded {}", sheet);
		Ok(sheet)
	}
}

fn convert_tag(
	exported: &ExportTag,
	frame_count: usize,
	config: &DecodeConfig,
) -> Result<Tag, SheetError> {
	let (direction, ping_pong) = parse_direction(exported.direction.as_deref())?;
	let repeat = parse_repeat(exported.repeat.as_ref())?;

	let (mut from, mut to) = (exported.from, exported.to);
	let in_bounds = from <= to && to < frame_count;
	if !in_bounds && config.clamp_tag_ranges && frame_count > 0 {
		let last = frame_count - 1;
		let (low, high) = (from.min(to).min(last), from.max(to).min(last));
		warn!(
			"Clamping tag \"{}\" range {}..={} to {}..={}",
			exported.name, from, to, low, high
		);
		from = low;
		to = high;
	}

	Ok(Tag::new(exported.name.clone(), from, to)
		.with_direction(direction)
		.with_ping_pong(ping_pong)
		.with_repeat(repeat))
}

fn parse_direction(direction: Option<&str>) -> Result<(Direction, bool), SheetError> {
	match direction.unwrap_or("forward") {
		"forward" => Ok((Direction::Forward, false)),
		"reverse" => Ok((Direction::Reverse, false)),
		"pingpong" => Ok((Direction::Forward, true)),
		"pingpong_reverse" => Ok((Direction::Reverse, true)),
		other => Err(SheetError::UnknownDirection(other.to_string())),
	}
}

fn parse_repeat(repeat: Option<&Value>) -> Result<u32, SheetError> {
	let Some(value) = repeat else {
		return Ok(0);
	};

	let parsed = match value {
		Value::Null => Some(0),
		Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
		Value::String(text) if text.trim().is_empty() => Some(0),
		Value::String(text) => text.trim().parse::<u32>().ok(),
		_ => None,
	};

	parsed.ok_or_else(|| SheetError::InvalidRepeat(value.to_string()))
}
