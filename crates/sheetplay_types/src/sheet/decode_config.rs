//! Decode configuration for sprite sheet descriptions.
//!
//! This module provides the options record that selects which parts of an
//! exported sheet are loaded and how strictly they are checked.

/// Configuration for decoding a sheet description.
///
/// # Presets
///
/// - `default()`: frames and tags, strict validation
/// - `frames_only()`: frames only, tags are skipped
/// - `lenient()`: out-of-range tags are clamped, missing durations become 100 ms
///
/// # Examples
///
/// ```
/// use sheetplay_types::sheet::DecodeConfig;
///
/// let config = DecodeConfig::default();
/// assert!(config.load_tags);
///
/// let config = DecodeConfig::frames_only();
/// assert!(!config.load_tags);
///
/// let config = DecodeConfig::new(true, true, Some(50));
/// assert_eq!(config.default_duration_ms, Some(50));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeConfig {
	/// Load the tag list
	pub load_tags: bool,
	/// Clamp out-of-range tag bounds into the sheet instead of failing
	pub clamp_tag_ranges: bool,
	/// Duration used for frames whose duration is missing or zero
	pub default_duration_ms: Option<u32>,
}

impl Default for DecodeConfig {
	fn default() -> Self {
		Self {
			load_tags: true,
			clamp_tag_ranges: false,
			default_duration_ms: None,
		}
	}
}

impl DecodeConfig {
	/// Create a new decode configuration.
	///
	/// # Arguments
	/// * `load_tags` - Load the tag list
	/// * `clamp_tag_ranges` - Clamp bad tag ranges instead of failing
	/// * `default_duration_ms` - Fallback for missing or zero durations
	pub fn new(load_tags: bool, clamp_tag_ranges: bool, default_duration_ms: Option<u32>) -> Self {
		Self {
			load_tags,
			clamp_tag_ranges,
			default_duration_ms,
		}
	}

	/// Load frames only.
	///
	/// The resulting sheet has no tags, so it can only drive unscoped playback.
	pub fn frames_only() -> Self {
		Self {
			load_tags: false,
			..Self::default()
		}
	}

	/// Accept imperfect exports.
	///
	/// - `clamp_tag_ranges`: true
	/// - `default_duration_ms`: 100
	pub fn lenient() -> Self {
		Self {
			load_tags: true,
			clamp_tag_ranges: true,
			default_duration_ms: Some(100),
		}
	}
}
