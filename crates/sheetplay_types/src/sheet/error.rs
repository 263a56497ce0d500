//! Error types for building and decoding sprite sheets.

use thiserror::Error;

/// Errors that can occur when building or decoding a [`Sheet`](super::Sheet)
#[derive(Debug, Error)]
pub enum SheetError {
	/// The sheet has no frames
	#[error("Sheet has no frames")]
	NoFrames,

	/// A frame has a zero display duration
	#[error("Frame {frame} has a zero duration")]
	ZeroDuration {
		/// Index of the offending frame
		frame: usize,
	},

	/// A tag range is reversed or does not fit inside the sheet
	#[error(
		"Tag \"{tag}\" range {from}..={to} is invalid for a sheet with {frame_count} frames"
	)]
	TagOutOfBounds {
		/// Name of the offending tag
		tag: String,
		/// First frame of the range
		from: usize,
		/// Last frame of the range
		to: usize,
		/// Number of frames in the sheet
		frame_count: usize,
	},

	/// Unrecognised tag direction string
	#[error("Unknown tag direction: {0:?}")]
	UnknownDirection(String),

	/// Tag repeat field is not a non-negative integer
	#[error("Invalid tag repeat value: {0:?}")]
	InvalidRepeat(String),

	/// Malformed sheet JSON
	#[error(transparent)]
	Json(#[from] serde_json::Error),

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}
