//! Error types for binding a playback to a tag.

use thiserror::Error;

/// Errors that can occur when creating a tag-scoped [`Playback`](super::Playback)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
	/// No tag has the requested name
	#[error("Tag \"{name}\" not found")]
	TagNotFound {
		/// Requested tag name
		name: String,
	},

	/// Tag id is past the end of the tag list
	#[error("Tag id {id} out of range (total tags: {count})")]
	TagOutOfRange {
		/// Requested tag id
		id: usize,
		/// Number of tags in the sheet
		count: usize,
	},
}
