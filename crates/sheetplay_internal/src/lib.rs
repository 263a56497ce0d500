//! This module is separated into its own crate so the `sheetplay` facade stays a thin re-export, and should not be used directly.

/// `use sheetplay::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export sheetplay_types for convenience
pub use sheetplay_types;

// Re-export commonly used types at crate root
pub use sheetplay_types::playback::{Playback, PlaybackError};
pub use sheetplay_types::sheet::{DecodeConfig, Sheet, SheetError};
