//! Audio/video pairing across mirrored directory trees
//!
//! Walks the audio root's subdirectories, matches each one to the video
//! subdirectory of the same name, then matches `.wav` files to `.mp4`
//! files by base name. Output paths mirror the subdirectory layout under
//! the output root with a `.webm` extension.

mod types;
mod walker;

pub use types::{Discovery, FilePair, SubdirPair};
pub use walker::{audio_base_name, PairWalker};

/// Source audio extension, matched case-insensitively
pub const AUDIO_EXTENSION: &str = "wav";

/// Source video extension, matched exactly
pub const VIDEO_EXTENSION: &str = "mp4";

/// Merged output extension
pub const OUTPUT_EXTENSION: &str = "webm";
