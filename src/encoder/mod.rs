pub mod ffmpeg;

pub use ffmpeg::{EncoderSettings, FfmpegEncoder};

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

use crate::pairing::FilePair;

/// Why a merge invocation failed
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} exited with {status}: {detail}")]
    Failed {
        program: String,
        status: ExitStatus,
        detail: String,
    },
}

/// Merges one audio/video pair into its output file
///
/// Implementations block until the output is written or the attempt
/// has failed.
///
/// - `FfmpegEncoder`: runs the external `ffmpeg` binary
/// - Tests supply in-memory fakes
pub trait Encoder {
    fn merge(&mut self, pair: &FilePair) -> Result<(), EncodeError>;

    /// Encoder name for logging
    fn name(&self) -> &str;
}
