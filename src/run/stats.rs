use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::report::Notice;

/// Counters for one merge run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// When the run started
    pub started_at: DateTime<Utc>,

    /// When the run finished, once it has
    pub finished_at: Option<DateTime<Utc>>,

    /// Pairs the encoder merged successfully
    pub merged: usize,

    /// Pairs the encoder failed on
    pub failed: usize,

    /// Audio subdirectories skipped (no video folder, unreadable, or no output folder)
    pub folders_skipped: usize,

    /// Audio files skipped for lack of a matching video file
    pub files_skipped: usize,
}

impl RunStats {
    pub fn start() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            merged: 0,
            failed: 0,
            folders_skipped: 0,
            files_skipped: 0,
        }
    }

    /// Count a notice against the matching counter
    pub fn record(&mut self, notice: &Notice) {
        match notice {
            Notice::FolderSkipped { .. }
            | Notice::FolderUnreadable { .. }
            | Notice::OutputDirFailed { .. } => self.folders_skipped += 1,
            Notice::FileSkipped { .. } => self.files_skipped += 1,
            Notice::MergeFailed { .. } => self.failed += 1,
            Notice::Merging { .. } => {}
        }
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Pairs handed to the encoder
    pub fn attempted(&self) -> usize {
        self.merged + self.failed
    }

    /// True when no merge invocation failed; skips do not count
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Wall-clock duration in seconds, if finished
    pub fn duration_secs(&self) -> Option<f64> {
        self.finished_at
            .map(|end| (end - self.started_at).num_milliseconds() as f64 / 1000.0)
    }
}
