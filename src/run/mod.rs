//! Merge run driver
//!
//! Walks the pairs in order and hands each one to the encoder, waiting
//! for it before moving on. Per-folder and per-pair problems become
//! notices; only a failure to list the audio root ends the run early.

mod stats;

pub use stats::RunStats;

use anyhow::Result;
use tracing::{debug, info};

use crate::config::Roots;
use crate::encoder::Encoder;
use crate::pairing::{Discovery, PairWalker};
use crate::report::{Notice, Reporter};

/// Exit status when every attempted merge succeeded (skips included)
pub const EXIT_SUCCESS: u8 = 0;

/// Exit status when at least one merge invocation failed
pub const EXIT_MERGE_FAILED: u8 = 1;

/// Exit status for startup errors, matching clap's usage error code
pub const EXIT_STARTUP_ERROR: u8 = 2;

/// Process exit status for the outcome of a run
///
/// An `Err` means the run never started: bad roots or an unlistable
/// audio root.
pub fn exit_status(result: &Result<RunStats>) -> u8 {
    match result {
        Ok(stats) if stats.is_success() => EXIT_SUCCESS,
        Ok(_) => EXIT_MERGE_FAILED,
        Err(_) => EXIT_STARTUP_ERROR,
    }
}

/// Merge every matched pair under `roots`
pub fn run(
    roots: &Roots,
    encoder: &mut dyn Encoder,
    reporter: &mut dyn Reporter,
) -> Result<RunStats> {
    let mut stats = RunStats::start();

    info!(
        "Merging {} + {} into {} with {}",
        roots.audio.display(),
        roots.video.display(),
        roots.output.display(),
        encoder.name()
    );

    for discovery in PairWalker::new(roots)? {
        let pair = match discovery {
            Discovery::Pair(pair) => pair,
            Discovery::Skipped(notice) => {
                stats.record(&notice);
                reporter.notice(notice);
                continue;
            }
        };

        reporter.notice(Notice::Merging {
            audio: pair.audio.clone(),
            video: pair.video.clone(),
            output: pair.output.clone(),
        });

        match encoder.merge(&pair) {
            Ok(()) => {
                stats.merged += 1;
                debug!("Merged {}", pair.relative_output(&roots.output).display());
            }
            Err(e) => {
                let notice = Notice::MergeFailed {
                    output: pair.output,
                    reason: e.to_string(),
                };
                stats.record(&notice);
                reporter.notice(notice);
            }
        }
    }

    stats.finish();

    info!(
        "Run complete: {} merged, {} failed, {} folders skipped, {} files skipped",
        stats.merged, stats.failed, stats.folders_skipped, stats.files_skipped
    );

    Ok(stats)
}
