use std::process::ExitCode;

use av_merge::{exit_status, run, Args, FfmpegEncoder, TracingReporter};
use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    let mut encoder = FfmpegEncoder::new();
    let mut reporter = TracingReporter;

    let result = args
        .roots()
        .and_then(|roots| run(&roots, &mut encoder, &mut reporter));

    match &result {
        Ok(stats) => {
            match serde_json::to_string(stats) {
                Ok(json) => debug!(stats = %json, "Run statistics"),
                Err(e) => debug!("Failed to serialize run statistics: {}", e),
            }

            if stats.is_success() {
                info!("Done in {:.1}s", stats.duration_secs().unwrap_or(0.0));
            } else {
                error!("{} of {} merges failed", stats.failed, stats.attempted());
            }
        }
        Err(e) => error!("{:#}", e),
    }

    ExitCode::from(exit_status(&result))
}
