use anyhow::{bail, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "av-merge", version)]
#[command(
    about = "Merge WAV audio with matching MP4 video into WebM files using ffmpeg"
)]
pub struct Args {
    /// Path to the input audio directory
    pub inp_aud_dir: String,

    /// Path to the input video directory
    pub inp_vid_dir: String,

    /// Path to the output video directory
    pub out_vid_dir: String,
}

impl Args {
    /// Expand `~` in each argument and validate the resulting roots
    pub fn roots(&self) -> Result<Roots> {
        Roots::new(
            expand_path(&self.inp_aud_dir),
            expand_path(&self.inp_vid_dir),
            expand_path(&self.out_vid_dir),
        )
    }
}

/// The three root directories of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roots {
    pub audio: PathBuf,
    pub video: PathBuf,
    pub output: PathBuf,
}

impl Roots {
    /// Both input roots must be existing directories. The output root may
    /// be missing (it is created per subdirectory) but must not be a file.
    pub fn new(
        audio: impl Into<PathBuf>,
        video: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Result<Self> {
        let roots = Self {
            audio: audio.into(),
            video: video.into(),
            output: output.into(),
        };

        require_dir(&roots.audio, "Audio")?;
        require_dir(&roots.video, "Video")?;

        if roots.output.exists() && !roots.output.is_dir() {
            bail!(
                "Output path is not a directory: {}",
                roots.output.display()
            );
        }

        Ok(roots)
    }
}

fn require_dir(path: &Path, label: &str) -> Result<()> {
    if !path.exists() {
        bail!("{} directory not found: {}", label, path.display());
    }
    if !path.is_dir() {
        bail!("{} path is not a directory: {}", label, path.display());
    }
    Ok(())
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}
