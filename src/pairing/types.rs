use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::config::Roots;
use crate::report::Notice;

use super::{OUTPUT_EXTENSION, VIDEO_EXTENSION};

/// One subdirectory name resolved under all three roots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubdirPair {
    /// Shared subdirectory name
    pub name: OsString,
    /// `<audio root>/<name>`
    pub audio_dir: PathBuf,
    /// `<video root>/<name>`
    pub video_dir: PathBuf,
    /// `<output root>/<name>`
    pub output_dir: PathBuf,
}

impl SubdirPair {
    pub fn new(roots: &Roots, name: &OsStr) -> Self {
        Self {
            name: name.to_os_string(),
            audio_dir: roots.audio.join(name),
            video_dir: roots.video.join(name),
            output_dir: roots.output.join(name),
        }
    }

    /// Subdirectory name for display in notices
    pub fn display_name(&self) -> String {
        self.name.to_string_lossy().into_owned()
    }

    /// Expected video file for an audio base name
    pub fn video_file(&self, base_name: &OsStr) -> PathBuf {
        self.video_dir.join(with_extension(base_name, VIDEO_EXTENSION))
    }

    /// Output file for an audio base name
    pub fn output_file(&self, base_name: &OsStr) -> PathBuf {
        self.output_dir.join(with_extension(base_name, OUTPUT_EXTENSION))
    }
}

/// Audio and video inputs plus the merged output they produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePair {
    /// Source audio (`.wav`)
    pub audio: PathBuf,
    /// Source video (`.mp4`), same base name as the audio
    pub video: PathBuf,
    /// Merged output (`.webm`) inside the mirrored output subdirectory
    pub output: PathBuf,
}

impl FilePair {
    /// Output path relative to the output root, e.g. `A/1.webm`
    pub fn relative_output<'a>(&'a self, output_root: &Path) -> &'a Path {
        self.output.strip_prefix(output_root).unwrap_or(&self.output)
    }
}

/// Item produced by the pair walker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discovery {
    /// A matched pair ready to merge
    Pair(FilePair),
    /// Something was skipped; carries the notice to report
    Skipped(Notice),
}

// Appends `.ext` without touching dots already in the base name
// (`Path::with_extension` would replace `take.2` with `take.mp4`).
fn with_extension(base_name: &OsStr, extension: &str) -> OsString {
    let mut name = base_name.to_os_string();
    name.push(".");
    name.push(extension);
    name
}
