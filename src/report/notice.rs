use std::fmt;
use std::path::PathBuf;

/// A progress, skip, or failure event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The audio subdirectory has no video counterpart
    FolderSkipped { subdir: String, video_dir: PathBuf },

    /// The audio subdirectory could not be listed
    FolderUnreadable {
        subdir: String,
        audio_dir: PathBuf,
        reason: String,
    },

    /// The mirrored output subdirectory could not be created
    OutputDirFailed {
        subdir: String,
        output_dir: PathBuf,
        reason: String,
    },

    /// The audio file has no video file with the same base name
    FileSkipped { audio: PathBuf, video: PathBuf },

    /// A merge invocation is about to start
    Merging {
        audio: PathBuf,
        video: PathBuf,
        output: PathBuf,
    },

    /// The encoder failed for one pair
    MergeFailed { output: PathBuf, reason: String },
}

impl Notice {
    /// Whether this notice means a folder or file was skipped
    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            Notice::FolderSkipped { .. }
                | Notice::FolderUnreadable { .. }
                | Notice::OutputDirFailed { .. }
                | Notice::FileSkipped { .. }
        )
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::FolderSkipped { subdir, video_dir } => write!(
                f,
                "Video folder '{}' not found. Skipping folder '{}'.",
                video_dir.display(),
                subdir
            ),
            Notice::FolderUnreadable {
                subdir,
                audio_dir,
                reason,
            } => write!(
                f,
                "Could not read audio folder '{}': {}. Skipping folder '{}'.",
                audio_dir.display(),
                reason,
                subdir
            ),
            Notice::OutputDirFailed {
                subdir,
                output_dir,
                reason,
            } => write!(
                f,
                "Could not create output folder '{}': {}. Skipping folder '{}'.",
                output_dir.display(),
                reason,
                subdir
            ),
            Notice::FileSkipped { audio, video } => write!(
                f,
                "Corresponding video file '{}' not found for audio '{}'. Skipping file.",
                video.display(),
                audio.display()
            ),
            Notice::Merging {
                audio,
                video,
                output,
            } => write!(
                f,
                "Merging audio '{}' with video '{}' into '{}'.",
                audio.display(),
                video.display(),
                output.display()
            ),
            Notice::MergeFailed { output, reason } => {
                write!(f, "Error during merging into '{}': {}", output.display(), reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_skipped_message_names_path_and_folder() {
        let notice = Notice::FolderSkipped {
            subdir: "B".to_string(),
            video_dir: PathBuf::from("/video/B"),
        };

        let text = notice.to_string();
        assert!(text.contains("'/video/B'"));
        assert!(text.contains("Skipping folder 'B'"));
        assert!(notice.is_skip());
    }

    #[test]
    fn test_merging_is_not_a_skip() {
        let notice = Notice::Merging {
            audio: PathBuf::from("a/1.wav"),
            video: PathBuf::from("v/1.mp4"),
            output: PathBuf::from("o/1.webm"),
        };

        assert!(!notice.is_skip());
        assert_eq!(
            notice.to_string(),
            "Merging audio 'a/1.wav' with video 'v/1.mp4' into 'o/1.webm'."
        );
    }
}
