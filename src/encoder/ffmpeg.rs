use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

use super::{EncodeError, Encoder};
use crate::pairing::FilePair;

/// Transcoding parameters passed to ffmpeg for every pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderSettings {
    pub video_codec: String,
    pub video_bitrate: String,
    pub audio_codec: String,
    pub audio_bitrate: String,
    /// Stream taken from the first input (the video file)
    pub video_map: String,
    /// Stream taken from the second input (the audio file)
    pub audio_map: String,
}

impl Default for EncoderSettings {
    fn default() -> Self {
        Self {
            video_codec: "libvpx-vp9".to_string(),
            video_bitrate: "2M".to_string(),
            audio_codec: "libopus".to_string(),
            audio_bitrate: "128k".to_string(),
            video_map: "0:v:0".to_string(),
            audio_map: "1:a:0".to_string(),
        }
    }
}

/// Number of trailing stderr lines kept in a failure message
const STDERR_TAIL_LINES: usize = 5;

/// Runs the ffmpeg CLI once per pair
#[derive(Debug, Clone)]
pub struct FfmpegEncoder {
    program: PathBuf,
    settings: EncoderSettings,
}

impl FfmpegEncoder {
    /// `ffmpeg` resolved through `PATH`
    pub fn new() -> Self {
        Self::with_program("ffmpeg")
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            settings: EncoderSettings::default(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn settings(&self) -> &EncoderSettings {
        &self.settings
    }

    /// Full argument list for one pair: video input first, audio second
    pub fn args(&self, pair: &FilePair) -> Vec<OsString> {
        let s = &self.settings;
        let mut args: Vec<OsString> = Vec::with_capacity(19);

        args.push("-y".into());
        args.push("-i".into());
        args.push(pair.video.clone().into_os_string());
        args.push("-i".into());
        args.push(pair.audio.clone().into_os_string());

        for (flag, value) in [
            ("-c:v", &s.video_codec),
            ("-b:v", &s.video_bitrate),
            ("-c:a", &s.audio_codec),
            ("-b:a", &s.audio_bitrate),
            ("-map", &s.video_map),
            ("-map", &s.audio_map),
        ] {
            args.push(flag.into());
            args.push(value.into());
        }

        args.push(pair.output.clone().into_os_string());
        args
    }
}

impl Default for FfmpegEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for FfmpegEncoder {
    fn merge(&mut self, pair: &FilePair) -> Result<(), EncodeError> {
        let program = self.program.display().to_string();
        let args = self.args(pair);
        debug!("Running {} with {} arguments", program, args.len());

        // stdout is dropped so encoder chatter never mixes with notices
        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| EncodeError::Spawn {
                program: program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(EncodeError::Failed {
                program,
                status: output.status,
                detail: stderr_tail(&output.stderr, STDERR_TAIL_LINES),
            });
        }

        debug!("Wrote {}", pair.output.display());
        Ok(())
    }

    fn name(&self) -> &str {
        "ffmpeg"
    }
}

/// Last `max_lines` non-empty lines of captured stderr, joined with `; `
fn stderr_tail(stderr: &[u8], max_lines: usize) -> String {
    let text = String::from_utf8_lossy(stderr);
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        return "no diagnostic output".to_string();
    }

    let start = lines.len().saturating_sub(max_lines);
    lines[start..].join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stderr_tail_keeps_last_lines() {
        let stderr = b"ffmpeg version 6.1\n  built with gcc\n\nInput #0\nout.webm: Permission denied\n";
        assert_eq!(
            stderr_tail(stderr, 2),
            "Input #0; out.webm: Permission denied"
        );
    }

    #[test]
    fn test_stderr_tail_empty() {
        assert_eq!(stderr_tail(b"\n\n", 5), "no diagnostic output");
    }

    #[test]
    fn test_default_settings() {
        let settings = EncoderSettings::default();

        assert_eq!(settings.video_codec, "libvpx-vp9");
        assert_eq!(settings.video_bitrate, "2M");
        assert_eq!(settings.audio_codec, "libopus");
        assert_eq!(settings.audio_bitrate, "128k");
        assert_eq!(settings.video_map, "0:v:0");
        assert_eq!(settings.audio_map, "1:a:0");
    }
}
