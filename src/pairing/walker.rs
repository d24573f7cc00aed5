use anyhow::{Context, Result};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::Path;
use std::vec;
use tracing::debug;

use super::types::{Discovery, FilePair, SubdirPair};
use super::AUDIO_EXTENSION;
use crate::config::Roots;
use crate::report::Notice;

/// Lazy walk over the audio root yielding matched pairs and skip notices
///
/// Only the audio root is listed up front. Each subdirectory is checked,
/// its output directory created, and its files listed when the walk
/// reaches it. Entries are visited in sorted name order at both levels.
pub struct PairWalker {
    roots: Roots,
    subdirs: vec::IntoIter<OsString>,
    current: Option<OpenFolder>,
}

struct OpenFolder {
    pair: SubdirPair,
    files: vec::IntoIter<OsString>,
}

impl PairWalker {
    pub fn new(roots: &Roots) -> Result<Self> {
        let names = sorted_names(&roots.audio).with_context(|| {
            format!("Failed to read audio directory: {}", roots.audio.display())
        })?;

        // Plain files at the top level are ignored without a notice
        let subdirs: Vec<OsString> = names
            .into_iter()
            .filter(|name| roots.audio.join(name).is_dir())
            .collect();

        debug!(
            "Found {} audio subdirectories in {}",
            subdirs.len(),
            roots.audio.display()
        );

        Ok(Self {
            roots: roots.clone(),
            subdirs: subdirs.into_iter(),
            current: None,
        })
    }

    /// Resolve a subdirectory against the video and output roots
    ///
    /// Returns the notice to report when the folder has to be skipped.
    fn open_folder(&self, name: &OsStr) -> Result<OpenFolder, Notice> {
        let pair = SubdirPair::new(&self.roots, name);

        if !pair.video_dir.is_dir() {
            return Err(Notice::FolderSkipped {
                subdir: pair.display_name(),
                video_dir: pair.video_dir,
            });
        }

        if let Err(e) = fs::create_dir_all(&pair.output_dir) {
            return Err(Notice::OutputDirFailed {
                subdir: pair.display_name(),
                output_dir: pair.output_dir,
                reason: e.to_string(),
            });
        }

        let files = match sorted_names(&pair.audio_dir) {
            Ok(files) => files,
            Err(e) => {
                return Err(Notice::FolderUnreadable {
                    subdir: pair.display_name(),
                    audio_dir: pair.audio_dir,
                    reason: e.to_string(),
                })
            }
        };

        debug!(
            "Pairing {} ({} entries)",
            pair.audio_dir.display(),
            files.len()
        );

        Ok(OpenFolder {
            pair,
            files: files.into_iter(),
        })
    }
}

impl OpenFolder {
    fn next_discovery(&mut self) -> Option<Discovery> {
        for file_name in self.files.by_ref() {
            let audio = self.pair.audio_dir.join(&file_name);
            let Some(base_name) = audio_base_name(&file_name) else {
                continue;
            };
            if !audio.is_file() {
                continue;
            }

            let video = self.pair.video_file(base_name);
            if !video.exists() {
                return Some(Discovery::Skipped(Notice::FileSkipped { audio, video }));
            }

            let output = self.pair.output_file(base_name);
            return Some(Discovery::Pair(FilePair {
                audio,
                video,
                output,
            }));
        }

        None
    }
}

impl Iterator for PairWalker {
    type Item = Discovery;

    fn next(&mut self) -> Option<Discovery> {
        loop {
            if let Some(folder) = &mut self.current {
                if let Some(discovery) = folder.next_discovery() {
                    return Some(discovery);
                }
                self.current = None;
            }

            let name = self.subdirs.next()?;
            match self.open_folder(&name) {
                Ok(folder) => self.current = Some(folder),
                Err(notice) => return Some(Discovery::Skipped(notice)),
            }
        }
    }
}

/// Base name of a source audio file, or `None` if it is not one
///
/// The extension comparison ignores ASCII case (`take.WAV` matches);
/// the returned base name keeps its original case. A file named just
/// `.wav` has no extension of its own, so its whole name is the base
/// name and its counterpart is `.wav.mp4`.
pub fn audio_base_name(file_name: &OsStr) -> Option<&OsStr> {
    let path = Path::new(file_name);
    match path.extension() {
        Some(extension) if extension.eq_ignore_ascii_case(AUDIO_EXTENSION) => path.file_stem(),
        Some(_) => None,
        None if is_bare_audio_name(file_name) => Some(file_name),
        None => None,
    }
}

fn is_bare_audio_name(file_name: &OsStr) -> bool {
    file_name
        .to_str()
        .and_then(|name| name.strip_prefix('.'))
        .map_or(false, |rest| rest.eq_ignore_ascii_case(AUDIO_EXTENSION))
}

fn sorted_names(dir: &Path) -> io::Result<Vec<OsString>> {
    let mut names = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.file_name()))
        .collect::<io::Result<Vec<_>>>()?;
    names.sort();
    Ok(names)
}
