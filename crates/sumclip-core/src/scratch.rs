//! Per-run scratch directories.
//!
//! Every pipeline run gets its own uniquely named directory under the user
//! cache dir, so two runs never clobber each other's intermediate files.
//! The directory is removed when the handle drops unless [`ScratchDir::keep`]
//! was called.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::Result;

pub fn root_scratch_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("sumclip")
}

#[derive(Debug)]
pub struct ScratchDir {
    path: PathBuf,
    keep: bool,
}

impl ScratchDir {
    /// Create a fresh scratch directory for one pipeline run.
    pub fn create() -> Result<Self> {
        let path = root_scratch_dir().join(Uuid::new_v4().to_string());
        std::fs::create_dir_all(&path)?;
        Ok(Self { path, keep: false })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Leave the directory on disk after drop. Used when the run produced
    /// outputs the user wants to keep around.
    pub fn keep(&mut self) {
        self.keep = true;
    }

    pub fn audio_path(&self) -> PathBuf {
        self.path.join("audio.wav")
    }

    pub fn transcript_path(&self) -> PathBuf {
        self.path.join("transcript.json")
    }

    pub fn clip_path(&self) -> PathBuf {
        self.path.join("clip.mp4")
    }

    pub fn summary_clip_path(&self) -> PathBuf {
        self.path.join("summary_clip.mp4")
    }

    pub fn part_path(&self, index: usize) -> PathBuf {
        self.path.join(format!("part_{index:04}.mp4"))
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if !self.keep {
            let _ = std::fs::remove_dir_all(&self.path);
        }
    }
}
