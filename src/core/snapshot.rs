use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::capture::Frame;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to write snapshot image: {0}")]
    Write(#[from] image::ImageError),
}

/// Persists captured frames as timestamped PNGs in one directory.
pub struct SnapshotWriter {
    dir: PathBuf,
}

impl SnapshotWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates the snapshot directory if it does not exist yet.
    pub fn ensure_dir(&self) -> io::Result<()> {
        fs::create_dir_all(&self.dir)
    }

    /// Writes `frame` as `snapshot_<unixtime-millis>.png`, the millis taken
    /// from the frame's own capture time, and returns the path written.
    pub fn write(&self, frame: &Frame) -> Result<PathBuf, SnapshotError> {
        let name = format!("snapshot_{}.png", frame.taken_at.timestamp_millis());
        let path = self.dir.join(name);
        frame.image.save(&path)?;
        Ok(path)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
