//! Reading and writing [`ClockSettings`] to a small fixed-layout binary file.
//!
//! The layout is bincode's legacy encoding of [`ClockSettings`]: hue, saturation
//! and value as little-endian `f64`, then `enable_date` as a single byte
//! (written 0 or 1, any nonzero byte reads back as true).
//! 25 bytes in total, with no header or version tag.

use crate::settings::ClockSettings;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum StoreError {
    Read(std::io::Error),
    Write(std::io::Error),
}
impl StoreError {
    /// True when the settings file simply doesn't exist yet.
    pub fn is_missing_file(&self) -> bool {
        matches!(self, Self::Read(err) if err.kind() == std::io::ErrorKind::NotFound)
    }
}
impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read(err) => write!(f, "failed to read settings: {err}"),
            Self::Write(err) => write!(f, "failed to write settings: {err}"),
        }
    }
}
impl std::error::Error for StoreError {}

pub struct SettingsStore {
    path: PathBuf,
}
impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<ClockSettings, StoreError> {
        let bytes = std::fs::read(&self.path).map_err(StoreError::Read)?;
        bincode::deserialize(&bytes).map_err(|err| {
            StoreError::Read(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Failed to parse settings from {:?} : {err}", self.path),
            ))
        })
    }

    /// Creates or truncates the file, then writes every field.
    pub fn save(&self, settings: &ClockSettings) -> Result<(), StoreError> {
        let bytes = bincode::serialize(settings).map_err(|err| {
            StoreError::Write(std::io::Error::new(
                std::io::ErrorKind::Other,
                err.to_string(),
            ))
        })?;
        if let Some(dir) = self.path.parent() {
            _ = std::fs::create_dir_all(dir);
        }
        std::fs::write(&self.path, bytes).map_err(StoreError::Write)
    }
}
