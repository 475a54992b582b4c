//! OS directory resolution.

use std::io;
use std::path::{Path, PathBuf};

use gravity_config::default_config_dir;

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("could not determine OS configuration directory")]
    NoConfigDir,

    #[error("platform I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Where the playground keeps its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformDirs {
    /// Holds `config.ron`.
    pub config_dir: PathBuf,
    /// Debug-build JSON logs.
    pub log_dir: PathBuf,
}

impl PlatformDirs {
    /// Resolves the OS locations without touching the disk.
    pub fn resolve() -> Result<Self, PlatformError> {
        let app_dir = default_config_dir().map_err(|_| PlatformError::NoConfigDir)?;
        Ok(Self::under(app_dir))
    }

    /// Uses `config_dir` as given; logs go in a `logs` subdirectory.
    pub fn with_config_dir(config_dir: &Path) -> Self {
        Self::under(config_dir.to_path_buf())
    }

    fn under(app_dir: PathBuf) -> Self {
        Self {
            log_dir: app_dir.join("logs"),
            config_dir: app_dir,
        }
    }

    pub fn create_dirs(&self) -> Result<(), PlatformError> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}
