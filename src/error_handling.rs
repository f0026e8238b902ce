// error_handling.rs - Error taxonomy shared by the encoder library

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("Failed to open maze file {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cell center at character row {row}, column {col} should be a space, found {found}")]
    GridMismatch {
        row: usize,
        col: usize,
        found: String,
    },

    #[error("Grid size must be positive")]
    ZeroGridSize,

    #[error("Failed to write manifest {path}: {source}")]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Manifest JSON error for {path}: {source}")]
    ManifestJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl EncodeError {
    /// Whether this error is a per-cell validation failure, as opposed to an
    /// I/O or usage problem. Lenient encoding only degrades on these.
    pub fn is_grid_mismatch(&self) -> bool {
        matches!(self, EncodeError::GridMismatch { .. })
    }
}

pub type Result<T> = std::result::Result<T, EncodeError>;
