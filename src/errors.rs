use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SceneError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid snapshot format in {path}: {reason}")]
    InvalidFormat {
        path: PathBuf,
        reason: String,
    },

    #[error("Unsupported snapshot version {found} in {path} (supported: {supported})")]
    UnsupportedVersion {
        path: PathBuf,
        found: u32,
        supported: u32,
    },

    #[error("Snapshot contains no nodes: {0}")]
    EmptyModel(PathBuf),

    #[error("Multiple root nodes found in: {0}")]
    MultipleRoots(PathBuf),

    #[error("No loader for file: {0}")]
    UnknownFormat(PathBuf),

    #[error("Path resolution failed: {path}, reason: {reason}")]
    PathResolution {
        path: PathBuf,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    Config {
        message: String,
    },

    #[error("Internal scene operation failed: {0}")]
    InternalError(String),
}

pub type SceneResult<T> = Result<T, SceneError>;
