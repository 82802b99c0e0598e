use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::errors::{SceneError, SceneResult};

pub trait PathExt {
    fn is_snapshot_file(&self) -> bool;
    fn to_canonical(&self) -> SceneResult<PathBuf>;
}

impl PathExt for Path {
    fn is_snapshot_file(&self) -> bool {
        self.extension() == Some(OsStr::new("outline"))
    }

    fn to_canonical(&self) -> SceneResult<PathBuf> {
        self.canonicalize().map_err(|e| SceneError::PathResolution {
            path: self.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

pub fn ensure_file_exists(path: &Path) -> SceneResult<()> {
    if !path.exists() {
        Err(SceneError::FileNotFound(path.to_path_buf()))
    } else if !path.is_file() {
        Err(SceneError::InvalidFormat {
            path: path.to_path_buf(),
            reason: "Not a file".to_string(),
        })
    } else {
        Ok(())
    }
}

pub fn ensure_dir_exists(path: &Path) -> SceneResult<()> {
    if !path.exists() {
        Err(SceneError::FileNotFound(path.to_path_buf()))
    } else if !path.is_dir() {
        Err(SceneError::InvalidFormat {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        })
    } else {
        Ok(())
    }
}
