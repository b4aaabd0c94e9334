// src/export/fs_utils.rs

use crate::core::session::UserId;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Make sure the export directory exists.
pub(crate) fn ensure_dir(dir: &Path) -> AppResult<()> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| {
        AppError::ExportFailure(format!("cannot create {}: {e}", dir.display()))
    })
}

/// One file per user, overwritten on every export.
pub(crate) fn output_path(dir: &Path, user: UserId, file_name: &str) -> PathBuf {
    dir.join(format!("{user}_{file_name}"))
}
