// src/export/mod.rs

mod excel_date;
mod fs_utils;
mod model;
mod xlsx;

use crate::config::Config;
use crate::core::session::UserId;
use crate::errors::{AppError, AppResult};
use crate::models::Row;
use rust_xlsxwriter::Color;
use std::path::PathBuf;
use tracing::info;

/// Result of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exported {
    /// Where the workbook was written.
    pub path: PathBuf,
    /// Name the document is sent under.
    pub file_name: String,
    pub rows: usize,
}

/// Writes a session's rows to an XLSX workbook.
#[derive(Debug, Clone)]
pub struct Exporter {
    dir: PathBuf,
    file_name: String,
    highlight: Color,
}

impl Exporter {
    pub fn new(dir: impl Into<PathBuf>, file_name: impl Into<String>, highlight: u32) -> Self {
        Self {
            dir: dir.into(),
            file_name: file_name.into(),
            highlight: Color::RGB(highlight),
        }
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Ok(Self::new(
            cfg.export_dir.clone(),
            cfg.file_name.clone(),
            cfg.highlight_rgb()?,
        ))
    }

    /// Export `rows` for `user`.
    ///
    /// Fails with `NoDataToExport` on an empty slice (nothing is written)
    /// and with `ExportFailure` when the file cannot be produced.
    pub fn export(&self, user: UserId, rows: &[Row]) -> AppResult<Exported> {
        if rows.is_empty() {
            return Err(AppError::NoDataToExport);
        }

        fs_utils::ensure_dir(&self.dir)?;
        let path = fs_utils::output_path(&self.dir, user, &self.file_name);

        xlsx::export_xlsx(rows, &path, self.highlight)?;

        info!(user, rows = rows.len(), path = %path.display(), "XLSX export completed");
        Ok(Exported {
            path,
            file_name: self.file_name.clone(),
            rows: rows.len(),
        })
    }
}
