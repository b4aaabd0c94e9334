//! Unified application error type.
//! The workflow (validator, builder, store, export) and the outer shell
//! (config, cli) all return AppError so every failure is handled the same way.

use crate::models::field::Field;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Field input (recovered by re-prompting)
    // ---------------------------
    #[error("Invalid format for {0}")]
    InvalidFormat(Field),

    #[error("National code {0} already recorded today")]
    DuplicateEntry(String),

    // ---------------------------
    // Session errors
    // ---------------------------
    #[error("No row to cancel")]
    NothingToCancel,

    #[error("No data to export")]
    NoDataToExport,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    ExportFailure(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),

    #[error("Invalid user id: {0}")]
    InvalidUser(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
