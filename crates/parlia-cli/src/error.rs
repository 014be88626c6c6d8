use std::path::PathBuf;

use parlia_logic::csv::CsvError;
use parlia_logic::LayoutError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: CsvError,
    },

    #[error("layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("harness failed: {failed} of {total} checks")]
    HarnessFailed { failed: usize, total: usize },
}

impl CliError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument { .. } => 2,
            _ => 1,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
