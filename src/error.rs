//! Error type shared by every table operation.
//!
//! Only schema problems are errors. Numeric-domain problems (division by zero,
//! missing competition dates) flow through as NaN/inf and are handled by the
//! callers that care.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeatureError {
    /// A column the operation depends on is not in the table.
    #[error("Missing required column: `{column}`")]
    MissingColumn { column: String },

    /// A field does not parse as the type its column needs.
    #[error("Column `{column}` line {line}: expected {expected}, found `{found}`")]
    TypeMismatch {
        column: String,
        /// 1-based CSV line, header included.
        line: usize,
        expected: &'static str,
        found: String,
    },

    #[error("Duplicate column name: `{column}`")]
    DuplicateColumn { column: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl FeatureError {
    pub fn missing(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// True for the schema errors (missing, duplicate or mistyped column).
    pub fn is_schema(&self) -> bool {
        matches!(
            self,
            Self::MissingColumn { .. } | Self::TypeMismatch { .. } | Self::DuplicateColumn { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, FeatureError>;
