//! Error types shared by every pipeline stage.

use thiserror::Error;

use crate::config::ConfigError;
use crate::table::StationCode;

/// Structural problem detected while building or validating a table.
///
/// Raised eagerly at construction time, never mid-computation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("schema error: {field}: {message}")]
pub struct SchemaError {
    /// Offending column, code, date or file field (e.g. `"flow[118]"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl SchemaError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Unified error type for loading, transforming and exporting ENA tables.
#[derive(Error, Debug)]
pub enum EnaError {
    /// Malformed or incomplete structural input.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// An injected station code collides with an existing flow column.
    #[error("duplicate column: station {code} already exists in the flow table")]
    DuplicateColumn { code: StationCode },

    /// Invalid run configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// File access errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader/writer errors.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience alias for results carrying [`EnaError`].
pub type Result<T> = std::result::Result<T, EnaError>;
