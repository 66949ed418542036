//! Error types for loading and report generation

use thiserror::Error;

/// A filtered record that cannot be normalized into a report entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Card name is empty once whitespace is trimmed
    #[error("card {id} has an empty title")]
    EmptyTitle { id: String },
}

/// Criteria that make the whole run meaningless.
///
/// Raised before any record is filtered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("target label must not be empty")]
    EmptyTargetLabel,

    #[error("target list name must not be empty")]
    EmptyTargetList,

    #[error("report header must not be empty")]
    EmptyHeader,
}

/// A CSV row that cannot be parsed into an input record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    /// Required column absent from the header row; fatal for the whole file
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {line}: empty Card ID")]
    EmptyId { line: u64 },

    #[error("row {line}: unrecognized Archived value '{value}'")]
    InvalidArchived { line: u64, value: String },

    #[error("row {line}: duplicate Card ID '{id}'")]
    DuplicateId { line: u64, id: String },

    /// The csv reader could not decode the row
    #[error("row {line}: {message}")]
    Malformed { line: u64, message: String },
}
