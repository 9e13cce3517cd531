use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid entry id: {0}")]
    InvalidEntryId(String),

    #[error("caller principal must not be empty")]
    EmptyCaller,
}
