use thiserror::Error;

/// Errors from metadata and data-URI handling.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The string is not a data URI with a recognized prefix.
    #[error("malformed data URI: {0}")]
    MalformedUri(String),

    /// The media type is not one this crate knows how to label.
    #[error("unknown media type: {0}")]
    UnknownMediaType(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("base64 error: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Result alias for metadata operations.
pub type MetadataResult<T> = Result<T, MetadataError>;
