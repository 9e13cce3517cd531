//! Token metadata assembly for engrave.
//!
//! The payload an uploader drives onto the ledger is a self-describing
//! `data:` URI: JSON metadata (`name`, `description`, `image`) whose image
//! field is itself a base64 data URI of the raw image bytes. This crate
//! builds those URIs and decodes them back for read-back verification.
//! Chunking never looks inside the payload — assembly happens entirely
//! before the splitter runs.

pub mod error;
pub mod token;
pub mod uri;

pub use error::{MetadataError, MetadataResult};
pub use token::{MediaType, TokenMetadata};
pub use uri::{
    decode_image, decode_json, encode_image, encode_json_base64, encode_json_plain,
};
