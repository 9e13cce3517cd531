use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MetadataError;
use crate::uri;

/// Image media types we can label inside a data URI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaType {
    Jpeg,
    Png,
    Gif,
    Svg,
}

impl MediaType {
    /// The MIME type string used in the data URI.
    pub fn mime(&self) -> &'static str {
        match self {
            MediaType::Jpeg => "image/jpeg",
            MediaType::Png => "image/png",
            MediaType::Gif => "image/gif",
            MediaType::Svg => "image/svg+xml",
        }
    }

    /// Guess the media type from a file extension.
    pub fn from_extension(ext: &str) -> Result<Self, MetadataError> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(MediaType::Jpeg),
            "png" => Ok(MediaType::Png),
            "gif" => Ok(MediaType::Gif),
            "svg" => Ok(MediaType::Svg),
            other => Err(MetadataError::UnknownMediaType(other.to_string())),
        }
    }

    /// Look up the media type for a MIME string.
    pub fn from_mime(mime: &str) -> Result<Self, MetadataError> {
        match mime {
            "image/jpeg" => Ok(MediaType::Jpeg),
            "image/png" => Ok(MediaType::Png),
            "image/gif" => Ok(MediaType::Gif),
            "image/svg+xml" => Ok(MediaType::Svg),
            other => Err(MetadataError::UnknownMediaType(other.to_string())),
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

/// The JSON metadata record an entry's payload carries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub description: String,
    /// A `data:<mime>;base64,<bytes>` URI, or empty when no image is set.
    #[serde(default)]
    pub image: String,
}

impl TokenMetadata {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            image: String::new(),
        }
    }

    /// Embed raw image bytes as a base64 data URI.
    pub fn with_image(mut self, media: MediaType, bytes: &[u8]) -> Self {
        self.image = uri::encode_image(media, bytes);
        self
    }

    /// Decode the embedded image back to its media type and raw bytes.
    pub fn image_bytes(&self) -> Result<(MediaType, Vec<u8>), MetadataError> {
        uri::decode_image(&self.image)
    }
}
