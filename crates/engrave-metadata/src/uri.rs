use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{MetadataError, MetadataResult};
use crate::token::{MediaType, TokenMetadata};

const JSON_PLAIN_PREFIX: &str = "data:application/json,";
const JSON_BASE64_PREFIX: &str = "data:application/json;base64,";

/// Embed raw image bytes: `data:<mime>;base64,<b64>`.
pub fn encode_image(media: MediaType, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", media.mime(), STANDARD.encode(bytes))
}

/// Decode a base64 image data URI back to its media type and raw bytes.
pub fn decode_image(uri: &str) -> MetadataResult<(MediaType, Vec<u8>)> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| MetadataError::MalformedUri(truncated(uri)))?;
    let (mime, payload) = rest
        .split_once(";base64,")
        .ok_or_else(|| MetadataError::MalformedUri(truncated(uri)))?;
    let media = MediaType::from_mime(mime)?;
    Ok((media, STANDARD.decode(payload)?))
}

/// Serialize metadata as a plain JSON data URI:
/// `data:application/json,<json>`.
pub fn encode_json_plain(metadata: &TokenMetadata) -> MetadataResult<String> {
    let json = serde_json::to_string(metadata)?;
    Ok(format!("{JSON_PLAIN_PREFIX}{json}"))
}

/// Serialize metadata as a base64 JSON data URI:
/// `data:application/json;base64,<b64(json)>`.
pub fn encode_json_base64(metadata: &TokenMetadata) -> MetadataResult<String> {
    let json = serde_json::to_string(metadata)?;
    Ok(format!("{JSON_BASE64_PREFIX}{}", STANDARD.encode(json)))
}

/// Parse either metadata URI form back to [`TokenMetadata`].
pub fn decode_json(uri: &str) -> MetadataResult<TokenMetadata> {
    if let Some(json) = uri.strip_prefix(JSON_PLAIN_PREFIX) {
        return Ok(serde_json::from_str(json)?);
    }
    if let Some(payload) = uri.strip_prefix(JSON_BASE64_PREFIX) {
        let json = STANDARD.decode(payload)?;
        return Ok(serde_json::from_slice(&json)?);
    }
    Err(MetadataError::MalformedUri(truncated(uri)))
}

fn truncated(uri: &str) -> String {
    const LIMIT: usize = 64;
    if uri.len() <= LIMIT {
        uri.to_string()
    } else {
        let mut end = LIMIT;
        while !uri.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &uri[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TokenMetadata {
        TokenMetadata::new("token1", "description1").with_image(MediaType::Jpeg, b"jpeg bytes")
    }

    #[test]
    fn plain_json_uri_has_readable_body() {
        let uri = encode_json_plain(&sample()).unwrap();
        assert!(uri.starts_with("data:application/json,{"));
        assert!(uri.contains("\"name\":\"token1\""));
    }

    #[test]
    fn plain_json_round_trip() {
        let metadata = sample();
        let uri = encode_json_plain(&metadata).unwrap();
        assert_eq!(decode_json(&uri).unwrap(), metadata);
    }

    #[test]
    fn base64_json_round_trip() {
        let metadata = sample();
        let uri = encode_json_base64(&metadata).unwrap();
        assert!(uri.starts_with("data:application/json;base64,"));
        assert_eq!(decode_json(&uri).unwrap(), metadata);
    }

    #[test]
    fn image_uri_round_trip() {
        let uri = encode_image(MediaType::Gif, b"\x00\x01\x02\xff");
        let (media, bytes) = decode_image(&uri).unwrap();
        assert_eq!(media, MediaType::Gif);
        assert_eq!(bytes, vec![0x00, 0x01, 0x02, 0xff]);
    }

    #[test]
    fn decode_json_rejects_foreign_uri() {
        assert!(matches!(
            decode_json("data:text/plain,hello"),
            Err(MetadataError::MalformedUri(_))
        ));
    }

    #[test]
    fn decode_image_rejects_missing_base64_marker() {
        assert!(matches!(
            decode_image("data:image/png,raw"),
            Err(MetadataError::MalformedUri(_))
        ));
    }

    #[test]
    fn decode_image_rejects_bad_base64() {
        assert!(matches!(
            decode_image("data:image/png;base64,!!!"),
            Err(MetadataError::Base64(_))
        ));
    }

    #[test]
    fn malformed_uri_error_is_truncated() {
        let long = format!("data:junk,{}", "x".repeat(500));
        let err = decode_json(&long).unwrap_err();
        let message = err.to_string();
        assert!(message.len() < 120);
        assert!(message.ends_with("..."));
    }
}
