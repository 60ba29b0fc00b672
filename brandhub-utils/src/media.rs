//! Transport codec for inline images.
//!
//! Payloads arrive either as bare base64 or as `data:<mime>;base64,<data>` URIs and are
//! returned to readers as data URIs whose MIME type is sniffed from the stored bytes.

use base64::{engine::general_purpose::STANDARD, Engine};
use brandhub_error::{media::MediaError, MediaResult};

const DATA_URI_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

pub const MIME_JPEG: &str = "image/jpeg";
pub const MIME_PNG: &str = "image/png";
pub const MIME_GIF: &str = "image/gif";
pub const MIME_WEBP: &str = "image/webp";
pub const MIME_BMP: &str = "image/bmp";
pub const MIME_OCTET_STREAM: &str = "application/octet-stream";

/// Decode an inline image payload into raw bytes.
pub fn decode_inline_image(payload: &str) -> MediaResult<Vec<u8>> {
    let payload = payload.trim();
    let data = match payload.strip_prefix(DATA_URI_PREFIX) {
        Some(rest) => match rest.find(BASE64_MARKER) {
            Some(idx) => &rest[idx + BASE64_MARKER.len()..],
            None => {
                return Err(MediaError::Decode(
                    "data URI is not base64 encoded".to_string(),
                ))
            }
        },
        None => payload,
    };

    // Line-wrapped base64 is common in client payloads
    let compact: String = data.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    if compact.is_empty() {
        return Err(MediaError::EmptyPayload);
    }

    STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| MediaError::Decode(e.to_string()))
}

/// Encode raw bytes as a self-contained `data:` URI.
pub fn encode_data_uri(bytes: &[u8]) -> String {
    format!(
        "{DATA_URI_PREFIX}{}{BASE64_MARKER}{}",
        sniff_mime(bytes),
        STANDARD.encode(bytes)
    )
}

/// Guess an image MIME type from its magic bytes.
pub fn sniff_mime(bytes: &[u8]) -> &'static str {
    match bytes {
        [0xFF, 0xD8, 0xFF, ..] => MIME_JPEG,
        [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, ..] => MIME_PNG,
        [b'G', b'I', b'F', b'8', b'7' | b'9', b'a', ..] => MIME_GIF,
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => MIME_WEBP,
        [b'B', b'M', ..] => MIME_BMP,
        _ => MIME_OCTET_STREAM,
    }
}
