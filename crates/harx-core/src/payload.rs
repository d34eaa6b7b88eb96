//! Inline response body decoding.

use base64::alphabet;
use base64::engine::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use crate::error::DecodeError;
use crate::har::HarContent;

/// Encoding tag that marks an inline body as base64.
pub const BASE64_ENCODING: &str = "base64";

/// Standard alphabet and padding; non-zero unused bits in the last symbol are accepted.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// A decoded response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Decoded from base64; written as raw bytes.
    Binary(Vec<u8>),
    /// Unencoded inline text (shaders, SVG, ...); written as UTF-8.
    Text(String),
    /// Not embedded in the archive, or an unclassified placeholder.
    Absent,
}

impl Payload {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Payload::Binary(bytes) => bytes,
            Payload::Text(text) => text.as_bytes(),
            Payload::Absent => &[],
        }
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Payload::Binary(_) => "binary",
            Payload::Text(_) => "text",
            Payload::Absent => "absent",
        }
    }
}

/// Decodes the inline body of `content`.
///
/// `name` only tags the error. Whitespace inside base64 text is ignored, as
/// browsers sometimes wrap long bodies.
pub fn decode_content(content: &HarContent, name: &str) -> Result<Payload, DecodeError> {
    let Some(text) = content.text.as_deref() else {
        return Ok(Payload::Absent);
    };

    if content.encoding.as_deref() != Some(BASE64_ENCODING) {
        return Ok(Payload::Text(text.to_string()));
    }

    let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    LENIENT
        .decode(compact.as_bytes())
        .map(Payload::Binary)
        .map_err(|source| DecodeError {
            name: name.to_string(),
            source,
        })
}
