//! Text encodings for raw credential bytes.
//!
//! A stored record is text. Depending on the scheme, the raw digest is kept
//! verbatim (`None`), as lowercase hex, or as standard padded base64 with no
//! line wrapping. Decoding hex accepts either case.

use std::fmt;

use data_encoding::{BASE64, HEXLOWER, HEXLOWER_PERMISSIVE};
use serde::{Deserialize, Serialize};

use crate::error::SchemeError;

/// Text representation of raw credential bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// The encoded text is the raw value.
    None,
    /// Lowercase hexadecimal.
    Hex,
    /// Standard base64 with padding.
    Base64,
}

impl Encoding {
    /// Parse a scheme-name encoding suffix (`hex`, `b64`, `base64`), ignoring case.
    ///
    /// Returns `None` for anything else; the caller treats that as an unknown
    /// scheme rather than falling back to the default encoding.
    #[must_use]
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        if suffix.eq_ignore_ascii_case("b64") || suffix.eq_ignore_ascii_case("base64") {
            Some(Self::Base64)
        } else if suffix.eq_ignore_ascii_case("hex") {
            Some(Self::Hex)
        } else {
            None
        }
    }

    /// Lowercase label used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Hex => "hex",
            Self::Base64 => "base64",
        }
    }

    /// Encode raw bytes as text.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::MalformedEncoding`] when `None` is requested for
    /// bytes that are not valid UTF-8 text.
    pub fn encode(self, raw: &[u8]) -> Result<String, SchemeError> {
        match self {
            Self::None => String::from_utf8(raw.to_vec()).map_err(|e| {
                SchemeError::MalformedEncoding {
                    encoding: self,
                    reason: e.utf8_error().to_string(),
                }
            }),
            Self::Hex => Ok(HEXLOWER.encode(raw)),
            Self::Base64 => Ok(BASE64.encode(raw)),
        }
    }

    /// Decode text into raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::MalformedEncoding`] on malformed hex or base64.
    pub fn decode(self, text: &str) -> Result<Vec<u8>, SchemeError> {
        let decoded = match self {
            Self::None => return Ok(text.as_bytes().to_vec()),
            Self::Hex => HEXLOWER_PERMISSIVE.decode(text.as_bytes()),
            Self::Base64 => BASE64.decode(text.as_bytes()),
        };
        decoded.map_err(|e| SchemeError::MalformedEncoding {
            encoding: self,
            reason: e.to_string(),
        })
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
