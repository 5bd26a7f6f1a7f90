//! Stored credential records.
//!
//! - [`RawCredential`]: decoded bytes, zeroized on drop.
//! - [`EncodedCredential`]: a record as found at rest: scheme tag plus
//!   encoded payload, parsed from `{SCHEME}payload` or the legacy
//!   `$1$salt$digest` form.

use std::borrow::Cow;
use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Marker that opens a self-describing legacy MD5-crypt record.
pub const LEGACY_MD5_CRYPT_MARKER: &str = "$1$";

/// Scheme name synthesized for legacy `$1$` records.
pub const LEGACY_MD5_CRYPT_SCHEME: &str = "MD5-CRYPT";

// ---------------------------------------------------------------------------
// RawCredential
// ---------------------------------------------------------------------------

/// Decoded credential bytes, scoped to one verify/generate call.
///
/// Zeroized on drop. `Debug` shows only the length.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RawCredential {
    bytes: Vec<u8>,
}

impl RawCredential {
    /// Wrap raw bytes.
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// The raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` when no bytes are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<String> for RawCredential {
    fn from(text: String) -> Self {
        Self::new(text.into_bytes())
    }
}

impl AsRef<[u8]> for RawCredential {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for RawCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawCredential({} bytes)", self.bytes.len())
    }
}

// ---------------------------------------------------------------------------
// EncodedCredential
// ---------------------------------------------------------------------------

/// A stored record split into scheme tag and encoded payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedCredential<'a> {
    /// Scheme tag, possibly with an encoding suffix (`SSHA`, `PLAIN-MD5.hex`).
    pub scheme: Cow<'a, str>,
    /// Encoded payload following the tag.
    pub payload: &'a str,
}

impl<'a> EncodedCredential<'a> {
    /// Extract the scheme tag from a stored record.
    ///
    /// Recognizes `$1$<salt>$<digest>[$<ignored>]` (payload truncated after
    /// the digest) and `{SCHEME}<payload>`. Returns `None` when neither form
    /// is present, meaning the caller's default scheme applies.
    #[must_use]
    pub fn extract(stored: &'a str) -> Option<Self> {
        if let Some(rest) = stored.strip_prefix(LEGACY_MD5_CRYPT_MARKER) {
            if let Some(salt_end) = rest.find('$') {
                let digest = &rest[salt_end.saturating_add(1)..];
                let payload = match digest.find('$') {
                    Some(digest_end) => {
                        let cut = LEGACY_MD5_CRYPT_MARKER
                            .len()
                            .saturating_add(salt_end)
                            .saturating_add(1)
                            .saturating_add(digest_end);
                        &stored[..cut]
                    }
                    None => stored,
                };
                return Some(Self {
                    scheme: Cow::Borrowed(LEGACY_MD5_CRYPT_SCHEME),
                    payload,
                });
            }
        }

        let inner = stored.strip_prefix('{')?;
        let close = inner.find('}')?;
        Some(Self {
            scheme: Cow::Borrowed(&inner[..close]),
            payload: &inner[close.saturating_add(1)..],
        })
    }

    /// Extract the scheme tag, falling back to `default_scheme` with the whole
    /// record as payload.
    #[must_use]
    pub fn parse(stored: &'a str, default_scheme: &'a str) -> Self {
        Self::extract(stored).unwrap_or(Self {
            scheme: Cow::Borrowed(default_scheme),
            payload: stored,
        })
    }

    /// Render as `{SCHEME}payload`.
    #[must_use]
    pub fn to_record_string(&self) -> String {
        format!("{{{}}}{}", self.scheme, self.payload)
    }
}
