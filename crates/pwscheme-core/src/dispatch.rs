//! Public password operations: decode, verify, generate, alias check.
//!
//! Every operation resolves its scheme tag through the registry first, so an
//! unresolvable tag fails with [`SchemeError::UnknownScheme`] before any
//! codec or hash work happens.

use crate::credential::{EncodedCredential, RawCredential};
use crate::encoding::Encoding;
use crate::error::SchemeError;
use crate::registry::{ResolvedScheme, SchemeRegistry};

fn base_name(tag: &str) -> &str {
    tag.split_once('.').map_or(tag, |(name, _)| name)
}

/// Codec to apply to `encoded` for the resolved scheme.
///
/// Without a suffix, fixed-length schemes with a binary default encoding
/// accept both hex and base64: text exactly twice the raw length is hex.
fn effective_encoding(resolved: &ResolvedScheme<'_>, encoded: &str) -> Encoding {
    let raw_length = resolved.descriptor.raw_length();
    if resolved.explicit_encoding || resolved.encoding == Encoding::None || raw_length == 0 {
        return resolved.encoding;
    }
    if raw_length.checked_mul(2) == Some(encoded.len()) {
        Encoding::Hex
    } else {
        Encoding::Base64
    }
}

impl SchemeRegistry {
    /// Decode a stored payload into raw bytes for `scheme`.
    ///
    /// # Errors
    ///
    /// - [`SchemeError::UnknownScheme`] if `scheme` does not resolve.
    /// - [`SchemeError::MalformedEncoding`] if the codec rejects `encoded`.
    /// - [`SchemeError::LengthMismatch`] if the scheme has a fixed raw length
    ///   and the decoded value differs.
    pub fn decode(&self, encoded: &str, scheme: &str) -> Result<RawCredential, SchemeError> {
        let resolved = self.resolve(scheme)?;
        let encoding = effective_encoding(&resolved, encoded);
        let raw = RawCredential::new(encoding.decode(encoded)?);

        let expected = resolved.descriptor.raw_length();
        if expected != 0 && raw.len() != expected {
            return Err(SchemeError::LengthMismatch {
                scheme: resolved.descriptor.name().to_owned(),
                expected,
                actual: raw.len(),
            });
        }
        Ok(raw)
    }

    /// Check `plaintext` against an already decoded stored value.
    ///
    /// A stored value the scheme cannot interpret is logged with the user
    /// and reported as no match.
    ///
    /// # Errors
    ///
    /// - [`SchemeError::UnknownScheme`] if `scheme` does not resolve.
    /// - [`SchemeError::MissingUsername`] if the scheme needs `user` and it
    ///   was not given.
    pub fn verify(
        &self,
        plaintext: &str,
        user: Option<&str>,
        scheme: &str,
        raw: &[u8],
    ) -> Result<bool, SchemeError> {
        let resolved = self.resolve(scheme)?;
        match resolved.descriptor.algorithm().verify(plaintext, user, raw) {
            Err(SchemeError::StructurallyInvalid(reason)) => {
                tracing::error!(
                    user = user.unwrap_or_default(),
                    scheme = resolved.descriptor.name(),
                    %reason,
                    "invalid stored password"
                );
                Ok(false)
            }
            other => other,
        }
    }

    /// Produce the raw stored value for `plaintext` under `scheme`.
    ///
    /// # Errors
    ///
    /// - [`SchemeError::UnknownScheme`] if `scheme` does not resolve.
    /// - [`SchemeError::MissingUsername`] if the scheme needs `user`.
    /// - [`SchemeError::Random`] if a salt could not be drawn.
    pub fn generate(
        &self,
        plaintext: &str,
        user: Option<&str>,
        scheme: &str,
    ) -> Result<RawCredential, SchemeError> {
        let resolved = self.resolve(scheme)?;
        resolved.descriptor.algorithm().generate(plaintext, user)
    }

    /// Produce the encoded stored value for `plaintext` under `scheme`,
    /// using the tag's suffix or the scheme's default encoding.
    ///
    /// # Errors
    ///
    /// As [`generate`](Self::generate), plus
    /// [`SchemeError::MalformedEncoding`] when a scheme with `None` encoding
    /// yields bytes that are not text.
    pub fn generate_encoded(
        &self,
        plaintext: &str,
        user: Option<&str>,
        scheme: &str,
    ) -> Result<String, SchemeError> {
        let resolved = self.resolve(scheme)?;
        let raw = resolved.descriptor.algorithm().generate(plaintext, user)?;
        resolved.encoding.encode(raw.as_bytes())
    }

    /// Produce a complete `{SCHEME}payload` record for `plaintext`.
    ///
    /// # Errors
    ///
    /// As [`generate_encoded`](Self::generate_encoded).
    pub fn generate_record(
        &self,
        plaintext: &str,
        user: Option<&str>,
        scheme: &str,
    ) -> Result<String, SchemeError> {
        let payload = self.generate_encoded(plaintext, user, scheme)?;
        Ok(EncodedCredential {
            scheme: scheme.into(),
            payload: &payload,
        }
        .to_record_string())
    }

    /// Check `plaintext` against a complete stored record.
    ///
    /// The record's `{SCHEME}` tag is used when present, `default_scheme`
    /// otherwise. A payload that fails to decode is logged and reported as
    /// no match.
    ///
    /// # Errors
    ///
    /// - [`SchemeError::UnknownScheme`] if the tag does not resolve.
    /// - [`SchemeError::MissingUsername`] if the scheme needs `user`.
    pub fn verify_record(
        &self,
        plaintext: &str,
        user: Option<&str>,
        stored: &str,
        default_scheme: &str,
    ) -> Result<bool, SchemeError> {
        let record = EncodedCredential::parse(stored, default_scheme);
        let raw = match self.decode(record.payload, &record.scheme) {
            Ok(raw) => raw,
            Err(e @ SchemeError::UnknownScheme(_)) => return Err(e),
            Err(e) => {
                tracing::warn!(
                    user = user.unwrap_or_default(),
                    scheme = %record.scheme,
                    error = %e,
                    "stored password could not be decoded"
                );
                return Ok(false);
            }
        };
        self.verify(plaintext, user, &record.scheme, raw.as_bytes())
    }

    /// `true` when both tags name the same algorithm.
    ///
    /// Encoding suffixes are ignored. Names equal ignoring case are always
    /// aliases; otherwise both must resolve to descriptors of the same
    /// [`AlgorithmKind`](crate::AlgorithmKind).
    #[must_use]
    pub fn is_alias(&self, scheme1: &str, scheme2: &str) -> bool {
        let (name1, name2) = (base_name(scheme1), base_name(scheme2));
        if name1.eq_ignore_ascii_case(name2) {
            return true;
        }
        match (self.find(name1), self.find(name2)) {
            (Some(a), Some(b)) => a.kind() == b.kind(),
            _ => false,
        }
    }
}
