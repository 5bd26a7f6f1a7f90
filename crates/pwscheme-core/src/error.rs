//! Error types for `pwscheme-core`.

use thiserror::Error;

use crate::encoding::Encoding;

/// Errors produced by scheme resolution, decoding and generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemeError {
    /// The scheme name (or its encoding suffix) did not resolve in the registry.
    #[error("unknown password scheme: {0}")]
    UnknownScheme(String),

    /// The text codec rejected the stored value.
    #[error("invalid {encoding} encoding: {reason}")]
    MalformedEncoding {
        /// Codec that was applied.
        encoding: Encoding,
        /// Codec diagnostic.
        reason: String,
    },

    /// Decoded length disagrees with the scheme's fixed raw length.
    #[error("{scheme} password has invalid length: expected {expected} bytes, got {actual}")]
    LengthMismatch {
        /// Canonical scheme name.
        scheme: String,
        /// Expected raw length in bytes.
        expected: usize,
        /// Decoded length in bytes.
        actual: usize,
    },

    /// Stored value cannot hold the structure the scheme expects.
    ///
    /// Verifiers report this internally; [`crate::SchemeRegistry::verify`]
    /// logs it and answers "no match".
    #[error("structurally invalid stored password: {0}")]
    StructurallyInvalid(String),

    /// The scheme binds the username into the hash but none was given.
    ///
    /// This is a caller bug and is never downgraded to a mismatch.
    #[error("{scheme}: username not given")]
    MissingUsername {
        /// Canonical scheme name.
        scheme: &'static str,
    },

    /// The OS random source failed while drawing a salt or seed.
    #[error("random source failure: {0}")]
    Random(String),

    /// Configuration document could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),
}
