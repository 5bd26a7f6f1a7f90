//! Scheme descriptor model.
//!
//! A [`SchemeDescriptor`] is the immutable description of one named scheme:
//! canonical name, default [`Encoding`], expected raw length, and the
//! [`PasswordAlgorithm`] that generates (and optionally verifies) raw values.
//!
//! Several names may share one algorithm (`MD5`/`MD5-CRYPT`, `SHA`/`SHA1`).
//! Equivalence is decided by [`AlgorithmKind`], never by object identity.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::credential::RawCredential;
use crate::encoding::Encoding;
use crate::error::SchemeError;

/// Identity of the underlying generation algorithm.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    /// Traditional DES-based `crypt(3)`.
    UnixCrypt,
    /// `$1$` MD5-based crypt.
    Md5Crypt,
    /// Unsalted SHA-1.
    Sha1,
    /// SHA-1 over password and appended salt.
    SaltedSha1,
    /// MD5 over password and appended salt.
    SaltedMd5,
    /// Cleartext.
    Plain,
    /// HMAC-MD5 precomputed context.
    CramMd5,
    /// MD5 of `user:realm:password`.
    DigestMd5,
    /// Unsalted MD4.
    Md4,
    /// Unsalted MD5.
    Md5,
    /// LAN Manager hash.
    LanMan,
    /// NT hash (MD4 over UTF-16LE).
    Ntlm,
    /// RFC 2289 one-time password, SHA-1 generation.
    OtpSha1,
    /// RFC 2289 one-time password, MD5 generation.
    OtpMd5,
    /// RFC 2289 one-time password, MD4 generation (S/KEY).
    OtpMd4,
    /// RPA (MD5 over UCS-2 big-endian).
    Rpa,
    /// Algorithm supplied by a plugin module, identified by name.
    External(Cow<'static, str>),
}

/// Generation and verification capability of one scheme.
///
/// Implementors provide [`generate`](Self::generate). Schemes whose stored
/// value cannot be reproduced from the plaintext alone (salted, or carrying
/// state) override [`verify`](Self::verify).
pub trait PasswordAlgorithm: Send + Sync {
    /// Identity used for alias detection.
    fn kind(&self) -> AlgorithmKind;

    /// Produce the raw stored value for `plaintext`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::MissingUsername`] if the algorithm binds the
    /// username and `user` is `None`, or [`SchemeError::Random`] if drawing a
    /// salt fails.
    fn generate(&self, plaintext: &str, user: Option<&str>)
        -> Result<RawCredential, SchemeError>;

    /// Decide whether `plaintext` matches the raw stored value.
    ///
    /// The default regenerates and compares byte-for-byte.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::StructurallyInvalid`] when the stored value
    /// cannot be interpreted, or propagates [`generate`](Self::generate) errors.
    fn verify(
        &self,
        plaintext: &str,
        user: Option<&str>,
        stored: &[u8],
    ) -> Result<bool, SchemeError> {
        let generated = self.generate(plaintext, user)?;
        Ok(generated.as_bytes() == stored)
    }
}

/// Immutable description of one named password scheme.
#[derive(Clone)]
pub struct SchemeDescriptor {
    name: Cow<'static, str>,
    default_encoding: Encoding,
    raw_length: usize,
    algorithm: Arc<dyn PasswordAlgorithm>,
}

impl SchemeDescriptor {
    /// Describe a scheme. `raw_length` of 0 means variable length.
    #[must_use]
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        default_encoding: Encoding,
        raw_length: usize,
        algorithm: impl PasswordAlgorithm + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            default_encoding,
            raw_length,
            algorithm: Arc::new(algorithm),
        }
    }

    /// Canonical scheme name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Encoding used when the scheme tag has no suffix.
    #[must_use]
    pub const fn default_encoding(&self) -> Encoding {
        self.default_encoding
    }

    /// Expected decoded length, or 0 when variable.
    #[must_use]
    pub const fn raw_length(&self) -> usize {
        self.raw_length
    }

    /// Identity of the generation algorithm.
    #[must_use]
    pub fn kind(&self) -> AlgorithmKind {
        self.algorithm.kind()
    }

    /// The scheme's algorithm.
    #[must_use]
    pub fn algorithm(&self) -> &dyn PasswordAlgorithm {
        self.algorithm.as_ref()
    }

    /// Case-insensitive exact name match.
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

impl fmt::Debug for SchemeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemeDescriptor")
            .field("name", &self.name)
            .field("default_encoding", &self.default_encoding)
            .field("raw_length", &self.raw_length)
            .field("kind", &self.kind())
            .finish()
    }
}
