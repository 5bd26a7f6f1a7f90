//! Salted digests with the salt appended after the digest: `SMD5`, `SSHA`.
//!
//! Stored layout: `<digest><salt>`. Generation appends 4 random bytes;
//! verification accepts any non-empty salt length.

use crate::credential::RawCredential;
use crate::descriptor::{AlgorithmKind, PasswordAlgorithm};
use crate::error::SchemeError;
use crate::salt::SaltPlacement;
use crate::schemes::digest::HashFunction;

/// Salt bytes appended on generation.
pub const SALT_LEN: usize = 4;

/// Digest of `password || salt`, salt kept after the digest.
#[derive(Clone, Copy, Debug)]
pub struct SaltedHash {
    label: &'static str,
    hash: HashFunction,
    placement: SaltPlacement,
}

impl SaltedHash {
    /// `SSHA`: SHA-1 with appended salt.
    pub const SSHA: Self = Self::new("SSHA", HashFunction::Sha1);

    /// `SMD5`: MD5 with appended salt.
    pub const SMD5: Self = Self::new("SMD5", HashFunction::Md5);

    const fn new(label: &'static str, hash: HashFunction) -> Self {
        Self {
            label,
            hash,
            placement: SaltPlacement::Appended {
                digest_len: hash.output_len(),
                len: SALT_LEN,
            },
        }
    }
}

impl PasswordAlgorithm for SaltedHash {
    fn kind(&self) -> AlgorithmKind {
        match self.hash {
            HashFunction::Sha1 => AlgorithmKind::SaltedSha1,
            HashFunction::Md4 | HashFunction::Md5 => AlgorithmKind::SaltedMd5,
        }
    }

    fn generate(
        &self,
        plaintext: &str,
        _user: Option<&str>,
    ) -> Result<RawCredential, SchemeError> {
        let salt = self.placement.generate()?;
        let mut raw = self.hash.digest(&[plaintext.as_bytes(), &salt]);
        raw.extend_from_slice(&salt);
        Ok(RawCredential::new(raw))
    }

    fn verify(
        &self,
        plaintext: &str,
        _user: Option<&str>,
        stored: &[u8],
    ) -> Result<bool, SchemeError> {
        let (digest, salt) = self.placement.split(stored).ok_or_else(|| {
            SchemeError::StructurallyInvalid(format!("{} password too short", self.label))
        })?;
        Ok(self.hash.digest(&[plaintext.as_bytes(), salt]) == digest)
    }
}
