//! crypt(3)-style schemes: `CRYPT` (traditional DES) and `MD5-CRYPT`.
//!
//! The stored value is the crypt output itself, salt included as its
//! textual prefix. Verification hands the whole stored value back to the
//! crypt routine, which reuses the embedded salt. A stored value the
//! routine cannot parse never matches.

use crate::credential::RawCredential;
use crate::descriptor::{AlgorithmKind, PasswordAlgorithm};
use crate::error::SchemeError;
use crate::salt::SaltPlacement;

/// Salt characters for traditional DES crypt.
pub const CRYPT_SALT_LEN: usize = 2;

/// Salt characters for MD5-crypt.
pub const MD5_CRYPT_SALT_LEN: usize = 8;

fn salt_text(placement: SaltPlacement) -> Result<String, SchemeError> {
    let salt = placement.generate()?;
    // Alphabet is ASCII.
    String::from_utf8(salt).map_err(|e| SchemeError::Random(e.to_string()))
}

fn crypt_failure(label: &str, e: &pwhash::error::Error) -> SchemeError {
    SchemeError::StructurallyInvalid(format!("{label}: {e}"))
}

/// Traditional DES-based crypt with a 2-character salt.
#[derive(Clone, Copy, Debug)]
pub struct UnixCrypt;

impl PasswordAlgorithm for UnixCrypt {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::UnixCrypt
    }

    fn generate(
        &self,
        plaintext: &str,
        _user: Option<&str>,
    ) -> Result<RawCredential, SchemeError> {
        let salt = salt_text(SaltPlacement::TextPrefix {
            len: CRYPT_SALT_LEN,
        })?;
        // Explicit salts are deprecated upstream; ours comes from OsRng.
        #[allow(deprecated)]
        let hashed = pwhash::unix_crypt::hash_with(salt.as_str(), plaintext)
            .map_err(|e| crypt_failure("CRYPT", &e))?;
        Ok(RawCredential::from(hashed))
    }

    fn verify(
        &self,
        plaintext: &str,
        _user: Option<&str>,
        stored: &[u8],
    ) -> Result<bool, SchemeError> {
        // An empty setting would otherwise reproduce an empty hash.
        if stored.is_empty() {
            return Ok(false);
        }
        let stored = std::str::from_utf8(stored)
            .map_err(|_| SchemeError::StructurallyInvalid("CRYPT value is not text".to_owned()))?;
        Ok(pwhash::unix_crypt::verify(plaintext, stored))
    }
}

/// `$1$salt$digest` MD5-crypt with an 8-character salt.
#[derive(Clone, Copy, Debug)]
pub struct Md5Crypt;

impl PasswordAlgorithm for Md5Crypt {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Md5Crypt
    }

    fn generate(
        &self,
        plaintext: &str,
        _user: Option<&str>,
    ) -> Result<RawCredential, SchemeError> {
        let salt = salt_text(SaltPlacement::TextPrefix {
            len: MD5_CRYPT_SALT_LEN,
        })?;
        let setting = format!("$1${salt}$");
        // Explicit salts are deprecated upstream; ours comes from OsRng.
        #[allow(deprecated)]
        let hashed = pwhash::md5_crypt::hash_with(setting.as_str(), plaintext)
            .map_err(|e| crypt_failure("MD5-CRYPT", &e))?;
        Ok(RawCredential::from(hashed))
    }

    fn verify(
        &self,
        plaintext: &str,
        _user: Option<&str>,
        stored: &[u8],
    ) -> Result<bool, SchemeError> {
        let stored = std::str::from_utf8(stored).map_err(|_| {
            SchemeError::StructurallyInvalid("MD5-CRYPT value is not text".to_owned())
        })?;
        Ok(pwhash::md5_crypt::verify(plaintext, stored))
    }
}
