//! Salt generation and placement.
//!
//! Two layouts exist in stored records:
//! - crypt-style schemes carry printable salt text at the front of the
//!   record, which the crypt routine itself parses back out;
//! - `SMD5`/`SSHA` append raw salt bytes after the digest.

use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroize;

use crate::error::SchemeError;

/// Printable alphabet for crypt-style salts.
pub const SALT_CHARS: &[u8; 64] =
    b"./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Where a scheme keeps its salt inside the stored record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaltPlacement {
    /// `len` printable characters forming the record prefix.
    TextPrefix {
        /// Number of salt characters.
        len: usize,
    },
    /// `len` random bytes following a digest of `digest_len` bytes.
    Appended {
        /// Digest length preceding the salt.
        digest_len: usize,
        /// Number of salt bytes produced on generation.
        len: usize,
    },
}

impl SaltPlacement {
    /// Draw a fresh salt for this placement.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::Random`] if the OS random source fails.
    pub fn generate(self) -> Result<Vec<u8>, SchemeError> {
        match self {
            Self::TextPrefix { len } => random_salt_chars(len),
            Self::Appended { len, .. } => random_bytes(len),
        }
    }

    /// Split a stored `<digest><salt>` value into its digest and salt.
    ///
    /// Only meaningful for [`SaltPlacement::Appended`]; returns `None` when
    /// the value is not longer than the digest (no salt present) or for
    /// prefix placement, whose salt is parsed by the crypt routine.
    #[must_use]
    pub fn split(self, stored: &[u8]) -> Option<(&[u8], &[u8])> {
        match self {
            Self::Appended { digest_len, .. } if stored.len() > digest_len => {
                Some(stored.split_at(digest_len))
            }
            _ => None,
        }
    }
}

/// Fill `len` bytes from the OS CSPRNG.
///
/// # Errors
///
/// Returns [`SchemeError::Random`] if the OS random source fails.
pub fn random_bytes(len: usize) -> Result<Vec<u8>, SchemeError> {
    let mut bytes = vec![0u8; len];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| SchemeError::Random(format!("CSPRNG fill failed: {e}")))?;
    Ok(bytes)
}

/// Draw `len` random salt characters from [`SALT_CHARS`].
///
/// Each random byte is reduced modulo the alphabet size.
///
/// # Errors
///
/// Returns [`SchemeError::Random`] if the OS random source fails.
// Modulus is the non-zero alphabet length.
#[allow(clippy::arithmetic_side_effects)]
pub fn random_salt_chars(len: usize) -> Result<Vec<u8>, SchemeError> {
    let mut bytes = random_bytes(len)?;
    let salt = bytes
        .iter()
        .map(|b| SALT_CHARS[usize::from(*b) % SALT_CHARS.len()])
        .collect();
    bytes.zeroize();
    Ok(salt)
}
