//! One-time password schemes: `OTP` (SHA-1) and `SKEY` (MD4).
//!
//! The stored value is an RFC 2289 entry carrying its own algorithm,
//! sequence and seed; see [`crate::otp`].

use crate::credential::RawCredential;
use crate::descriptor::{AlgorithmKind, PasswordAlgorithm};
use crate::error::SchemeError;
use crate::otp::{generate_otp, OtpAlgorithm};

/// RFC 2289 scheme generating entries with `algorithm`.
#[derive(Clone, Copy, Debug)]
pub struct OneTimePassword {
    algorithm: OtpAlgorithm,
}

impl OneTimePassword {
    /// `OTP`: SHA-1 entries.
    pub const OTP: Self = Self {
        algorithm: OtpAlgorithm::Sha1,
    };

    /// `SKEY`: MD4 entries.
    pub const SKEY: Self = Self {
        algorithm: OtpAlgorithm::Md4,
    };
}

impl PasswordAlgorithm for OneTimePassword {
    fn kind(&self) -> AlgorithmKind {
        match self.algorithm {
            OtpAlgorithm::Md4 => AlgorithmKind::OtpMd4,
            OtpAlgorithm::Md5 => AlgorithmKind::OtpMd5,
            OtpAlgorithm::Sha1 => AlgorithmKind::OtpSha1,
        }
    }

    fn generate(
        &self,
        plaintext: &str,
        _user: Option<&str>,
    ) -> Result<RawCredential, SchemeError> {
        generate_otp(plaintext, None, self.algorithm).map(RawCredential::from)
    }

    fn verify(
        &self,
        plaintext: &str,
        _user: Option<&str>,
        stored: &[u8],
    ) -> Result<bool, SchemeError> {
        let stored = std::str::from_utf8(stored)
            .map_err(|_| SchemeError::StructurallyInvalid("OTP value is not text".to_owned()))?;
        let regenerated = generate_otp(plaintext, Some(stored), self.algorithm)?;
        Ok(regenerated.eq_ignore_ascii_case(stored))
    }
}
