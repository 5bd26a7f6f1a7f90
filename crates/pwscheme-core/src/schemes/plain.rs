//! Cleartext scheme (`PLAIN` / `CLEARTEXT`).

use crate::credential::RawCredential;
use crate::descriptor::{AlgorithmKind, PasswordAlgorithm};
use crate::error::SchemeError;

/// Stores the password as-is.
#[derive(Clone, Copy, Debug)]
pub struct Plain;

impl PasswordAlgorithm for Plain {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Plain
    }

    fn generate(
        &self,
        plaintext: &str,
        _user: Option<&str>,
    ) -> Result<RawCredential, SchemeError> {
        Ok(RawCredential::new(plaintext.as_bytes().to_vec()))
    }
}
