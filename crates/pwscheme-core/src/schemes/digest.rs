//! Unsalted message-digest schemes: `SHA`/`SHA1`, `PLAIN-MD4`,
//! `PLAIN-MD5`/`LDAP-MD5`, `DIGEST-MD5` and `RPA`.

use md4::Md4;
use md5::{Digest, Md5};
use ring::digest::{Context, SHA1_FOR_LEGACY_USE_ONLY};
use zeroize::Zeroize;

use crate::credential::RawCredential;
use crate::descriptor::{AlgorithmKind, PasswordAlgorithm};
use crate::error::SchemeError;

/// MD4 digest length in bytes.
pub const MD4_RESULTLEN: usize = 16;

/// MD5 digest length in bytes.
pub const MD5_RESULTLEN: usize = 16;

/// SHA-1 digest length in bytes.
pub const SHA1_RESULTLEN: usize = 20;

/// Hash primitive behind a digest scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashFunction {
    /// MD4.
    Md4,
    /// MD5.
    Md5,
    /// SHA-1.
    Sha1,
}

impl HashFunction {
    /// Digest length in bytes.
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            Self::Md4 => MD4_RESULTLEN,
            Self::Md5 => MD5_RESULTLEN,
            Self::Sha1 => SHA1_RESULTLEN,
        }
    }

    /// Digest the concatenation of `parts`.
    #[must_use]
    pub fn digest(self, parts: &[&[u8]]) -> Vec<u8> {
        match self {
            Self::Md4 => {
                let mut ctx = Md4::new();
                parts.iter().for_each(|p| ctx.update(p));
                ctx.finalize().to_vec()
            }
            Self::Md5 => {
                let mut ctx = Md5::new();
                parts.iter().for_each(|p| ctx.update(p));
                ctx.finalize().to_vec()
            }
            Self::Sha1 => {
                let mut ctx = Context::new(&SHA1_FOR_LEGACY_USE_ONLY);
                parts.iter().for_each(|p| ctx.update(p));
                ctx.finish().as_ref().to_vec()
            }
        }
    }
}

/// Plain digest of the password.
#[derive(Clone, Copy, Debug)]
pub struct UnsaltedHash(pub HashFunction);

impl PasswordAlgorithm for UnsaltedHash {
    fn kind(&self) -> AlgorithmKind {
        match self.0 {
            HashFunction::Md4 => AlgorithmKind::Md4,
            HashFunction::Md5 => AlgorithmKind::Md5,
            HashFunction::Sha1 => AlgorithmKind::Sha1,
        }
    }

    fn generate(
        &self,
        plaintext: &str,
        _user: Option<&str>,
    ) -> Result<RawCredential, SchemeError> {
        Ok(RawCredential::new(self.0.digest(&[plaintext.as_bytes()])))
    }
}

/// `MD5("user:realm:password")`, realm taken from `user@realm`.
#[derive(Clone, Copy, Debug)]
pub struct DigestMd5;

impl PasswordAlgorithm for DigestMd5 {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::DigestMd5
    }

    fn generate(&self, plaintext: &str, user: Option<&str>) -> Result<RawCredential, SchemeError> {
        let Some(user) = user else {
            tracing::error!("DIGEST-MD5 password generation: username not given");
            return Err(SchemeError::MissingUsername {
                scheme: "DIGEST-MD5",
            });
        };

        let (name, realm) = user.split_once('@').unwrap_or((user, ""));
        let mut input = format!("{name}:{realm}:{plaintext}");
        let digest = HashFunction::Md5.digest(&[input.as_bytes()]);
        input.zeroize();
        Ok(RawCredential::new(digest))
    }
}

/// RPA: MD5 over the password expanded to UCS-2 big-endian.
#[derive(Clone, Copy, Debug)]
pub struct Rpa;

impl PasswordAlgorithm for Rpa {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Rpa
    }

    fn generate(
        &self,
        plaintext: &str,
        _user: Option<&str>,
    ) -> Result<RawCredential, SchemeError> {
        let mut ucs2be: Vec<u8> = plaintext.bytes().flat_map(|b| [0, b]).collect();
        let digest = HashFunction::Md5.digest(&[&ucs2be]);
        ucs2be.zeroize();
        Ok(RawCredential::new(digest))
    }
}
