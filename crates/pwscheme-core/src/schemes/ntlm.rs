//! Windows password hashes: `LANMAN` and `NTLM`.

use des::cipher::generic_array::GenericArray;
use des::cipher::{BlockEncrypt, KeyInit};
use des::Des;
use zeroize::Zeroize;

use crate::credential::RawCredential;
use crate::descriptor::{AlgorithmKind, PasswordAlgorithm};
use crate::error::SchemeError;
use crate::schemes::digest::HashFunction;

/// LAN Manager hash length in bytes.
pub const LM_HASH_SIZE: usize = 16;

/// NT hash length in bytes.
pub const NTLMSSP_HASH_SIZE: usize = 16;

const LM_MAGIC: &[u8; 8] = b"KGS!@#$%";

/// Password bytes considered by the LM hash.
const LM_PASSWORD_LEN: usize = 14;

/// Spread a 56-bit key over 8 DES key bytes (parity bits left clear).
// Shift amounts stay below 64.
#[allow(clippy::arithmetic_side_effects)]
fn expand_des_key(half: &[u8]) -> [u8; 8] {
    let mut wide = [0u8; 8];
    wide[1..].copy_from_slice(half);
    let bits = u64::from_be_bytes(wide);

    let mut key = [0u8; 8];
    for (i, out) in key.iter_mut().enumerate() {
        let shift = 49 - 7 * i;
        // Masked to 7 bits, so the narrowing is lossless.
        #[allow(clippy::cast_possible_truncation)]
        let septet = ((bits >> shift) & 0x7f) as u8;
        *out = septet << 1;
    }
    key
}

fn des_encrypt_magic(half: &[u8]) -> [u8; 8] {
    let mut key = expand_des_key(half);
    let cipher = Des::new(GenericArray::from_slice(&key));
    let mut block = GenericArray::clone_from_slice(LM_MAGIC);
    cipher.encrypt_block(&mut block);
    key.zeroize();
    block.into()
}

/// LAN Manager hash: uppercase, 14-byte padded, two DES halves.
#[derive(Clone, Copy, Debug)]
pub struct LanMan;

impl PasswordAlgorithm for LanMan {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::LanMan
    }

    fn generate(
        &self,
        plaintext: &str,
        _user: Option<&str>,
    ) -> Result<RawCredential, SchemeError> {
        let mut buffer = [0u8; LM_PASSWORD_LEN];
        for (out, b) in buffer.iter_mut().zip(plaintext.bytes()) {
            *out = b.to_ascii_uppercase();
        }

        let (first, second) = buffer.split_at(LM_PASSWORD_LEN / 2);
        let mut hash = Vec::with_capacity(LM_HASH_SIZE);
        hash.extend_from_slice(&des_encrypt_magic(first));
        hash.extend_from_slice(&des_encrypt_magic(second));
        buffer.zeroize();
        Ok(RawCredential::new(hash))
    }
}

/// NT hash: MD4 over the UTF-16LE password.
#[derive(Clone, Copy, Debug)]
pub struct Ntlm;

impl PasswordAlgorithm for Ntlm {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Ntlm
    }

    fn generate(
        &self,
        plaintext: &str,
        _user: Option<&str>,
    ) -> Result<RawCredential, SchemeError> {
        let mut utf16: Vec<u8> = plaintext.encode_utf16().flat_map(u16::to_le_bytes).collect();
        let hash = HashFunction::Md4.digest(&[&utf16]);
        utf16.zeroize();
        Ok(RawCredential::new(hash))
    }
}
