//! `CRAM-MD5` / `HMAC-MD5` precomputed context.
//!
//! The stored value is the HMAC-MD5 key schedule rather than a digest: the
//! MD5 chaining state after one block of `key ^ opad`, followed by the state
//! after one block of `key ^ ipad`, each as four little-endian words. A
//! server holding it can answer CRAM-MD5 challenges without the plaintext.
//!
//! MD5 implementations do not expose their chaining state, so the block
//! transform lives here.

use md5::{Digest, Md5};
use zeroize::Zeroize;

use crate::credential::RawCredential;
use crate::descriptor::{AlgorithmKind, PasswordAlgorithm};
use crate::error::SchemeError;

/// Length of the stored context in bytes.
pub const CRAM_MD5_CONTEXTLEN: usize = 32;

const BLOCK_LEN: usize = 64;

const IV: [u32; 4] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476];

#[rustfmt::skip]
const K: [u32; 64] = [
    0xd76a_a478, 0xe8c7_b756, 0x2420_70db, 0xc1bd_ceee,
    0xf57c_0faf, 0x4787_c62a, 0xa830_4613, 0xfd46_9501,
    0x6980_98d8, 0x8b44_f7af, 0xffff_5bb1, 0x895c_d7be,
    0x6b90_1122, 0xfd98_7193, 0xa679_438e, 0x49b4_0821,
    0xf61e_2562, 0xc040_b340, 0x265e_5a51, 0xe9b6_c7aa,
    0xd62f_105d, 0x0244_1453, 0xd8a1_e681, 0xe7d3_fbc8,
    0x21e1_cde6, 0xc337_07d6, 0xf4d5_0d87, 0x455a_14ed,
    0xa9e3_e905, 0xfcef_a3f8, 0x676f_02d9, 0x8d2a_4c8a,
    0xfffa_3942, 0x8771_f681, 0x6d9d_6122, 0xfde5_380c,
    0xa4be_ea44, 0x4bde_cfa9, 0xf6bb_4b60, 0xbebf_bc70,
    0x289b_7ec6, 0xeaa1_27fa, 0xd4ef_3085, 0x0488_1d05,
    0xd9d4_d039, 0xe6db_99e5, 0x1fa2_7cf8, 0xc4ac_5665,
    0xf429_2244, 0x432a_ff97, 0xab94_23a7, 0xfc93_a039,
    0x655b_59c3, 0x8f0c_cc92, 0xffef_f47d, 0x8584_5dd1,
    0x6fa8_7e4f, 0xfe2c_e6e0, 0xa301_4314, 0x4e08_11a1,
    0xf753_7e82, 0xbd3a_f235, 0x2ad7_d2bb, 0xeb86_d391,
];

const SHIFTS: [[u32; 4]; 4] = [[7, 12, 17, 22], [5, 9, 14, 20], [4, 11, 16, 23], [6, 10, 15, 21]];

/// One MD5 block transform over `state`.
// Round and word indices are bounded by the 64-step loop.
#[allow(clippy::arithmetic_side_effects)]
fn md5_transform(state: &mut [u32; 4], block: &[u8; BLOCK_LEN]) {
    let mut m = [0u32; 16];
    for (word, chunk) in m.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    let [mut a, mut b, mut c, mut d] = *state;
    for (i, k) in K.iter().enumerate() {
        let round = i / 16;
        let (f, g) = match round {
            0 => ((b & c) | (!b & d), i),
            1 => ((d & b) | (!d & c), (5 * i + 1) % 16),
            2 => (b ^ c ^ d, (3 * i + 5) % 16),
            _ => (c ^ (b | !d), (7 * i) % 16),
        };
        let f = f.wrapping_add(a).wrapping_add(*k).wrapping_add(m[g]);
        a = d;
        d = c;
        c = b;
        b = b.wrapping_add(f.rotate_left(SHIFTS[round][i % 4]));
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    m.zeroize();
}

/// MD5 chaining state after absorbing `key ^ pad` as a single block.
fn padded_key_state(key: &[u8; BLOCK_LEN], pad: u8) -> [u32; 4] {
    let mut block = [0u8; BLOCK_LEN];
    for (out, k) in block.iter_mut().zip(key) {
        *out = k ^ pad;
    }
    let mut state = IV;
    md5_transform(&mut state, &block);
    block.zeroize();
    state
}

/// Compute the 32-byte CRAM-MD5 context for `secret`.
#[must_use]
pub fn cram_md5_context(secret: &[u8]) -> [u8; CRAM_MD5_CONTEXTLEN] {
    let mut key = [0u8; BLOCK_LEN];
    if secret.len() > BLOCK_LEN {
        key[..16].copy_from_slice(&Md5::digest(secret));
    } else {
        key[..secret.len()].copy_from_slice(secret);
    }

    let outer = padded_key_state(&key, 0x5c);
    let inner = padded_key_state(&key, 0x36);
    key.zeroize();

    let mut context = [0u8; CRAM_MD5_CONTEXTLEN];
    for (out, word) in context
        .chunks_exact_mut(4)
        .zip(outer.iter().chain(inner.iter()))
    {
        out.copy_from_slice(&word.to_le_bytes());
    }
    context
}

/// `CRAM-MD5` / `HMAC-MD5` scheme.
#[derive(Clone, Copy, Debug)]
pub struct CramMd5;

impl PasswordAlgorithm for CramMd5 {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::CramMd5
    }

    fn generate(
        &self,
        plaintext: &str,
        _user: Option<&str>,
    ) -> Result<RawCredential, SchemeError> {
        Ok(RawCredential::new(
            cram_md5_context(plaintext.as_bytes()).to_vec(),
        ))
    }
}
