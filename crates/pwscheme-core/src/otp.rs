//! RFC 2289 one-time password (OTP / S/KEY) engine.
//!
//! A stored OTP credential is the text `"<algo> <seq> <seed> <response>"`,
//! where `response` is the 64-bit folded hash of `seed || secret` iterated
//! `seq` times, printed as 16 lowercase hex digits.

use std::fmt;

use md4::Md4;
use md5::{Digest, Md5};
use ring::digest::{digest, SHA1_FOR_LEGACY_USE_ONLY};

use crate::error::SchemeError;
use crate::salt::random_bytes;

// ── Constants ───────────────────────────────────────────────────────

/// Folded hash size in bytes (64 bits, RFC 2289 §5).
pub const OTP_HASH_SIZE: usize = 8;

/// Maximum seed length in characters (RFC 2289 §6).
pub const OTP_MAX_SEED_LEN: usize = 16;

/// Random bytes behind a generated seed (hex-printed to 16 characters).
const SEED_BYTES: usize = 8;

/// Sequence number assigned to freshly generated credentials.
pub const DEFAULT_SEQUENCE: u32 = 1024;

/// Largest sequence accepted from a stored entry. Each step costs one fold,
/// so verification time is bounded by this.
pub const OTP_MAX_SEQUENCE: u32 = 9999;

// ── Types ───────────────────────────────────────────────────────────

/// Hash function used for OTP folding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OtpAlgorithm {
    /// MD4 (classic S/KEY).
    Md4,
    /// MD5.
    Md5,
    /// SHA-1.
    Sha1,
}

impl OtpAlgorithm {
    /// Name as written in stored entries.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Md4 => "md4",
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
        }
    }

    /// Parse a stored algorithm name, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        [Self::Md4, Self::Md5, Self::Sha1]
            .into_iter()
            .find(|algo| algo.name().eq_ignore_ascii_case(name))
    }

    /// Hash `data` and fold the digest to 64 bits.
    fn fold(self, data: &[u8]) -> [u8; OTP_HASH_SIZE] {
        let mut out = [0u8; OTP_HASH_SIZE];
        match self {
            Self::Md4 => fold_halves(&Md4::digest(data), &mut out),
            Self::Md5 => fold_halves(&Md5::digest(data), &mut out),
            Self::Sha1 => {
                let d = digest(&SHA1_FOR_LEGACY_USE_ONLY, data);
                let w: Vec<u32> = d
                    .as_ref()
                    .chunks_exact(4)
                    .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
                    .collect();
                let w0 = w[0] ^ w[2] ^ w[4];
                let w1 = w[1] ^ w[3];
                out[..4].copy_from_slice(&w0.to_le_bytes());
                out[4..].copy_from_slice(&w1.to_le_bytes());
            }
        }
        out
    }
}

impl fmt::Display for OtpAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// XOR the first half of a 128-bit digest with the second half.
fn fold_halves(digest: &[u8], out: &mut [u8; OTP_HASH_SIZE]) {
    let (low, high) = digest.split_at(OTP_HASH_SIZE);
    for ((o, a), b) in out.iter_mut().zip(low).zip(high) {
        *o = a ^ b;
    }
}

/// Parsed OTP database entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OtpState {
    /// Hash function.
    pub algorithm: OtpAlgorithm,
    /// Remaining sequence count.
    pub sequence: u32,
    /// Seed, 1 to 16 alphanumeric characters.
    pub seed: String,
    /// Folded response for `sequence`.
    pub response: [u8; OTP_HASH_SIZE],
}

impl OtpState {
    /// Parse `"<algo> <seq> <seed> <response>"`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::StructurallyInvalid`] when a field is missing,
    /// unknown or malformed.
    pub fn parse(entry: &str) -> Result<Self, SchemeError> {
        let invalid = |what: &str| SchemeError::StructurallyInvalid(format!("OTP entry: {what}"));
        let mut fields = entry.split_ascii_whitespace();

        let algorithm = fields
            .next()
            .and_then(OtpAlgorithm::from_name)
            .ok_or_else(|| invalid("unknown hash algorithm"))?;
        let sequence = fields
            .next()
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|seq| *seq <= OTP_MAX_SEQUENCE)
            .ok_or_else(|| invalid("invalid sequence"))?;
        let seed = fields
            .next()
            .filter(|s| is_valid_seed(s))
            .ok_or_else(|| invalid("invalid seed"))?;
        let response_hex = fields.next().ok_or_else(|| invalid("missing response"))?;
        let decoded = data_encoding::HEXLOWER_PERMISSIVE
            .decode(response_hex.as_bytes())
            .map_err(|_| invalid("response is not hex"))?;
        let response: [u8; OTP_HASH_SIZE] = decoded
            .try_into()
            .map_err(|_| invalid("response has wrong length"))?;
        if fields.next().is_some() {
            return Err(invalid("trailing data"));
        }

        Ok(Self {
            algorithm,
            sequence,
            seed: seed.to_owned(),
            response,
        })
    }

    /// Render as a stored entry.
    #[must_use]
    pub fn to_entry(&self) -> String {
        format!(
            "{} {} {} {}",
            self.algorithm,
            self.sequence,
            self.seed,
            data_encoding::HEXLOWER.encode(&self.response)
        )
    }
}

fn is_valid_seed(seed: &str) -> bool {
    (1..=OTP_MAX_SEED_LEN).contains(&seed.len()) && seed.bytes().all(|b| b.is_ascii_alphanumeric())
}

// ── Hashing ─────────────────────────────────────────────────────────

/// Compute the RFC 2289 response: fold(seed || secret), then `sequence`
/// further folds of the previous result. The seed is lowercased first.
#[must_use]
pub fn otp_hash(
    algorithm: OtpAlgorithm,
    seed: &str,
    secret: &str,
    sequence: u32,
) -> [u8; OTP_HASH_SIZE] {
    let mut input = seed.to_ascii_lowercase().into_bytes();
    input.extend_from_slice(secret.as_bytes());
    let mut result = algorithm.fold(&input);
    zeroize::Zeroize::zeroize(&mut input);

    for _ in 0..sequence {
        result = algorithm.fold(&result);
    }
    result
}

/// Produce a stored OTP entry for `secret`.
///
/// With `previous`, the algorithm, sequence and seed are taken from that
/// entry; otherwise a fresh random seed and [`DEFAULT_SEQUENCE`] are used
/// with `algorithm`.
///
/// # Errors
///
/// Returns [`SchemeError::StructurallyInvalid`] if `previous` does not
/// parse, or [`SchemeError::Random`] if seeding fails.
pub fn generate_otp(
    secret: &str,
    previous: Option<&str>,
    algorithm: OtpAlgorithm,
) -> Result<String, SchemeError> {
    let (algorithm, sequence, seed) = match previous {
        Some(entry) => {
            let state = OtpState::parse(entry)?;
            (state.algorithm, state.sequence, state.seed)
        }
        None => {
            let seed_bytes = random_bytes(SEED_BYTES)?;
            (
                algorithm,
                DEFAULT_SEQUENCE,
                data_encoding::HEXLOWER.encode(&seed_bytes),
            )
        }
    };

    let response = otp_hash(algorithm, &seed, secret, sequence);
    Ok(OtpState {
        algorithm,
        sequence,
        seed,
        response,
    }
    .to_entry())
}

// ── Tests ───────────────────────────────────────────────────────────
