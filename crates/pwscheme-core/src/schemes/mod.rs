//! Built-in password schemes.
//!
//! | Name | Encoding | Raw length | Verification |
//! |------|----------|------------|--------------|
//! | `CRYPT` | none | variable | recompute with stored salt |
//! | `MD5`, `MD5-CRYPT` | none | variable | recompute with stored salt |
//! | `SHA`, `SHA1` | base64 | 20 | generic |
//! | `SMD5`, `SSHA` | base64 | variable | strip appended salt, rehash |
//! | `PLAIN`, `CLEARTEXT` | none | variable | generic |
//! | `CRAM-MD5`, `HMAC-MD5` | hex | 32 | generic |
//! | `DIGEST-MD5` | hex | 16 | generic, needs username |
//! | `PLAIN-MD4`, `PLAIN-MD5` | hex | 16 | generic |
//! | `LDAP-MD5` | base64 | 16 | generic |
//! | `LANMAN`, `NTLM` | hex | 16 | generic |
//! | `OTP`, `SKEY` | none | variable | regenerate from stored entry |
//! | `RPA` | hex | 16 | generic |

pub mod cram;
pub mod crypt;
pub mod digest;
pub mod ntlm;
pub mod one_time;
pub mod plain;
pub mod salted;

use crate::descriptor::SchemeDescriptor;
use crate::encoding::Encoding;

use self::cram::{CramMd5, CRAM_MD5_CONTEXTLEN};
use self::crypt::{Md5Crypt, UnixCrypt};
use self::digest::{
    DigestMd5, HashFunction, Rpa, UnsaltedHash, MD4_RESULTLEN, MD5_RESULTLEN, SHA1_RESULTLEN,
};
use self::ntlm::{LanMan, Ntlm, LM_HASH_SIZE, NTLMSSP_HASH_SIZE};
use self::one_time::OneTimePassword;
use self::plain::Plain;
use self::salted::SaltedHash;

/// Built-in descriptors in registry order.
#[must_use]
pub fn builtin_descriptors() -> Vec<SchemeDescriptor> {
    let sha1 = UnsaltedHash(HashFunction::Sha1);
    let md5 = UnsaltedHash(HashFunction::Md5);

    vec![
        SchemeDescriptor::new("CRYPT", Encoding::None, 0, UnixCrypt),
        SchemeDescriptor::new("MD5", Encoding::None, 0, Md5Crypt),
        SchemeDescriptor::new("MD5-CRYPT", Encoding::None, 0, Md5Crypt),
        SchemeDescriptor::new("SHA", Encoding::Base64, SHA1_RESULTLEN, sha1),
        SchemeDescriptor::new("SHA1", Encoding::Base64, SHA1_RESULTLEN, sha1),
        SchemeDescriptor::new("SMD5", Encoding::Base64, 0, SaltedHash::SMD5),
        SchemeDescriptor::new("SSHA", Encoding::Base64, 0, SaltedHash::SSHA),
        SchemeDescriptor::new("PLAIN", Encoding::None, 0, Plain),
        SchemeDescriptor::new("CLEARTEXT", Encoding::None, 0, Plain),
        SchemeDescriptor::new("CRAM-MD5", Encoding::Hex, CRAM_MD5_CONTEXTLEN, CramMd5),
        SchemeDescriptor::new("HMAC-MD5", Encoding::Hex, CRAM_MD5_CONTEXTLEN, CramMd5),
        SchemeDescriptor::new("DIGEST-MD5", Encoding::Hex, MD5_RESULTLEN, DigestMd5),
        SchemeDescriptor::new(
            "PLAIN-MD4",
            Encoding::Hex,
            MD4_RESULTLEN,
            UnsaltedHash(HashFunction::Md4),
        ),
        SchemeDescriptor::new("PLAIN-MD5", Encoding::Hex, MD5_RESULTLEN, md5),
        SchemeDescriptor::new("LDAP-MD5", Encoding::Base64, MD5_RESULTLEN, md5),
        SchemeDescriptor::new("LANMAN", Encoding::Hex, LM_HASH_SIZE, LanMan),
        SchemeDescriptor::new("NTLM", Encoding::Hex, NTLMSSP_HASH_SIZE, Ntlm),
        SchemeDescriptor::new("OTP", Encoding::None, 0, OneTimePassword::OTP),
        SchemeDescriptor::new("SKEY", Encoding::None, 0, OneTimePassword::SKEY),
        SchemeDescriptor::new("RPA", Encoding::Hex, MD5_RESULTLEN, Rpa),
    ]
}
