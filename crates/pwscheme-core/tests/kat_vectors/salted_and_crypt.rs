//! Salted schemes verified against stored values with known salts.

use pwscheme_core::SchemeRegistry;

// Salt 01 02 03 04 appended after the digest.
const SSHA_SECRET: &str = "uJDd0BIdJ9Z7yDCZNWdgYeb33+cBAgME";
const SMD5_SECRET: &str = "LF/f6q9WuGXFii+gm3ssYQECAwQ=";

const CRYPT_SECRET: &str = "abNANd1rDfiNc";
const MD5_CRYPT_SECRET: &str = "$1$saltsalt$9xy1btjgzLYfb7hivXtC//";

fn check(scheme: &str, stored: &str) {
    let registry = SchemeRegistry::builtin();
    let raw = registry.decode(stored, scheme).unwrap();
    assert!(
        registry.verify("secret", None, scheme, raw.as_bytes()).unwrap(),
        "{scheme} rejects the right password"
    );
    assert!(
        !registry.verify("Secret", None, scheme, raw.as_bytes()).unwrap(),
        "{scheme} accepts the wrong password"
    );
}

#[test]
fn ssha_with_known_salt() {
    check("SSHA", SSHA_SECRET);
}

#[test]
fn smd5_with_known_salt() {
    check("SMD5", SMD5_SECRET);
}

#[test]
fn crypt_with_known_salt() {
    check("CRYPT", CRYPT_SECRET);
}

#[test]
fn md5_crypt_under_both_names() {
    check("MD5-CRYPT", MD5_CRYPT_SECRET);
    check("MD5", MD5_CRYPT_SECRET);
}

#[test]
fn stored_records() {
    let registry = SchemeRegistry::builtin();
    for record in [
        format!("{{SSHA}}{SSHA_SECRET}"),
        format!("{{SMD5}}{SMD5_SECRET}"),
        format!("{{CRYPT}}{CRYPT_SECRET}"),
        MD5_CRYPT_SECRET.to_owned(),
    ] {
        assert!(
            registry.verify_record("secret", None, &record, "PLAIN").unwrap(),
            "{record} does not verify"
        );
    }
}
