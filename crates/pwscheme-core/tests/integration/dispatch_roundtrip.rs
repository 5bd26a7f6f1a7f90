//! Generate → encode → decode → verify for every registered scheme.

use pwscheme_core::{Encoding, SchemeError, SchemeRegistry};

const USER: &str = "alice@example.com";

/// Full lifecycle for one scheme tag.
fn roundtrip(registry: &SchemeRegistry, scheme: &str, plaintext: &str) {
    let encoded = registry
        .generate_encoded(plaintext, Some(USER), scheme)
        .unwrap_or_else(|e| panic!("{scheme}: generate failed: {e}"));
    let raw = registry
        .decode(&encoded, scheme)
        .unwrap_or_else(|e| panic!("{scheme}: decode of {encoded:?} failed: {e}"));
    assert!(
        registry.verify(plaintext, Some(USER), scheme, raw.as_bytes()).unwrap(),
        "{scheme}: own output does not verify"
    );
    assert!(
        !registry
            .verify("definitely wrong", Some(USER), scheme, raw.as_bytes())
            .unwrap(),
        "{scheme}: wrong password verifies"
    );
}

#[test]
fn every_builtin_scheme_roundtrips() {
    let registry = SchemeRegistry::builtin();
    let names: Vec<String> = registry.schemes().map(str::to_owned).collect();
    for scheme in &names {
        roundtrip(&registry, scheme, "secret");
    }
}

#[test]
fn binary_schemes_roundtrip_with_every_suffix() {
    let registry = SchemeRegistry::builtin();
    let binary: Vec<String> = registry
        .descriptors()
        .iter()
        .filter(|d| d.default_encoding() != Encoding::None)
        .map(|d| d.name().to_owned())
        .collect();
    for scheme in &binary {
        for suffix in ["hex", "HEX", "b64", "base64"] {
            roundtrip(&registry, &format!("{scheme}.{suffix}"), "pässwörd");
        }
    }
}

#[test]
fn salted_generation_is_not_deterministic() {
    let registry = SchemeRegistry::builtin();
    for scheme in ["SSHA", "SMD5", "MD5-CRYPT", "CRYPT"] {
        let first = registry.generate_encoded("secret", None, scheme).unwrap();
        let second = registry.generate_encoded("secret", None, scheme).unwrap();
        // Two salt characters leave CRYPT a real chance of collision.
        if scheme != "CRYPT" {
            assert_ne!(first, second, "{scheme} reused its salt");
        }

        for encoded in [&first, &second] {
            let raw = registry.decode(encoded, scheme).unwrap();
            assert!(registry.verify("secret", None, scheme, raw.as_bytes()).unwrap());
            assert!(!registry.verify("wrong", None, scheme, raw.as_bytes()).unwrap());
        }
    }
}

#[test]
fn ssha_generates_digest_plus_four_salt_bytes() {
    let registry = SchemeRegistry::builtin();
    let raw = registry.generate("secret", None, "SSHA").unwrap();
    assert_eq!(raw.len(), 24);
    let raw = registry.generate("secret", None, "SMD5").unwrap();
    assert_eq!(raw.len(), 20);
}

#[test]
fn empty_crypt_value_never_matches() {
    let registry = SchemeRegistry::builtin();
    let raw = registry.decode("", "CRYPT").unwrap();
    assert!(raw.is_empty());
    for candidate in ["", "secret", "abNANd1rDfiNc"] {
        assert!(!registry.verify(candidate, None, "CRYPT", raw.as_bytes()).unwrap());
    }
}

#[test]
fn truncated_salted_values_are_no_match() {
    let registry = SchemeRegistry::builtin();
    // 20 bytes: a bare SHA-1 digest with no salt.
    let raw = registry.decode("5en6G6MezRroT3XKqkdPOmY/BfQ=", "SSHA").unwrap();
    assert!(!registry.verify("secret", None, "SSHA", raw.as_bytes()).unwrap());
    assert!(!registry.verify("secret", None, "SMD5", b"").unwrap());
}

#[test]
fn malformed_otp_entries_are_no_match() {
    let registry = SchemeRegistry::builtin();
    for entry in [
        "",
        "sha1",
        "sha2 10 seed 0011223344556677",
        "md4 x seed 00",
        "sha1 4294967295 seed 0011223344556677",
    ] {
        assert!(!registry.verify("secret", None, "OTP", entry.as_bytes()).unwrap());
    }
}

#[test]
fn unknown_scheme_is_reported_not_panicked() {
    let registry = SchemeRegistry::builtin();
    for scheme in ["FOOBAR", "SHA1.rot13", "", "{SHA1}"] {
        let unknown = SchemeError::UnknownScheme(scheme.to_owned());
        assert_eq!(registry.decode("xyz", scheme).unwrap_err(), unknown);
        assert_eq!(registry.verify("x", None, scheme, b"xyz").unwrap_err(), unknown);
        assert_eq!(registry.generate("x", None, scheme).unwrap_err(), unknown);
        assert_eq!(
            registry.generate_encoded("x", None, scheme).unwrap_err(),
            unknown
        );
    }
}

#[test]
fn missing_username_is_fatal_not_a_mismatch() {
    let registry = SchemeRegistry::builtin();
    let raw = registry
        .generate("secret", Some(USER), "DIGEST-MD5")
        .unwrap();
    let err = registry
        .verify("secret", None, "DIGEST-MD5", raw.as_bytes())
        .unwrap_err();
    assert!(matches!(err, SchemeError::MissingUsername { .. }));

    let record = format!("{{DIGEST-MD5}}{}", data_encoding::HEXLOWER.encode(raw.as_bytes()));
    assert!(registry.verify_record("secret", Some(USER), &record, "PLAIN").unwrap());
    assert!(registry.verify_record("secret", None, &record, "PLAIN").is_err());
}

#[test]
fn registry_is_shared_across_threads() {
    let registry = SchemeRegistry::builtin();
    let record = registry.generate_record("secret", None, "SSHA").unwrap();
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                assert!(registry.verify_record("secret", None, &record, "PLAIN").unwrap());
            });
        }
    });
}
