//! Unsalted digest schemes: generated output must equal the reference
//! value byte-for-byte after encoding.

use pwscheme_core::SchemeRegistry;

// ── Plaintext "secret" ─────────────────────────────────────────────
const SECRET_VECTORS: [(&str, &str); 9] = [
    ("SHA", "5en6G6MezRroT3XKqkdPOmY/BfQ="),
    ("SHA1", "5en6G6MezRroT3XKqkdPOmY/BfQ="),
    ("SHA1.hex", "e5e9fa1ba31ecd1ae84f75caaa474f3a663f05f4"),
    ("PLAIN-MD4", "67d3dafef63ff00603aeef3769cfbf0d"),
    ("PLAIN-MD5", "5ebe2294ecd0e0f08eab7690d2a6ee69"),
    ("LDAP-MD5", "Xr4ilOzQ4PCOq3aQ0qbuaQ=="),
    ("RPA", "2e1e3faa2ed9dabed2d2d02d94746cf3"),
    (
        "CRAM-MD5",
        "cd3ba7deaad6e5ca23448ba42e379747a9e0f7f1fbc00c8a81bbaac395731b56",
    ),
    (
        "HMAC-MD5",
        "cd3ba7deaad6e5ca23448ba42e379747a9e0f7f1fbc00c8a81bbaac395731b56",
    ),
];

// ── Plaintext "password" (Windows hashes) ──────────────────────────
const WINDOWS_VECTORS: [(&str, &str); 2] = [
    ("LANMAN", "e52cac67419a9a224a3b108f3fa6cb6d"),
    ("NTLM", "8846f7eaee8fb117ad06bdd830b7586c"),
];

#[test]
fn unsalted_digests_of_secret() {
    let registry = SchemeRegistry::builtin();
    for (scheme, expected) in &SECRET_VECTORS {
        let encoded = registry.generate_encoded("secret", None, scheme).unwrap();
        assert_eq!(&encoded, expected, "{scheme} mismatch");

        let raw = registry.decode(expected, scheme).unwrap();
        assert!(
            registry.verify("secret", None, scheme, raw.as_bytes()).unwrap(),
            "{scheme} does not verify its own vector"
        );
    }
}

#[test]
fn windows_hashes_of_password() {
    let registry = SchemeRegistry::builtin();
    for (scheme, expected) in &WINDOWS_VECTORS {
        let encoded = registry.generate_encoded("password", None, scheme).unwrap();
        assert_eq!(&encoded, expected, "{scheme} mismatch");
    }
}

#[test]
fn uppercase_hex_vectors_decode() {
    let registry = SchemeRegistry::builtin();
    let raw = registry
        .decode("8846F7EAEE8FB117AD06BDD830B7586C", "NTLM")
        .unwrap();
    assert!(registry.verify("password", None, "NTLM", raw.as_bytes()).unwrap());
}

#[test]
fn digest_md5_binds_user_and_realm() {
    let registry = SchemeRegistry::builtin();
    let with_realm = registry
        .generate_encoded("secret", Some("user@example.com"), "DIGEST-MD5")
        .unwrap();
    assert_eq!(with_realm, "30969131580e626606ce70ceaab77719");

    let no_realm = registry
        .generate_encoded("secret", Some("alice"), "DIGEST-MD5")
        .unwrap();
    assert_eq!(no_realm, "cc3a3506aba601d2feee7bf9b34237ce");
}
