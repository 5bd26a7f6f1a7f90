//! Plugin discovery through the module loader extension point.

use std::path::PathBuf;

use pwscheme_core::{
    AlgorithmKind, Encoding, NoModules, PasswordAlgorithm, RawCredential, SchemeConfig,
    SchemeDescriptor, SchemeError, SchemeRegistry, StaticModule, StaticModules,
};

/// Reversed plaintext, stored as-is.
struct Reverse;

impl PasswordAlgorithm for Reverse {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::External("reverse".into())
    }

    fn generate(
        &self,
        plaintext: &str,
        _user: Option<&str>,
    ) -> Result<RawCredential, SchemeError> {
        Ok(RawCredential::from(plaintext.chars().rev().collect::<String>()))
    }
}

/// Fixed 4-byte XOR fold, stored as hex.
struct Fold4;

impl PasswordAlgorithm for Fold4 {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::External("fold4".into())
    }

    fn generate(
        &self,
        plaintext: &str,
        _user: Option<&str>,
    ) -> Result<RawCredential, SchemeError> {
        let mut out = [0u8; 4];
        for (i, b) in plaintext.bytes().enumerate() {
            out[i % 4] ^= b;
        }
        Ok(RawCredential::new(out.to_vec()))
    }
}

fn plugin_config() -> SchemeConfig {
    SchemeConfig {
        plugin_dir: Some(PathBuf::from("/usr/lib/pwscheme")),
        ..SchemeConfig::default()
    }
}

fn loader() -> StaticModules {
    let dir = "/usr/lib/pwscheme";
    let reverse = SchemeDescriptor::new("REVERSE", Encoding::None, 0, Reverse);
    let fold = SchemeDescriptor::new("FOLD4", Encoding::Hex, 4, Fold4);
    let fold_alias = SchemeDescriptor::new("FOLD-FOUR", Encoding::Hex, 4, Fold4);
    StaticModules::new()
        .with_module(dir, StaticModule::new("reverse", reverse))
        .with_module(dir, StaticModule::empty("nothing"))
        .with_module(dir, StaticModule::new("fold", fold))
        .with_module(dir, StaticModule::new("fold2", fold_alias))
}

#[test]
fn plugins_are_listed_after_builtins() {
    let registry = SchemeRegistry::init(&plugin_config(), &loader());
    let names: Vec<&str> = registry.schemes().collect();
    let builtin = SchemeRegistry::builtin();
    let builtin_names: Vec<&str> = builtin.schemes().collect();

    assert_eq!(names[..builtin_names.len()], builtin_names[..]);
    assert_eq!(names[builtin_names.len()..], ["REVERSE", "FOLD4", "FOLD-FOUR"]);
    registry.deinit();
}

#[test]
fn plugin_schemes_dispatch_like_builtins() {
    let registry = SchemeRegistry::init(&plugin_config(), &loader());

    let record = registry.generate_record("secret", None, "reverse").unwrap();
    assert_eq!(record, "{reverse}terces");
    assert!(registry.verify_record("secret", None, &record, "PLAIN").unwrap());

    let encoded = registry.generate_encoded("secret", None, "FOLD4").unwrap();
    assert_eq!(encoded.len(), 8);
    let raw = registry.decode(&encoded, "fold4").unwrap();
    assert!(registry.verify("secret", None, "FOLD4", raw.as_bytes()).unwrap());
    assert!(matches!(
        registry.decode("00", "FOLD4.hex"),
        Err(SchemeError::LengthMismatch { expected: 4, actual: 1, .. })
    ));
}

#[test]
fn plugin_aliases_follow_algorithm_kind() {
    let registry = SchemeRegistry::init(&plugin_config(), &loader());
    assert!(registry.is_alias("FOLD4", "fold-four.b64"));
    assert!(!registry.is_alias("FOLD4", "REVERSE"));
    assert!(!registry.is_alias("REVERSE", "PLAIN"));
}

#[test]
fn plugins_are_ignored_without_a_plugin_dir() {
    let registry = SchemeRegistry::init(&SchemeConfig::default(), &loader());
    assert!(registry.resolve("REVERSE").is_err());

    let registry = SchemeRegistry::init(&plugin_config(), &NoModules);
    assert_eq!(registry.len(), SchemeRegistry::builtin().len());
}

#[test]
fn embedder_descriptors_extend_the_registry() {
    let registry = SchemeRegistry::builtin()
        .with_descriptor(SchemeDescriptor::new("REVERSE", Encoding::None, 0, Reverse));
    assert!(registry
        .verify_record("abc", None, "{REVERSE}cba", "PLAIN")
        .unwrap());
}

#[test]
fn scheme_listing_snapshot() {
    let registry = SchemeRegistry::init(&plugin_config(), &loader());
    let names: Vec<&str> = registry.schemes().collect();
    insta::assert_json_snapshot!(names, @r#"
    [
      "CRYPT",
      "MD5",
      "MD5-CRYPT",
      "SHA",
      "SHA1",
      "SMD5",
      "SSHA",
      "PLAIN",
      "CLEARTEXT",
      "CRAM-MD5",
      "HMAC-MD5",
      "DIGEST-MD5",
      "PLAIN-MD4",
      "PLAIN-MD5",
      "LDAP-MD5",
      "LANMAN",
      "NTLM",
      "OTP",
      "SKEY",
      "RPA",
      "REVERSE",
      "FOLD4",
      "FOLD-FOUR"
    ]
    "#);
}
