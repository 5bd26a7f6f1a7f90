//! `pwscheme-core`: stored password verification across hash schemes.
//!
//! A stored record such as `{SSHA}base64...` or `{PLAIN-MD5.hex}...` names
//! its scheme and optional encoding. The [`SchemeRegistry`] resolves the tag,
//! decodes the payload and checks a plaintext against it, or generates new
//! records for provisioning. Plugin schemes are added at registry build time.
//!
//! Zero network, zero async. The crate emits `tracing` events but never
//! installs a subscriber.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod encoding;

pub mod credential;
pub mod descriptor;
pub mod salt;

pub mod otp;
pub mod schemes;

pub mod config;
mod dispatch;
pub mod registry;

pub use config::{SchemeConfig, DEFAULT_SCHEME};
pub use credential::{EncodedCredential, RawCredential};
pub use descriptor::{AlgorithmKind, PasswordAlgorithm, SchemeDescriptor};
pub use encoding::Encoding;
pub use error::SchemeError;
pub use otp::{generate_otp, OtpAlgorithm, OtpState};
pub use registry::{
    ModuleLoader, NoModules, ResolvedScheme, SchemeModule, SchemeRegistry, StaticModule,
    StaticModules,
};
