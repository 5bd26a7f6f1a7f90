//! Scheme registry and plugin discovery.
//!
//! The registry is built once at startup: built-in descriptors first, then
//! descriptors exposed by plugin modules in discovery order. After
//! construction it is read-only and can be shared across threads by
//! reference.
//!
//! Plugin modules are reached through [`ModuleLoader`]. Each loaded
//! [`SchemeModule`] is asked for the symbol `<module name>_scheme`; modules
//! without it are skipped.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::SchemeConfig;
use crate::descriptor::SchemeDescriptor;
use crate::encoding::Encoding;
use crate::error::SchemeError;
use crate::schemes::builtin_descriptors;

// ---------------------------------------------------------------------------
// Plugin extension point
// ---------------------------------------------------------------------------

/// A loaded plugin module.
pub trait SchemeModule: Send + Sync {
    /// Module name; the scheme symbol is `<name>_scheme`.
    fn name(&self) -> &str;

    /// Look up an exported descriptor by symbol name.
    fn symbol(&self, symbol: &str) -> Option<SchemeDescriptor>;
}

/// Discovers plugin modules in a directory.
pub trait ModuleLoader {
    /// Load every module found in `dir`. Modules that fail to load are
    /// omitted from the result.
    fn load_dir(&self, dir: &Path) -> Vec<Arc<dyn SchemeModule>>;
}

/// Loader that never finds a module.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoModules;

impl ModuleLoader for NoModules {
    fn load_dir(&self, _dir: &Path) -> Vec<Arc<dyn SchemeModule>> {
        Vec::new()
    }
}

/// Module exposing at most one descriptor under `<name>_scheme`.
#[derive(Clone, Debug)]
pub struct StaticModule {
    name: String,
    scheme: Option<SchemeDescriptor>,
}

impl StaticModule {
    /// Module exporting `scheme`.
    #[must_use]
    pub fn new(name: impl Into<String>, scheme: SchemeDescriptor) -> Self {
        Self {
            name: name.into(),
            scheme: Some(scheme),
        }
    }

    /// Module with no scheme symbol.
    #[must_use]
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scheme: None,
        }
    }
}

impl SchemeModule for StaticModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn symbol(&self, symbol: &str) -> Option<SchemeDescriptor> {
        let expected = symbol
            .strip_prefix(self.name.as_str())
            .is_some_and(|rest| rest == "_scheme");
        if expected {
            self.scheme.clone()
        } else {
            None
        }
    }
}

/// In-process loader over modules registered per directory.
///
/// Lets an embedding application ship compiled-in plugins while keeping
/// the directory-driven discovery flow.
#[derive(Clone, Default)]
pub struct StaticModules {
    dirs: Vec<(PathBuf, Arc<dyn SchemeModule>)>,
}

impl StaticModules {
    /// Empty loader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `module` as living in `dir`.
    #[must_use]
    pub fn with_module(
        mut self,
        dir: impl Into<PathBuf>,
        module: impl SchemeModule + 'static,
    ) -> Self {
        self.dirs.push((dir.into(), Arc::new(module)));
        self
    }
}

impl ModuleLoader for StaticModules {
    fn load_dir(&self, dir: &Path) -> Vec<Arc<dyn SchemeModule>> {
        self.dirs
            .iter()
            .filter(|(d, _)| d == dir)
            .map(|(_, m)| Arc::clone(m))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// A scheme tag resolved against the registry.
#[derive(Clone, Copy, Debug)]
pub struct ResolvedScheme<'a> {
    /// Matching descriptor.
    pub descriptor: &'a SchemeDescriptor,
    /// Encoding to apply.
    pub encoding: Encoding,
    /// `true` when the tag carried an encoding suffix.
    pub explicit_encoding: bool,
}

/// Ordered, name-unique set of scheme descriptors.
pub struct SchemeRegistry {
    schemes: Vec<SchemeDescriptor>,
    modules: Vec<Arc<dyn SchemeModule>>,
}

impl SchemeRegistry {
    /// Registry holding only the built-in schemes.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self {
            schemes: Vec::new(),
            modules: Vec::new(),
        };
        for descriptor in builtin_descriptors() {
            registry.push(descriptor);
        }
        registry
    }

    /// Build the process registry: built-ins, then plugin schemes found by
    /// `loader` in the configured plugin directory.
    #[must_use]
    pub fn init(config: &SchemeConfig, loader: &dyn ModuleLoader) -> Self {
        let mut registry = Self::builtin();

        if let Some(dir) = &config.plugin_dir {
            for module in loader.load_dir(dir) {
                let symbol = format!("{}_scheme", module.name());
                match module.symbol(&symbol) {
                    Some(descriptor) => {
                        if registry.push(descriptor) {
                            registry.modules.push(module);
                        }
                    }
                    None => {
                        tracing::warn!(module = module.name(), %symbol, "plugin module exposes no scheme, skipped");
                    }
                }
            }
        }

        tracing::info!(
            schemes = registry.schemes.len(),
            modules = registry.modules.len(),
            "password schemes initialised"
        );
        registry
    }

    /// Append an embedder-constructed descriptor.
    ///
    /// A descriptor whose name is already registered is ignored.
    #[must_use]
    pub fn with_descriptor(mut self, descriptor: SchemeDescriptor) -> Self {
        self.push(descriptor);
        self
    }

    fn push(&mut self, descriptor: SchemeDescriptor) -> bool {
        if self.find(descriptor.name()).is_some() {
            tracing::warn!(scheme = descriptor.name(), "duplicate password scheme, skipped");
            return false;
        }
        tracing::debug!(scheme = descriptor.name(), "password scheme registered");
        self.schemes.push(descriptor);
        true
    }

    /// Release plugin modules and discard the registry.
    pub fn deinit(self) {
        tracing::info!(
            schemes = self.schemes.len(),
            modules = self.modules.len(),
            "password schemes released"
        );
        drop(self);
    }

    /// Descriptor whose name equals `name` ignoring case.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&SchemeDescriptor> {
        self.schemes.iter().find(|s| s.matches_name(name))
    }

    /// Resolve a scheme tag such as `SSHA` or `PLAIN-MD5.hex`.
    ///
    /// The text before the first `.` must name a registered scheme. A suffix
    /// after it selects the encoding and must be `hex`, `b64` or `base64`;
    /// any other suffix makes the whole tag unknown.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::UnknownScheme`] when the tag does not resolve.
    pub fn resolve(&self, tag: &str) -> Result<ResolvedScheme<'_>, SchemeError> {
        let (name, suffix) = match tag.split_once('.') {
            Some((name, suffix)) => (name, Some(suffix)),
            None => (tag, None),
        };
        let unknown = || {
            tracing::debug!(scheme = tag, "unknown password scheme");
            SchemeError::UnknownScheme(tag.to_owned())
        };

        let descriptor = self.find(name).ok_or_else(unknown)?;
        let encoding = match suffix {
            None => descriptor.default_encoding(),
            Some(suffix) => Encoding::from_suffix(suffix).ok_or_else(unknown)?,
        };
        Ok(ResolvedScheme {
            descriptor,
            encoding,
            explicit_encoding: suffix.is_some(),
        })
    }

    /// Scheme names in registry order. Call again to restart.
    pub fn schemes(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.schemes.iter().map(SchemeDescriptor::name)
    }

    /// Descriptors in registry order.
    #[must_use]
    pub fn descriptors(&self) -> &[SchemeDescriptor] {
        &self.schemes
    }

    /// Number of registered schemes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    /// `true` when no scheme is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }
}

impl Default for SchemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
