//! Engine configuration, read from a JSON document.
//!
//! ```json
//! { "pluginDir": "/usr/lib/pwscheme", "defaultScheme": "SSHA" }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SchemeError;
use crate::registry::SchemeRegistry;

/// Scheme applied to stored records that carry no scheme tag.
pub const DEFAULT_SCHEME: &str = "MD5-CRYPT";

/// Registry and record-parsing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SchemeConfig {
    /// Directory scanned for plugin modules during `init`. `None` disables
    /// plugin discovery.
    #[serde(default)]
    pub plugin_dir: Option<PathBuf>,

    /// Scheme used when a stored record has no `{SCHEME}` tag.
    #[serde(default = "default_scheme")]
    pub default_scheme: String,
}

impl Default for SchemeConfig {
    fn default() -> Self {
        Self {
            plugin_dir: None,
            default_scheme: default_scheme(),
        }
    }
}

fn default_scheme() -> String {
    DEFAULT_SCHEME.into()
}

impl SchemeConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::Config`] if the document is not valid JSON or
    /// has fields of the wrong type.
    pub fn from_json(text: &str) -> Result<Self, SchemeError> {
        serde_json::from_str(text).map_err(|e| SchemeError::Config(e.to_string()))
    }

    /// Read and parse the JSON file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::Config`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, SchemeError> {
        let text = fs::read_to_string(path)
            .map_err(|e| SchemeError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json(&text)
    }

    /// Check the settings against a built registry.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::UnknownScheme`] if `default_scheme` does not
    /// resolve.
    pub fn validate(&self, registry: &SchemeRegistry) -> Result<(), SchemeError> {
        registry.resolve(&self.default_scheme).map(|_| ())
    }
}
