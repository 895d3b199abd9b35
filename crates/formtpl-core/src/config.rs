//! Configuration types for formtpl.
//!
//! [`Config::load`] layers, lowest to highest precedence: the embedded
//! defaults, `~/.config/formtpl/config.toml` if present, and `FORMTPL_*`
//! environment variables (`FORMTPL_STORE__PATH`, `FORMTPL_STORE__TABLE`).
//! [`Config::defaults`] returns the embedded defaults without touching the
//! filesystem or environment (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

use crate::store::JsonStore;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[store]
path  = "test_db.json"
table = "forms"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
}

/// `[store]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// JSON document file holding the templates. Relative paths resolve
    /// against the working directory.
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
    /// Table inside the document that holds template records.
    #[serde(default = "default_store_table")]
    pub table: String,
}

fn default_store_path() -> PathBuf { PathBuf::from("test_db.json") }
fn default_store_table() -> String { "forms".to_string() }

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            table: default_store_table(),
        }
    }
}

impl StoreConfig {
    pub fn open(&self) -> JsonStore {
        JsonStore::open(&self.path, &self.table)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the layered configuration. A missing config file is not an error.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();
        tracing::debug!(path = %path.display(), "loading config");

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .add_source(
                config::Environment::with_prefix("FORMTPL")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("formtpl")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
