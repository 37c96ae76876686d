use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{info, warn};

use crate::json;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown configuration key '{0}'")]
    UnknownKey(String),
}

/// Durable key-value settings with default-fallback reads.
///
/// The live map mirrors the backing JSON file; any key the file lacks is
/// answered from the immutable default map supplied at construction. Reads
/// of keys absent from both maps are programmer errors and surface as
/// [`ConfigError::UnknownKey`].
#[derive(Debug)]
pub struct ConfigManager {
    path: Option<PathBuf>,
    defaults: Map<String, Value>,
    live: Map<String, Value>,
}

impl ConfigManager {
    /// Loads the configuration from `path`, substituting `defaults` when the
    /// file is missing or unreadable. A missing file self-heals: the defaults
    /// are written to `path` immediately so the next run finds a real file.
    /// With no path, the manager is purely in-memory and `save` is a no-op.
    pub fn new(path: Option<PathBuf>, defaults: Map<String, Value>) -> Self {
        let loaded = match path.as_deref() {
            Some(file) if file.exists() => Some(match json::read(file) {
                Ok(live) => live,
                Err(err) => {
                    warn!("could not load configuration, using defaults: {err}");
                    defaults.clone()
                }
            }),
            _ => None,
        };
        match loaded {
            Some(live) => Self {
                path,
                defaults,
                live,
            },
            None => {
                let manager = Self {
                    path,
                    live: defaults.clone(),
                    defaults,
                };
                if let Some(file) = manager.path.as_deref() {
                    info!(
                        "configuration file {} not found, creating it with defaults",
                        file.display()
                    );
                    manager.save();
                }
                manager
            }
        }
    }

    /// Returns the live value for `key`, falling back to the default map.
    pub fn get(&self, key: &str) -> Result<&Value, ConfigError> {
        self.live
            .get(key)
            .or_else(|| self.defaults.get(key))
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))
    }

    /// Writes `key` into the live map. No validation, no persistence.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.live.insert(key.into(), value.into());
    }

    /// Persists the live map as pretty-printed UTF-8 JSON. Failures are
    /// logged and swallowed; the in-memory state stays valid either way.
    pub fn save(&self) {
        let Some(path) = self.path.as_deref() else {
            return;
        };
        if let Err(err) = json::write_pretty(path, &self.live) {
            warn!("could not save configuration: {err}");
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
