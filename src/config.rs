// Configuration input for the settings store

use crate::error::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// User-supplied configuration mapping.
///
/// `credential` is either a literal API key (recognized by its `RGAPI`
/// prefix) or the name of an environment variable holding the key.
/// `region` is a case-insensitive region code. `logging` maps the
/// well-known target names `"default"` and `"core"` to level strings;
/// anything unspecified stays at `warn`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub credential: String,
    pub region: String,
    #[serde(default)]
    pub logging: IndexMap<String, String>,
}

impl Config {
    pub fn new(credential: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            credential: credential.into(),
            region: region.into(),
            logging: IndexMap::new(),
        }
    }

    /// Load a configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
