// Settings store - lazy, credential-aware pipeline bootstrap
//
// The store is the single source of truth for the credential, the default
// region, and the active pipeline. Nothing here touches the network or the
// environment until the first `pipeline()` read.

pub mod factory;

use crate::config::Config;
use crate::data::{Platform, Region};
use crate::error::{NashorError, Result};
use crate::pipeline::DataPipeline;
use indexmap::IndexMap;
use std::str::FromStr;
use std::sync::{Arc, Mutex, RwLock};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Literal API keys start with this prefix; anything else names an
/// environment variable holding the key.
const KEY_PREFIX: &str = "RGAPI";

/// Level applied to any logging target the configuration leaves out
const DEFAULT_LOG_LEVEL: &str = "warn";

/// How the API key was supplied, decided once at configuration-load time
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CredentialSource {
    /// The key itself
    Literal(String),
    /// Name of an environment variable holding the key
    EnvVar(String),
}

/// Credential and pipeline share one lock so the check-then-construct
/// sequence on first read is atomic.
struct PipelineSlot {
    credential: CredentialSource,
    pipeline: Option<Arc<DataPipeline>>,
}

/// Process-wide settings store.
///
/// Constructed once at startup from a [`Config`] and passed explicitly to
/// whatever needs it. The pipeline is built lazily on the first
/// [`pipeline()`](Settings::pipeline) read, resolving an environment-
/// indirected credential at most once, and is replaceable outright via
/// [`set_pipeline`](Settings::set_pipeline).
pub struct Settings {
    slot: Mutex<PipelineSlot>,
    default_region: RwLock<Region>,
}

impl Settings {
    /// Build the store from a loaded configuration.
    ///
    /// Parses the region (case-insensitive, `InvalidConfig` on an unknown
    /// code), classifies the credential by prefix, and applies the
    /// configured log levels to the global subscriber. Does not read the
    /// environment and does not construct a pipeline.
    pub fn from_config(config: &Config) -> Result<Self> {
        let region = Region::from_str(&config.region.to_uppercase())?;
        apply_log_levels(&config.logging)?;

        let credential = if config.credential.starts_with(KEY_PREFIX) {
            CredentialSource::Literal(config.credential.clone())
        } else {
            CredentialSource::EnvVar(config.credential.clone())
        };

        Ok(Self {
            slot: Mutex::new(PipelineSlot {
                credential,
                pipeline: None,
            }),
            default_region: RwLock::new(region),
        })
    }

    /// The active pipeline, built on first read.
    ///
    /// An environment-indirected credential is resolved here, once: on
    /// success the literal replaces the variable name and the environment
    /// is never consulted again; on failure (`CredentialResolution`)
    /// nothing is cached and a later read retries. Construction happens at
    /// most once; concurrent first reads observe one pipeline.
    pub fn pipeline(&self) -> Result<Arc<DataPipeline>> {
        let mut slot = self.slot.lock().expect("settings lock poisoned");
        if let Some(pipeline) = &slot.pipeline {
            return Ok(Arc::clone(pipeline));
        }

        let key = match &slot.credential {
            CredentialSource::Literal(key) => key.clone(),
            CredentialSource::EnvVar(name) => {
                let key = std::env::var(name)
                    .map_err(|_| NashorError::CredentialResolution(name.clone()))?;
                debug!("resolved credential from environment variable {name}");
                slot.credential = CredentialSource::Literal(key.clone());
                key
            }
        };

        let pipeline = Arc::new(factory::create_default_pipeline(&key, false));
        slot.pipeline = Some(Arc::clone(&pipeline));
        Ok(pipeline)
    }

    /// Replace the active pipeline outright, bypassing credential
    /// resolution and the default factory.
    pub fn set_pipeline(&self, pipeline: Arc<DataPipeline>) {
        let mut slot = self.slot.lock().expect("settings lock poisoned");
        slot.pipeline = Some(pipeline);
    }

    /// Replace the default region
    pub fn set_region(&self, region: Region) {
        *self.default_region.write().expect("settings lock poisoned") = region;
    }

    pub fn default_region(&self) -> Region {
        *self.default_region.read().expect("settings lock poisoned")
    }

    /// The platform paired with the default region. The pairing is total
    /// over both enumerations, so this cannot fail.
    pub fn default_platform(&self) -> Platform {
        self.default_region().platform()
    }
}

/// Apply configured verbosity to the global subscriber.
///
/// `"default"` sets the default directive; `"core"` sets the pipeline
/// engine target. Installing the subscriber is a one-time process-wide
/// effect; if one is already installed this is a no-op.
fn apply_log_levels(levels: &IndexMap<String, String>) -> Result<()> {
    let default_level = levels
        .get("default")
        .map(String::as_str)
        .unwrap_or(DEFAULT_LOG_LEVEL);
    let core_level = levels
        .get("core")
        .map(String::as_str)
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let directives = format!("{default_level},nashor::pipeline={core_level}");
    let filter = EnvFilter::try_new(&directives).map_err(|err| {
        NashorError::invalid_config(format!("bad logging level in '{directives}': {err}"))
    })?;

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    Ok(())
}
