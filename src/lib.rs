//! League of Legends statistics client with a lazily bootstrapped data
//! pipeline.
//!
//! Configuration is held in a [`Settings`] store; the first
//! [`Settings::pipeline`] read resolves the credential (literal key or
//! environment indirection) and wires the default pipeline of sources and
//! transformers. Until then nothing touches the network or the
//! environment.
//!
//! ```no_run
//! use nashor::{Config, Settings};
//! use nashor::pipeline::{self, PipeMap};
//! use nashor::types::Summoner;
//!
//! # async fn run() -> nashor::Result<()> {
//! let settings = Settings::from_config(&Config::new("RGAPI-xxxx", "na"))?;
//!
//! let mut query = PipeMap::new();
//! query.insert_typed(pipeline::REGION, settings.default_region());
//! query.insert_typed(pipeline::SUMMONER_NAME, "Player One".to_string());
//!
//! let summoner: Summoner = settings.pipeline()?.get(&query).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data;
pub mod dto;
pub mod error;
pub mod pipeline;
pub mod settings;
pub mod sources;
pub mod transformers;
pub mod types;

pub use config::Config;
pub use data::{Platform, Region};
pub use error::{NashorError, Result};
pub use settings::{CredentialSource, Settings, factory::create_default_pipeline};
