//! Ingestion configuration.

use std::path::Path;
use std::thread;

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::Deserialize;

use crate::error::Result;

/// Tuning knobs for the ingestion pipeline.
///
/// Loaded from a TOML file with `VECHE_*` environment variables layered
/// on top, or built with [`Default`] when no file is given.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Maximum number of source files read concurrently. A value of 0 is
    /// treated as 1 by the pipeline.
    pub max_workers: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            max_workers: thread::available_parallelism().map_or(1, usize::from),
        }
    }
}

impl IngestConfig {
    /// Loads configuration from a TOML file, with `VECHE_*` environment
    /// variables taking precedence over file values.
    pub fn load(path: &Path) -> Result<Self> {
        let config = Figment::from(Toml::file(path))
            .merge(Env::prefixed("VECHE_"))
            .extract()?;
        Ok(config)
    }
}
