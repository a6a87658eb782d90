// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{ClientError, Result};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";
const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
const ENV_PREFIX: &str = "PDF_SEARCH";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub service: ServiceConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Address of the indexing/search service, without the `/api/pdf` prefix
    pub base_url: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Truncate card content after this many characters; 0 disables truncation
    #[serde(default)]
    pub max_content_chars: usize,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();
        Self::load_with_env(path, None)
    }

    /// Load from `path` when it exists, otherwise from defaults and the
    /// environment alone. Invalid settings are errors in both cases.
    pub fn resolve(path: &Path) -> Result<Self> {
        dotenv().ok();
        Self::resolve_with_env(path, None)
    }

    fn resolve_with_env(
        path: &Path,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        if path.exists() {
            info!("Loading configuration from: {}", path.display());
            Self::load_with_env(Some(path), env)
        } else {
            warn!(
                "Config file {} not found, using defaults and environment",
                path.display()
            );
            Self::load_with_env(None, env)
        }
    }

    /// `env` replaces the process environment as the override source when set.
    fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("service.base_url", DEFAULT_BASE_URL)
            .and_then(|b| b.set_default("display.max_content_chars", 0_i64))
            .map_err(|e| ClientError::Config(e.to_string()))?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new(DEFAULT_CONFIG_PATH)).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let settings = builder
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            service: ServiceConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
            },
            display: DisplayConfig::default(),
        }
    }

    /// Replace the service address, e.g. from a command line flag.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self> {
        self.service.base_url = base_url.into();
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        Validator::validate_url(&self.service.base_url)
            .map_err(|e| ClientError::Config(format!("service.base_url: {}", e)))
    }
}
