use std::time::Duration;

use ::config::{Config, Environment, Map};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::{defaults, validate};
use crate::models::User;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub logging: LoggingConfig,
    pub storage: StorageConfig,
    pub session: SessionConfig,
    pub assistant: Option<AssistantConfig>,
    pub scanner: ScannerConfig,
}

impl AppConfig {
    /// Reads `APP_<SECTION>__<FIELD>` variables, e.g. `APP_STORAGE__URL`, after
    /// loading `.env` when one exists.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(None)
    }

    /// Like [`from_env`](Self::from_env), but over `vars` instead of the process
    /// environment when given.
    pub fn from_vars(vars: Option<Map<String, String>>) -> Result<Self> {
        let cfg: Self = Config::builder()
            .add_source(
                Environment::with_prefix(defaults::ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(defaults::ENV_SEPARATOR)
                    .try_parsing(true)
                    .source(vars),
            )
            .build()
            .context("failed to read config variables")?
            .try_deserialize()
            .context("failed to deserialize config variables")?;
        validate::validate(&cfg)?;
        Ok(cfg)
    }

    /// Defaults with volatile storage; nothing read from the environment.
    pub fn in_memory() -> Self {
        Self {
            storage: StorageConfig {
                url: "memory://".to_string(),
                ..StorageConfig::default()
            },
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralConfig {
    pub host: String,
    pub port: u16,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            host: defaults::DEFAULT_HOST.to_string(),
            port: defaults::DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub rust_log: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            rust_log: defaults::DEFAULT_RUST_LOG.to_string(),
        }
    }
}

/// Where collections are persisted: `memory://`, `file://<path>`, `sqlite:...` or
/// `postgres://...`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            url: defaults::DEFAULT_STORAGE_URL.to_string(),
            max_connections: defaults::DEFAULT_STORAGE_MAX_CONNECTIONS,
        }
    }
}

/// The mock account that `POST /session` signs in.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    pub user_id: String,
    pub email: String,
    pub display_name: String,
    pub avatar_url: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user_id: defaults::DEFAULT_USER_ID.to_string(),
            email: defaults::DEFAULT_USER_EMAIL.to_string(),
            display_name: defaults::DEFAULT_USER_NAME.to_string(),
            avatar_url: Some(defaults::DEFAULT_USER_AVATAR.to_string()),
        }
    }
}

impl SessionConfig {
    pub fn mock_user(&self) -> User {
        User {
            id: self.user_id.clone(),
            email: self.email.clone(),
            display_name: self.display_name.clone(),
            avatar_url: self.avatar_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AssistantConfig {
    pub api_key: String,
    #[serde(default = "default_assistant_model")]
    pub model: String,
    #[serde(default = "default_assistant_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScannerConfig {
    pub delay_ms: u64,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            delay_ms: defaults::DEFAULT_SCAN_DELAY_MS,
        }
    }
}

impl ScannerConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

fn default_assistant_model() -> String {
    defaults::DEFAULT_ASSISTANT_MODEL.to_string()
}

fn default_assistant_base_url() -> String {
    defaults::DEFAULT_ASSISTANT_BASE_URL.to_string()
}
