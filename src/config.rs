//! Site settings embedded at compile time from `config/site.toml`.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const SITE_TOML: &str = include_str!("../config/site.toml");

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_FLASH_MS: u32 = 5000;
/// Longest banner the contact form will keep on screen.
pub const MAX_FLASH_MS: u32 = 60_000;

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_flash_ms() -> u32 {
    DEFAULT_FLASH_MS
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Lifetime of the contact form's success/error banner.
    #[serde(default = "default_flash_ms")]
    pub flash_ms: u32,
    pub owner: Owner,
    pub contact: RelayConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Owner {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub resume: Option<String>,
    #[serde(default)]
    pub available: bool,
}

/// Tokens identifying the EmailJS account that relays contact messages.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl SiteConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
            file: "site.toml",
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_toml(SITE_TOML)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.owner.name.trim().is_empty() {
            return Err(ConfigError::Invalid("owner.name must not be empty".to_string()));
        }
        let relay = [
            ("contact.service_id", &self.contact.service_id),
            ("contact.template_id", &self.contact.template_id),
            ("contact.public_key", &self.contact.public_key),
        ];
        for (key, value) in relay {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{} must not be empty", key)));
            }
        }
        if self.flash_ms == 0 || self.flash_ms > MAX_FLASH_MS {
            return Err(ConfigError::Invalid(format!(
                "flash_ms must be between 1 and {}",
                MAX_FLASH_MS
            )));
        }
        Ok(())
    }
}
