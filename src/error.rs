use thiserror::Error;

use crate::catalog::ProjectId;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to parse project catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate project id: {0}")]
    DuplicateId(ProjectId),

    #[error("Project catalog is empty")]
    Empty,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse {file}: {source}")]
    Parse {
        file: &'static str,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("{0}")]
    Validation(String),

    #[error("Failed to encode message: {0}")]
    Encode(String),

    #[error("Email relay rejected the message: {0}")]
    Relay(String),

    #[error("Email relay answered with status {0}")]
    Status(u16),
}

impl From<CatalogError> for String {
    fn from(err: CatalogError) -> Self {
        err.to_string()
    }
}

impl From<ConfigError> for String {
    fn from(err: ConfigError) -> Self {
        err.to_string()
    }
}

impl From<ContactError> for String {
    fn from(err: ContactError) -> Self {
        err.to_string()
    }
}
