//! Storage configuration, read once at startup

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

pub const REGION_VAR: &str = "AWS_REGION";
pub const BUCKET_VAR: &str = "S3_BUCKET_NAME";
pub const ENDPOINT_VAR: &str = "S3_ENDPOINT_URL";
pub const FORCE_PATH_STYLE_VAR: &str = "S3_FORCE_PATH_STYLE";

/// Static access key pair used instead of the default AWS credential chain
#[derive(Clone, PartialEq, Eq)]
pub struct StaticCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl StaticCredentials {
    /// Load the key id and secret from two one-line files
    pub fn from_files(
        access_key_id_path: &Path,
        secret_key_path: &Path,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            access_key_id: read_value_from_file(access_key_id_path)?,
            secret_access_key: read_value_from_file(secret_key_path)?,
        })
    }

    /// Key id with everything after the first four characters masked
    pub fn masked_key_id(&self) -> String {
        let visible: String = self.access_key_id.chars().take(4).collect();
        format!("{}****", visible)
    }
}

impl fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("access_key_id", &self.masked_key_id())
            .field("secret_access_key", &"<redacted>")
            .finish()
    }
}

/// Configuration for a [`crate::storage::StorageClient`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub region: String,
    pub bucket_name: String,
    #[serde(default)]
    pub endpoint_url: Option<String>,
    #[serde(default)]
    pub force_path_style: bool,
    #[serde(skip)]
    pub credentials: Option<StaticCredentials>,
}

impl StorageConfig {
    pub fn new(region: impl Into<String>, bucket_name: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            bucket_name: bucket_name.into(),
            endpoint_url: None,
            force_path_style: false,
            credentials: None,
        }
    }

    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let region = get(REGION_VAR).ok_or(ConfigError::MissingVar(REGION_VAR))?;
        let bucket_name = get(BUCKET_VAR).ok_or(ConfigError::MissingVar(BUCKET_VAR))?;

        Ok(Self {
            region,
            bucket_name,
            endpoint_url: get(ENDPOINT_VAR),
            force_path_style: get(FORCE_PATH_STYLE_VAR)
                .map(|value| parse_flag(&value))
                .unwrap_or(false),
            credentials: None,
        })
    }

    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    pub fn with_force_path_style(mut self, force_path_style: bool) -> Self {
        self.force_path_style = force_path_style;
        self
    }

    pub fn with_credentials(mut self, credentials: StaticCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Region and bucket name must both be non-empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.region.is_empty() {
            return Err(ConfigError::MissingVar(REGION_VAR));
        }
        if self.bucket_name.is_empty() {
            return Err(ConfigError::MissingVar(BUCKET_VAR));
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

/// Read a single value from a file, trimming whitespace and newlines
pub fn read_value_from_file(path: &Path) -> Result<String, ConfigError> {
    let value = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::EmptyFile(path.to_path_buf()));
    }
    Ok(value.to_string())
}
