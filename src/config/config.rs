use std::env;
use std::fs;
use std::path::Path;
use serde::Deserialize;

use crate::constants::{
    API_TOKEN_ENV, API_URL_ENV, CONFIG_FILE, ENVIRONMENT_ID_ENV, PROJECT_ID_ENV, RAILWAY_API_URL,
};
use crate::error::{ErrorContext, StatusResult};
use crate::status_error;

/// Optional settings as stored in the config file or given on the command line.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct Config {
    pub api_url: Option<String>,
    pub api_token: Option<String>,
    pub project_id: Option<String>,
    pub environment_id: Option<String>,
}

impl Config {
    /// Read the four `RAILWAY_*` variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Config {
            api_url: get(API_URL_ENV),
            api_token: get(API_TOKEN_ENV),
            project_id: get(PROJECT_ID_ENV),
            environment_id: get(ENVIRONMENT_ID_ENV),
        }
    }

    /// Fill every unset field from `fallback`.
    pub fn or(self, fallback: Config) -> Config {
        Config {
            api_url: self.api_url.or(fallback.api_url),
            api_token: self.api_token.or(fallback.api_token),
            project_id: self.project_id.or(fallback.project_id),
            environment_id: self.environment_id.or(fallback.environment_id),
        }
    }

    /// True when every field already has a value.
    pub fn is_complete(&self) -> bool {
        self.api_url.is_some()
            && self.api_token.is_some()
            && self.project_id.is_some()
            && self.environment_id.is_some()
    }

    /// Fill unset fields from the config file, reading it only if something is missing.
    pub fn or_file<F>(self, load_file: F) -> StatusResult<Config>
    where
        F: FnOnce() -> StatusResult<Config>,
    {
        if self.is_complete() {
            return Ok(self);
        }
        Ok(self.or(load_file()?))
    }

    /// Turn the merged settings into the values one fetch needs.
    pub fn resolve(self) -> StatusResult<StatusConfig> {
        let api_token = self.api_token.with_context(|| {
            format!("No API token found. Set {} or pass --token.", API_TOKEN_ENV)
        })?;
        let project_id = self.project_id.with_context(|| {
            format!("No project ID found. Set {} or pass --project.", PROJECT_ID_ENV)
        })?;

        Ok(StatusConfig {
            api_url: self.api_url.unwrap_or_else(|| RAILWAY_API_URL.to_string()),
            api_token,
            project_id,
            environment_id: self.environment_id,
        })
    }
}

/// Fully resolved settings. These stay fixed for the lifetime of the process.
#[derive(Clone, PartialEq)]
pub struct StatusConfig {
    pub api_url: String,
    pub api_token: String,
    pub project_id: String,
    pub environment_id: Option<String>,
}

impl StatusConfig {
    pub fn new(api_url: &str, api_token: &str, project_id: &str) -> Self {
        Self {
            api_url: api_url.to_string(),
            api_token: api_token.to_string(),
            project_id: project_id.to_string(),
            environment_id: None,
        }
    }
}

// Keeps the token out of debug output and logs.
impl std::fmt::Debug for StatusConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusConfig")
            .field("api_url", &self.api_url)
            .field("api_token", &"<redacted>")
            .field("project_id", &self.project_id)
            .field("environment_id", &self.environment_id)
            .finish()
    }
}

/// Load the config file from the home directory. A missing file, or no home
/// directory at all, gives an empty config.
pub fn load_config() -> StatusResult<Config> {
    match dirs::home_dir() {
        Some(home_dir) => load_config_from(&home_dir.join(CONFIG_FILE)),
        None => Ok(Config::default()),
    }
}

pub fn load_config_from(path: &Path) -> StatusResult<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let config_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    serde_json::from_str(&config_str)
        .map_err(|e| status_error!(Config, "Malformed config file {}: {}", path.display(), e))
}
