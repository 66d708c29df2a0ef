use crate::client::RailwayClient;
use crate::config::{load_config, Config, StatusConfig};
use crate::error::StatusResult;
use crate::logging::log_debug;

/// Resolved configuration plus the client built from it.
pub struct CliContext {
    config: StatusConfig,
    client: RailwayClient,
}

impl CliContext {
    /// Resolve settings from command-line overrides, then the environment,
    /// then the config file in the home directory.
    pub fn load(overrides: Config) -> StatusResult<Self> {
        let merged = overrides.or(Config::from_env()).or_file(load_config)?;
        Self::from_config(merged)
    }

    pub fn from_config(config: Config) -> StatusResult<Self> {
        let config = config.resolve()?;
        log_debug(&format!("Resolved configuration: {:?}", config));
        let client = RailwayClient::new(config.clone())?;
        Ok(Self { config, client })
    }

    pub fn client(&self) -> &RailwayClient {
        &self.client
    }

    pub fn config(&self) -> &StatusConfig {
        &self.config
    }

    pub fn environment_id(&self) -> Option<&str> {
        self.config.environment_id.as_deref()
    }
}

/// Builder for contexts with explicit settings, bypassing the environment and config file.
#[derive(Default)]
pub struct CliContextBuilder {
    config: Config,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.config.api_url = Some(api_url.to_string());
        self
    }

    pub fn with_api_token(mut self, api_token: &str) -> Self {
        self.config.api_token = Some(api_token.to_string());
        self
    }

    pub fn with_project_id(mut self, project_id: &str) -> Self {
        self.config.project_id = Some(project_id.to_string());
        self
    }

    pub fn with_environment_id(mut self, environment_id: &str) -> Self {
        self.config.environment_id = Some(environment_id.to_string());
        self
    }

    pub fn build(self) -> StatusResult<CliContext> {
        CliContext::from_config(self.config)
    }
}
