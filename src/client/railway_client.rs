use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;

use super::graphql::{build_project_status_query, GraphQLRequest};
use crate::config::StatusConfig;
use crate::error::{StatusError, StatusResult};
use crate::logging::{log_debug, log_error, log_info};
use crate::status_error;

/// Status code and decoded body of one round trip.
///
/// Any HTTP status is reported here, including 4xx and 5xx, since the
/// platform puts its error details in the JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusReport {
    pub status: u16,
    pub body: Value,
}

pub struct RailwayClient {
    client: reqwest::Client,
    config: StatusConfig,
}

impl RailwayClient {
    pub fn new(config: StatusConfig) -> StatusResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_token))
            .map_err(|e| StatusError::Config(format!("Invalid API token format: {}", e)))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        // No timeout: the call waits as long as the endpoint does.
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &StatusConfig {
        &self.config
    }

    /// The query this client sends for its configured project.
    pub fn query(&self) -> String {
        build_project_status_query(&self.config.project_id)
    }

    /// POST the project status query and decode the response as JSON.
    pub async fn fetch_project_status(&self) -> StatusResult<StatusReport> {
        let body = GraphQLRequest::new(self.query());

        log_info(&format!(
            "Fetching status of project {} from {}",
            self.config.project_id, self.config.api_url
        ));

        let response = self
            .client
            .post(&self.config.api_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                log_error(&format!("Request failed: {}", e));
                StatusError::Transport(e)
            })?;

        let status = response.status().as_u16();
        log_debug(&format!("Received HTTP {}", status));

        let text = response.text().await?;
        let body = serde_json::from_str::<Value>(&text).map_err(|e| {
            log_error(&format!("Response from HTTP {} was not JSON: {}", status, e));
            status_error!(Decode, e)
        })?;

        Ok(StatusReport { status, body })
    }
}
