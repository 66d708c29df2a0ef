use serde::Deserialize;

use super::Connection;

#[derive(Debug, Deserialize)]
pub struct ProjectStatus {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub services: Connection<Service>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: Option<String>,
    #[serde(default)]
    pub service_instances: Connection<ServiceInstance>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInstance {
    pub id: String,
    pub environment_id: Option<String>,
    pub latest_deployment: Option<Deployment>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub id: String,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub static_url: Option<String>,
    pub build_logs: Option<String>,
    pub deploy_logs: Option<String>,
}
