pub const RAILWAY_API_URL: &str = "https://backboard.railway.com/graphql/v2";
pub const CONFIG_FILE: &str = ".railway-status-config.json";

pub const API_URL_ENV: &str = "RAILWAY_API_URL";
pub const API_TOKEN_ENV: &str = "RAILWAY_API_TOKEN";
pub const PROJECT_ID_ENV: &str = "RAILWAY_PROJECT_ID";
pub const ENVIRONMENT_ID_ENV: &str = "RAILWAY_ENVIRONMENT_ID";

// Fields requested for each service instance's most recent deployment
pub const DEPLOYMENT_FIELDS: &str = r#"
                  id
                  status
                  createdAt
                  staticUrl
                  buildLogs
                  deployLogs
"#;
