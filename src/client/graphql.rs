use serde::Serialize;
use serde_json::Value;

use crate::constants::DEPLOYMENT_FIELDS;

/// Build the project status query for `project_id`.
///
/// The id is written as a GraphQL string literal, so quotes and backslashes
/// in it are escaped rather than ending the argument early.
pub fn build_project_status_query(project_id: &str) -> String {
    format!(r#"
query {{
  project(id: {}) {{
    id
    name
    description
    services {{
      edges {{
        node {{
          id
          name
          serviceInstances {{
            edges {{
              node {{
                id
                environmentId
                latestDeployment {{{}                }}
              }}
            }}
          }}
        }}
      }}
    }}
  }}
}}
"#, string_literal(project_id), DEPLOYMENT_FIELDS)
}

fn string_literal(value: &str) -> String {
    Value::String(value.to_string()).to_string()
}

/// Body of a GraphQL POST. Only `query` is sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphQLRequest {
    pub query: String,
}

impl GraphQLRequest {
    pub fn new(query: String) -> Self {
        Self { query }
    }
}
