pub mod graphql;
pub mod project;

// Re-export commonly used types
pub use graphql::{GraphQLError, GraphQLResponse, ProjectData};
pub use project::{Deployment, ProjectStatus, Service, ServiceInstance};

use serde::Deserialize;

/// Relay-style connection as returned by the Railway API.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Connection<T> {
    #[serde(default)]
    pub edges: Vec<Edge<T>>,
}

impl<T> Connection<T> {
    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.edges.iter().map(|edge| &edge.node)
    }
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Connection { edges: Vec::new() }
    }
}

#[derive(Debug, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}
