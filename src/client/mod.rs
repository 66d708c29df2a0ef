pub mod graphql;
pub mod railway_client;

pub use graphql::{build_project_status_query, GraphQLRequest};
pub use railway_client::{RailwayClient, StatusReport};
