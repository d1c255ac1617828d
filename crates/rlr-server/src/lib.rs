//! Request Logger Remote server: GraphQL management of the request
//! logger module and the setup-token bootstrap of its API user.

pub mod caller;
pub mod config;
pub mod error;
pub mod graphql;
pub mod routes;
pub mod service;
pub mod state;

pub use config::ServerConfig;
pub use error::ServerError;
pub use state::AppState;
