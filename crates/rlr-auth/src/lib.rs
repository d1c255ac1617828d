//! Request Logger Remote auth: the setup-token credential bootstrap
//! protocol for the API service account.
//!
//! A freshly activated module issues a one-time setup token. A remote
//! operator exchanges that token for a password of their choosing; an
//! administrator can revoke the password and issue a new token at any
//! time. No real password is ever transmitted by the module itself.

pub mod config;
pub mod credential;
pub mod error;
pub mod password;
pub mod service;
pub mod store;
pub mod token;

pub use config::AuthConfig;
pub use credential::CredentialTracker;
pub use error::AuthError;
pub use service::BootstrapService;
pub use store::SetupTokenStore;
pub use token::{RandomTokenGenerator, TokenGenerator};
