//! Server error type shared by the GraphQL resolvers and the admin
//! HTTP handlers.

use async_graphql::ErrorExtensions;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rlr_auth::AuthError;
use rlr_core::error::RlrError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("You need to be logged in to access this resource.")]
    Unauthenticated,

    #[error("You do not have the right to access this resource.")]
    Forbidden,

    #[error("Failed to activate module")]
    ModuleActivation(#[source] RlrError),

    #[error("Failed to deactivate module")]
    ModuleDeactivation(#[source] RlrError),

    #[error("Invalid JSON array provided for redact items")]
    InvalidCollection,

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Internal server error.")]
    Internal(#[from] RlrError),
}

impl ServerError {
    /// Error category reported to API clients.
    pub fn category(&self) -> &'static str {
        match self {
            ServerError::Unauthenticated => "unauthenticated",
            ServerError::Forbidden => "permission",
            ServerError::InvalidCollection => "validation",
            ServerError::ModuleActivation(_)
            | ServerError::ModuleDeactivation(_)
            | ServerError::Internal(_) => "internal",
            ServerError::Auth(auth) => match auth {
                AuthError::InvalidToken | AuthError::PasswordAlreadySet => "permission",
                AuthError::PasswordTooShort { .. } => "validation",
                AuthError::UserNotFound => "notfound",
                AuthError::Internal(_) => "internal",
            },
        }
    }

    fn status(&self) -> StatusCode {
        match self.category() {
            "unauthenticated" => StatusCode::UNAUTHORIZED,
            "permission" => StatusCode::FORBIDDEN,
            "validation" => StatusCode::BAD_REQUEST,
            "notfound" => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Log failures whose detail is withheld from the client.
    fn log(&self) {
        let source = match self {
            ServerError::Internal(e)
            | ServerError::Auth(AuthError::Internal(e))
            | ServerError::ModuleActivation(e)
            | ServerError::ModuleDeactivation(e) => e,
            _ => return,
        };
        error!(error = %source, category = self.category(), "{self}");
    }

    /// Convert into a GraphQL error carrying the `category` extension.
    pub fn into_graphql(self) -> async_graphql::Error {
        self.log();
        self.extend()
    }
}

impl ErrorExtensions for ServerError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string())
            .extend_with(|_, e| e.set("category", self.category()))
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        self.log();
        let body = json!({
            "error": self.to_string(),
            "category": self.category(),
        });
        (self.status(), Json(body)).into_response()
    }
}
