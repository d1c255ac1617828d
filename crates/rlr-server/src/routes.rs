//! HTTP routes: the GraphQL endpoint, health check and admin endpoints.

use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use rlr_auth::AuthError;
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::caller::Caller;
use crate::error::ServerError;
use crate::state::{AppState, SetupStatus};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/graphql", post(graphql))
        .route("/health", get(health))
        .route("/admin/password-reset", post(password_reset))
        .route("/admin/setup-status", get(setup_status))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn graphql(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let caller = state.identify(&headers).await;
    state
        .schema()
        .execute(request.into_inner().data(caller))
        .await
        .into()
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn require_admin(state: &AppState, headers: &HeaderMap) -> Result<(), ServerError> {
    match state.identify(headers).await {
        Caller::Administrator => Ok(()),
        Caller::Anonymous => Err(ServerError::Unauthenticated),
        Caller::ServiceAccount { .. } => Err(ServerError::Forbidden),
    }
}

/// Administrator-initiated reset of the API user's password.
async fn password_reset(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    require_admin(&state, &headers).await?;

    match state.services().bootstrap.reset_password().await {
        Ok(token) => Ok(Json(json!({ "resetSuccess": true, "newToken": token })).into_response()),
        Err(AuthError::UserNotFound) => {
            warn!("Password reset requested before the API user was provisioned");
            Ok((
                StatusCode::NOT_FOUND,
                Json(json!({ "resetError": "USER_NOT_FOUND" })),
            )
                .into_response())
        }
        Err(e) => Err(e.into()),
    }
}

async fn setup_status(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<SetupStatus>, ServerError> {
    require_admin(&state, &headers).await?;
    Ok(Json(state.services().setup_status().await))
}
