//! GraphQL API for the request logger.
//!
//! ```graphql
//! query {
//!   requestLoggerLogLevel { name value }
//!   requestLoggerIsActive
//! }
//!
//! mutation {
//!   requestLoggerSetPassword(token: "…", password: "…")
//! }
//! ```
//!
//! Every field except `requestLoggerSetPassword` requires an
//! authenticated caller holding the field's right. The caller is
//! injected per request as [`Caller`](crate::caller::Caller) data.

pub mod guard;
pub mod mutation;
pub mod query;
pub mod types;

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Schema};

use crate::error::ServerError;
use crate::state::Services;

use self::mutation::MutationRoot;
use self::query::QueryRoot;

pub type RlrSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(services: Arc<Services>) -> RlrSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(services)
        .finish()
}

fn services<'a>(ctx: &'a Context<'_>) -> async_graphql::Result<&'a Services> {
    Ok(ctx.data::<Arc<Services>>()?.as_ref())
}

fn to_graphql<E: Into<ServerError>>(err: E) -> async_graphql::Error {
    err.into().into_graphql()
}
