use async_graphql::{Context, Guard};
use rlr_core::models::permission::Right;

use crate::caller::Caller;
use crate::error::ServerError;

/// Rejects anonymous callers and callers lacking the right.
pub struct RightGuard(Right);

impl RightGuard {
    pub fn new(right: Right) -> Self {
        Self(right)
    }
}

impl Guard for RightGuard {
    async fn check(&self, ctx: &Context<'_>) -> async_graphql::Result<()> {
        let Some(caller) = ctx.data_opt::<Caller>().filter(|c| c.is_authenticated()) else {
            return Err(ServerError::Unauthenticated.into_graphql());
        };
        if !caller.has_right(self.0) {
            return Err(ServerError::Forbidden.into_graphql());
        }
        Ok(())
    }
}
