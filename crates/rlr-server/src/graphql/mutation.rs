use async_graphql::{Context, Object, Result};
use rlr_core::models::permission::Right;

use super::guard::RightGuard;
use super::types::{BooleanSetting, StringSetting};
use super::{services, to_graphql};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    #[graphql(guard = "RightGuard::new(Right::Change)")]
    async fn request_logger_log_level_change(
        &self,
        ctx: &Context<'_>,
        value: String,
    ) -> Result<StringSetting> {
        services(ctx)?
            .settings
            .set_log_level(value)
            .await
            .map(Into::into)
            .map_err(to_graphql)
    }

    #[graphql(guard = "RightGuard::new(Right::Change)")]
    async fn request_logger_log_frontend_change(
        &self,
        ctx: &Context<'_>,
        value: bool,
    ) -> Result<BooleanSetting> {
        services(ctx)?
            .settings
            .set_log_frontend(value)
            .await
            .map(Into::into)
            .map_err(to_graphql)
    }

    #[graphql(guard = "RightGuard::new(Right::Change)")]
    async fn request_logger_log_admin_change(
        &self,
        ctx: &Context<'_>,
        value: bool,
    ) -> Result<BooleanSetting> {
        services(ctx)?
            .settings
            .set_log_admin(value)
            .await
            .map(Into::into)
            .map_err(to_graphql)
    }

    /// Replace the redaction list. `value` must be a JSON array of
    /// strings.
    #[graphql(guard = "RightGuard::new(Right::Change)")]
    async fn request_logger_redact_change(
        &self,
        ctx: &Context<'_>,
        value: String,
    ) -> Result<StringSetting> {
        services(ctx)?
            .settings
            .set_redact(&value)
            .await
            .map(Into::into)
            .map_err(to_graphql)
    }

    #[graphql(guard = "RightGuard::new(Right::Change)")]
    async fn request_logger_redact_all_values_change(
        &self,
        ctx: &Context<'_>,
        value: bool,
    ) -> Result<BooleanSetting> {
        services(ctx)?
            .settings
            .set_redact_all_values(value)
            .await
            .map(Into::into)
            .map_err(to_graphql)
    }

    #[graphql(guard = "RightGuard::new(Right::Activate)")]
    async fn request_logger_activate(&self, ctx: &Context<'_>) -> Result<bool> {
        services(ctx)?.activation.activate().await.map_err(to_graphql)
    }

    #[graphql(guard = "RightGuard::new(Right::Activate)")]
    async fn request_logger_deactivate(&self, ctx: &Context<'_>) -> Result<bool> {
        services(ctx)?
            .activation
            .deactivate()
            .await
            .map_err(to_graphql)
    }

    /// Set the API user's password with a one-time setup token.
    async fn request_logger_set_password(
        &self,
        ctx: &Context<'_>,
        token: String,
        password: String,
    ) -> Result<bool> {
        services(ctx)?
            .bootstrap
            .claim_password(&token, &password)
            .await
            .map_err(to_graphql)
    }

    /// Revoke the API user's password and return a new setup token.
    #[graphql(guard = "RightGuard::new(Right::PasswordReset)")]
    async fn request_logger_reset_password(&self, ctx: &Context<'_>) -> Result<String> {
        services(ctx)?
            .bootstrap
            .reset_password()
            .await
            .map_err(to_graphql)
    }
}
