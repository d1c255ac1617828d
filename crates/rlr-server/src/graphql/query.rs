use async_graphql::{Context, Object, Result};
use rlr_core::models::permission::Right;

use super::guard::RightGuard;
use super::types::{BooleanSetting, SettingTypeObject, StringSetting};
use super::{services, to_graphql};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All request logger settings with their types.
    #[graphql(guard = "RightGuard::new(Right::View)")]
    async fn request_logger_settings(&self, ctx: &Context<'_>) -> Result<Vec<SettingTypeObject>> {
        Ok(services(ctx)?
            .settings
            .setting_types()
            .into_iter()
            .map(Into::into)
            .collect())
    }

    #[graphql(guard = "RightGuard::new(Right::View)")]
    async fn request_logger_log_level(&self, ctx: &Context<'_>) -> Result<StringSetting> {
        services(ctx)?
            .settings
            .log_level()
            .await
            .map(Into::into)
            .map_err(to_graphql)
    }

    #[graphql(guard = "RightGuard::new(Right::View)")]
    async fn request_logger_log_frontend(&self, ctx: &Context<'_>) -> Result<BooleanSetting> {
        services(ctx)?
            .settings
            .log_frontend()
            .await
            .map(Into::into)
            .map_err(to_graphql)
    }

    #[graphql(guard = "RightGuard::new(Right::View)")]
    async fn request_logger_log_admin(&self, ctx: &Context<'_>) -> Result<BooleanSetting> {
        services(ctx)?
            .settings
            .log_admin()
            .await
            .map(Into::into)
            .map_err(to_graphql)
    }

    /// Redacted parameter names as a JSON-encoded array.
    #[graphql(guard = "RightGuard::new(Right::View)")]
    async fn request_logger_redact(&self, ctx: &Context<'_>) -> Result<StringSetting> {
        services(ctx)?
            .settings
            .redact()
            .await
            .map(Into::into)
            .map_err(to_graphql)
    }

    #[graphql(guard = "RightGuard::new(Right::View)")]
    async fn request_logger_redact_all_values(&self, ctx: &Context<'_>) -> Result<BooleanSetting> {
        services(ctx)?
            .settings
            .redact_all_values()
            .await
            .map(Into::into)
            .map_err(to_graphql)
    }

    /// Whether the request logger module is active.
    #[graphql(guard = "RightGuard::new(Right::View)")]
    async fn request_logger_is_active(&self, ctx: &Context<'_>) -> Result<bool> {
        Ok(services(ctx)?.activation.is_active().await)
    }
}
