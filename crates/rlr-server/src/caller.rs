//! Caller identification from the `Authorization` header.
//!
//! - `Basic` with the service account's login and claimed password
//!   authenticates as the service account.
//! - `Bearer` with the configured admin key authenticates as a shop
//!   administrator.
//!
//! Anything else, including wrong credentials, yields an anonymous
//! caller.

use axum::http::{HeaderMap, header};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use rlr_auth::password;
use rlr_core::models::permission::{self, ADMIN_GROUP, Right};
use rlr_core::repository::ServiceAccountRepository;
use subtle::ConstantTimeEq;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caller {
    Anonymous,
    ServiceAccount { username: String, groups: Vec<String> },
    Administrator,
}

impl Caller {
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Caller::Anonymous)
    }

    pub fn has_right(&self, right: Right) -> bool {
        match self {
            Caller::Anonymous => false,
            Caller::ServiceAccount { groups, .. } => {
                permission::groups_grant(groups.as_slice(), right)
            }
            Caller::Administrator => permission::groups_grant(&[ADMIN_GROUP], right),
        }
    }
}

/// Resolves callers against the service account store and the admin
/// key.
pub struct Authenticator<'a, A: ServiceAccountRepository> {
    pub accounts: &'a A,
    pub admin_api_key: Option<&'a str>,
    pub pepper: Option<&'a str>,
}

impl<A: ServiceAccountRepository> Authenticator<'_, A> {
    pub async fn identify(&self, headers: &HeaderMap) -> Caller {
        let Some(value) = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
        else {
            return Caller::Anonymous;
        };

        if let Some(key) = value.strip_prefix("Bearer ") {
            return self.admin(key);
        }
        if let Some(encoded) = value.strip_prefix("Basic ") {
            return self.basic(encoded).await;
        }
        Caller::Anonymous
    }

    fn admin(&self, supplied: &str) -> Caller {
        match self.admin_api_key {
            Some(key) if bool::from(key.as_bytes().ct_eq(supplied.as_bytes())) => {
                Caller::Administrator
            }
            _ => Caller::Anonymous,
        }
    }

    async fn basic(&self, encoded: &str) -> Caller {
        let Some((username, secret)) = BASE64
            .decode(encoded)
            .ok()
            .and_then(|raw| String::from_utf8(raw).ok())
            .and_then(|s| s.split_once(':').map(|(u, p)| (u.to_string(), p.to_string())))
        else {
            return Caller::Anonymous;
        };

        let account = match self.accounts.get_by_username(&username).await {
            Ok(account) => account,
            Err(e) => {
                debug!(error = %e, "Basic auth for unknown account");
                return Caller::Anonymous;
            }
        };

        match password::verify_password(&secret, &account.password_hash, self.pepper) {
            Ok(true) => Caller::ServiceAccount {
                username: account.username,
                groups: account.groups,
            },
            Ok(false) => Caller::Anonymous,
            Err(e) => {
                debug!(error = %e, "Basic auth verification failed");
                Caller::Anonymous
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_holds_no_rights() {
        for right in Right::ALL {
            assert!(!Caller::Anonymous.has_right(right));
        }
        assert!(!Caller::Anonymous.is_authenticated());
    }

    #[test]
    fn administrator_holds_every_right() {
        for right in Right::ALL {
            assert!(Caller::Administrator.has_right(right));
        }
    }

    #[test]
    fn service_account_rights_follow_groups() {
        let api = Caller::ServiceAccount {
            username: "api".into(),
            groups: vec!["oxsrequestlogger_api".into()],
        };
        assert!(api.has_right(Right::Change));

        let customer = Caller::ServiceAccount {
            username: "customer".into(),
            groups: vec!["oxidcustomer".into()],
        };
        assert!(customer.is_authenticated());
        assert!(!customer.has_right(Right::View));
    }
}
