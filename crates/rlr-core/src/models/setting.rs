//! Request logger settings managed over the API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const LOG_LEVEL: &str = "oxsrequestlogger_log-level";
pub const LOG_FRONTEND: &str = "oxsrequestlogger_log-frontend";
pub const LOG_ADMIN: &str = "oxsrequestlogger_log-admin";
pub const REDACT: &str = "oxsrequestlogger_redact";
pub const REDACT_ALL_VALUES: &str = "oxsrequestlogger_redact-all-values";

/// Storage type of a module setting, named as the host platform names
/// them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SettingKind {
    Select,
    Bool,
    Arr,
}

impl SettingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKind::Select => "select",
            SettingKind::Bool => "bool",
            SettingKind::Arr => "arr",
        }
    }
}

/// Name and type of one managed setting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettingType {
    pub name: String,
    pub kind: SettingKind,
}

/// Every setting exposed by the API, in display order.
pub const MANAGED_SETTINGS: [(&str, SettingKind); 5] = [
    (LOG_LEVEL, SettingKind::Select),
    (LOG_FRONTEND, SettingKind::Bool),
    (LOG_ADMIN, SettingKind::Bool),
    (REDACT, SettingKind::Arr),
    (REDACT_ALL_VALUES, SettingKind::Bool),
];

/// A named setting together with its current value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Setting {
    String { name: String, value: String },
    Boolean { name: String, value: bool },
    Collection { name: String, value: Vec<String> },
}

impl Setting {
    pub fn name(&self) -> &str {
        match self {
            Setting::String { name, .. }
            | Setting::Boolean { name, .. }
            | Setting::Collection { name, .. } => name,
        }
    }

    /// Render the value as the API transports it: collections as a JSON
    /// array string, booleans as `true`/`false`.
    pub fn value_string(&self) -> String {
        match self {
            Setting::String { value, .. } => value.clone(),
            Setting::Boolean { value, .. } => value.to_string(),
            Setting::Collection { value, .. } => {
                serde_json::to_string(value).unwrap_or_else(|_| "[]".into())
            }
        }
    }
}

/// Parse a redaction list transported as a JSON-encoded array.
///
/// Returns `None` unless `raw` is a JSON array. String items are kept
/// as they are; any other item is stored as its JSON text.
pub fn parse_collection(raw: &str) -> Option<Vec<String>> {
    match serde_json::from_str::<Value>(raw).ok()? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => s,
                    other => other.to_string(),
                })
                .collect(),
        ),
        _ => None,
    }
}
