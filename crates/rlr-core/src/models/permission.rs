//! Rights checked by the API and the groups that hold them.

use serde::{Deserialize, Serialize};

/// Group the API service account belongs to.
pub const API_USER_GROUP: &str = "oxsrequestlogger_api";

/// Group of shop administrators.
pub const ADMIN_GROUP: &str = "oxidadmin";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Right {
    /// Read settings and activation state.
    View,
    /// Change settings.
    Change,
    /// Activate or deactivate the request logger.
    Activate,
    /// Reset the API user's password and issue a new setup token.
    PasswordReset,
}

impl Right {
    pub const ALL: [Right; 4] = [
        Right::View,
        Right::Change,
        Right::Activate,
        Right::PasswordReset,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Right::View => "REQUEST_LOGGER_VIEW",
            Right::Change => "REQUEST_LOGGER_CHANGE",
            Right::Activate => "REQUEST_LOGGER_ACTIVATE",
            Right::PasswordReset => "OXSREQUESTLOGGER_PASSWORD_RESET",
        }
    }
}

impl std::fmt::Display for Right {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rights granted to members of `group`.
pub fn rights_for_group(group: &str) -> &'static [Right] {
    match group {
        API_USER_GROUP | ADMIN_GROUP => &Right::ALL,
        _ => &[],
    }
}

/// Whether any of `groups` grants `right`.
pub fn groups_grant<S: AsRef<str>>(groups: &[S], right: Right) -> bool {
    groups
        .iter()
        .any(|g| rights_for_group(g.as_ref()).contains(&right))
}
