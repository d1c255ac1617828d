//! Well-known identifiers of the two modules involved.
//!
//! `oxsrequestloggerremote` is this extension; `oxsrequestlogger` is the
//! request logger it manages remotely.

/// Module id of the remote-management extension.
pub const REMOTE_MODULE_ID: &str = "oxsrequestloggerremote";

/// Module id of the managed request logger.
pub const REQUEST_LOGGER_MODULE_ID: &str = "oxsrequestlogger";

/// String setting (on [`REMOTE_MODULE_ID`]) holding the pending setup
/// token. An empty value means no token is pending.
pub const SETUP_TOKEN_SETTING: &str = "oxsrequestloggerremote_SetupToken";
