//! Domain models for Request Logger Remote.
//!
//! These are the core types shared across all crates.

pub mod module;
pub mod permission;
pub mod service_account;
pub mod setting;
