//! Request Logger Remote: shared models, error types and the
//! repository traits through which the host platform's storage is
//! reached.

pub mod error;
pub mod models;
pub mod repository;

pub use error::{RlrError, RlrResult};
