//! SurrealDB repository implementations.

mod module_activation;
mod module_setting;
mod service_account;

pub use module_activation::SurrealModuleActivationRepository;
pub use module_setting::SurrealModuleSettingRepository;
pub use service_account::SurrealServiceAccountRepository;
