pub mod activation;
pub mod settings;

pub use activation::ActivationService;
pub use settings::SettingsService;
