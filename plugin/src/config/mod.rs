//! Plugin configuration: defaults, per-kind overrides, validation.

pub mod defaults;
pub mod options;
pub mod settings;
pub mod validation;

pub use options::{QrOptions, QrOptionsOverride};
pub use settings::PluginSettings;
pub use validation::validate;

/// Errors loading plugin settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}
