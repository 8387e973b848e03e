//! Configuration loading and types.

mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{load_with_warnings, with_env_overrides, ConfigWarning};
pub use types::{Config, NetworkConfig, CONFIG_FILE_NAME};

// Re-export the named deployment record from the domain layer
pub use crate::domain::value_objects::ConferenceConfig;
