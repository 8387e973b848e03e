//! Application layer - one-shot orchestration over the domain ports.

mod context;
mod migrate;

pub use context::{DeployMode, DeploymentContext};
pub use migrate::{execute, execute_with};
