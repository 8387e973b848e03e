//! Convene - deployment migration tool for the Conference contract
//!
//! Convene reads a declarative configuration file, flattens the named
//! Conference parameters into the contract constructor's positional argument
//! order, and hands them to a deployment context exactly once. The deployment
//! mechanism itself sits behind the [`domain::ports::Deployer`] port: a
//! JSON-RPC adapter provisions the contract on an unlocked development node,
//! and a plan adapter previews the transaction without touching a chain.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod migrations;

// Re-exports for convenience
pub use config::{Config, ConferenceConfig, NetworkConfig};
pub use domain::entities::ContractArtifact;
pub use domain::ports::{ArtifactRegistry, Deployer, DeploymentReceipt};
pub use domain::value_objects::{DeploymentParameters, Wei};
pub use error::{ConveneError, ConveneResult};
