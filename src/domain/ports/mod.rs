//! Ports - trait boundaries to everything outside the domain.

mod artifact_registry;
mod deployer;

pub use artifact_registry::{ArtifactError, ArtifactRegistry};
pub use deployer::{constructor_calldata, Deployer, DeployerError, DeploymentReceipt};
