//! Conference Deployment Migration
//!
//! Provisions one Conference instance: look the artifact up by name, flatten
//! the parameters into the constructor's positional order, invoke the
//! deployer once. The deployer's return value is handed back unmodified, and
//! so are its errors.

use crate::domain::ports::{ArtifactRegistry, Deployer, DeploymentReceipt};
use crate::domain::value_objects::DeploymentParameters;
use crate::error::ConveneResult;

/// Name of the contract this migration deploys.
pub const CONTRACT: &str = "Conference";

/// Run the migration. Exactly one deploy call per invocation.
pub fn run(
    artifacts: &dyn ArtifactRegistry,
    deployer: &mut dyn Deployer,
    params: &DeploymentParameters,
) -> ConveneResult<DeploymentReceipt> {
    let artifact = artifacts.require(CONTRACT)?;
    let receipt = deployer.deploy(&artifact, &params.to_positional_args())?;
    Ok(receipt)
}
