//! Migrate Use Case
//!
//! One-shot orchestration: resolve the named configuration into deployment
//! parameters, acquire the deployment context, run the migration. Every
//! failure propagates with `?`; the receipt comes back exactly as the
//! deployer produced it.

use crate::application::context::{DeployMode, DeploymentContext};
use crate::config::Config;
use crate::domain::ports::{ArtifactRegistry, Deployer, DeploymentReceipt};
use crate::domain::value_objects::{ConferenceConfig, DeploymentParameters};
use crate::error::ConveneResult;
use crate::migrations;

/// Run the deployment migration against the configured network.
pub fn execute(config: &Config, mode: DeployMode) -> ConveneResult<DeploymentReceipt> {
    let mut ctx = DeploymentContext::acquire(&config.network, mode)?;
    execute_with(&ctx.artifacts, ctx.deployer.as_mut(), &config.conference)
}

/// Run the deployment migration with explicitly supplied capabilities.
///
/// This is the seam tests use to substitute fakes for the registry and the
/// deployment mechanism.
pub fn execute_with(
    artifacts: &dyn ArtifactRegistry,
    deployer: &mut dyn Deployer,
    conference: &ConferenceConfig,
) -> ConveneResult<DeploymentReceipt> {
    let params = DeploymentParameters::resolve(conference)?;
    migrations::deploy_conference::run(artifacts, deployer, &params)
}
