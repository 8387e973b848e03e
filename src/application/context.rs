//! Deployment Context Acquisition
//!
//! The migration does not reach for ambient state: it receives an artifact
//! registry and a deployer. `DeploymentContext::acquire` is the explicit
//! acquisition step - it blocks until both are wired for the configured
//! network and fails with `ContextUnavailable` when no deployer can be
//! supplied, instead of suspending on a handle that may never resolve.

use crate::config::NetworkConfig;
use crate::domain::ports::Deployer;
use crate::error::{ConveneError, ConveneResult};
use crate::infrastructure::{FsArtifactRegistry, PlanDeployer, RpcDeployer};

/// How the deployment mechanism should behave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployMode {
    /// Build the transaction but submit nothing
    DryRun,
    /// Submit the deployment to the configured node
    Broadcast,
}

/// Wired capabilities for one migration run.
pub struct DeploymentContext {
    pub artifacts: FsArtifactRegistry,
    pub deployer: Box<dyn Deployer>,
}

impl DeploymentContext {
    /// Acquire a context for the configured network.
    ///
    /// Returns [`ConveneError::ContextUnavailable`] when the configuration
    /// cannot yield a working deployer: no endpoint configured, or an
    /// endpoint scheme the transport does not speak.
    pub fn acquire(network: &NetworkConfig, mode: DeployMode) -> ConveneResult<Self> {
        let artifacts = FsArtifactRegistry::new(&network.artifacts_dir);

        let deployer: Box<dyn Deployer> = match mode {
            DeployMode::DryRun => Box::new(PlanDeployer::new(&network.name)),
            DeployMode::Broadcast => {
                if network.rpc_url.is_empty() {
                    return Err(ConveneError::ContextUnavailable {
                        network: network.name.clone(),
                        reason: "no rpc_url configured".to_string(),
                    });
                }
                if !network.rpc_url.starts_with("http://") {
                    return Err(ConveneError::ContextUnavailable {
                        network: network.name.clone(),
                        reason: format!(
                            "unsupported endpoint '{}' (only plain http is spoken)",
                            network.rpc_url
                        ),
                    });
                }
                Box::new(RpcDeployer::new(
                    &network.rpc_url,
                    &network.name,
                    network.gas_limit,
                ))
            }
        };

        Ok(Self {
            artifacts,
            deployer,
        })
    }
}

impl std::fmt::Debug for DeploymentContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeploymentContext")
            .field("artifacts", &self.artifacts)
            .field("deployer", &"<dyn Deployer>")
            .finish()
    }
}
