//! Plan Deployer
//!
//! Dry-run deployment mechanism: builds the exact calldata a real deployment
//! would send and returns the receipt without touching any chain. On-chain
//! coordinates stay empty.

use ethers_core::abi::Token;

use crate::domain::entities::ContractArtifact;
use crate::domain::ports::{constructor_calldata, Deployer, DeployerError, DeploymentReceipt};

/// Deployer that previews instead of submitting.
#[derive(Debug, Clone)]
pub struct PlanDeployer {
    network: String,
}

impl PlanDeployer {
    pub fn new(network: impl Into<String>) -> Self {
        Self {
            network: network.into(),
        }
    }
}

impl Deployer for PlanDeployer {
    fn deploy(
        &mut self,
        artifact: &ContractArtifact,
        args: &[Token],
    ) -> Result<DeploymentReceipt, DeployerError> {
        let data = constructor_calldata(artifact, args)?;
        Ok(DeploymentReceipt {
            contract: artifact.name.clone(),
            network: self.network.clone(),
            data,
            transaction_hash: None,
            address: None,
        })
    }
}
