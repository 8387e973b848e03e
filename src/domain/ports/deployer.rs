//! Deployer Port
//!
//! Abstracts the deployment mechanism that provisions a contract instance on
//! the target network. The migration holds a deployer it was given and calls
//! `deploy` exactly once; whatever the deployer returns is handed back to the
//! caller unmodified.

use ethers_core::abi::Token;
use ethers_core::types::{Address, Bytes, H256};
use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::ContractArtifact;

/// Error reported by a deployment mechanism
#[derive(Error, Debug)]
pub enum DeployerError {
    /// Arguments do not match the constructor's declared parameters
    #[error("constructor argument mismatch for {contract}: {message}")]
    ConstructorMismatch { contract: String, message: String },

    /// The node exposes no unlocked account to send from
    #[error("no unlocked accounts available on the node")]
    NoAccounts,

    /// Transport-level failure talking to the node
    #[error("RPC transport error: {0}")]
    Transport(String),

    /// Error object returned by the node
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The node answered with something that is not a valid response
    #[error("unexpected RPC response: {0}")]
    InvalidResponse(String),

    /// The deployment transaction was mined but reverted
    #[error("deployment of {contract} reverted in transaction {tx_hash:?}")]
    Reverted { contract: String, tx_hash: H256 },

    /// The transaction never produced a receipt within the polling window
    #[error("timed out waiting for the deployment receipt of {tx_hash:?}")]
    ReceiptTimeout { tx_hash: H256 },
}

/// What a deployment mechanism returns for one provisioned contract.
///
/// Every layer above the deployer passes this through unmodified. On-chain
/// coordinates are absent when nothing was submitted (dry run).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentReceipt {
    /// Name of the deployed contract
    pub contract: String,

    /// Network the deployer targeted
    pub network: String,

    /// Calldata of the deployment transaction (creation bytecode followed by
    /// the ABI-encoded constructor arguments)
    pub data: Bytes,

    /// Hash of the submitted transaction, when one was submitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<H256>,

    /// Address of the created contract instance, when one was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// Trait for deployment mechanisms
///
/// Implementations:
/// - `RpcDeployer`: submits the deployment to an unlocked development node
/// - `PlanDeployer`: dry run, returns the receipt without submitting
/// - test fakes: record the call and return a canned receipt
pub trait Deployer {
    /// Provision one instance of the contract with the given positional
    /// constructor arguments. Exactly one call per migration run.
    fn deploy(
        &mut self,
        artifact: &ContractArtifact,
        args: &[Token],
    ) -> Result<DeploymentReceipt, DeployerError>;
}

/// Build the deployment calldata: creation bytecode followed by the
/// ABI-encoded constructor arguments.
///
/// Argument count and types are checked against the constructor declared in
/// the artifact's ABI; a mismatch is a [`DeployerError::ConstructorMismatch`].
pub fn constructor_calldata(
    artifact: &ContractArtifact,
    args: &[Token],
) -> Result<Bytes, DeployerError> {
    match artifact.abi.constructor() {
        Some(constructor) => constructor
            .encode_input(artifact.bytecode.to_vec(), args)
            .map(Bytes::from)
            .map_err(|e| DeployerError::ConstructorMismatch {
                contract: artifact.name.clone(),
                message: e.to_string(),
            }),
        None if args.is_empty() => Ok(artifact.bytecode.clone()),
        None => Err(DeployerError::ConstructorMismatch {
            contract: artifact.name.clone(),
            message: format!("ABI declares no constructor but {} arguments were given", args.len()),
        }),
    }
}
