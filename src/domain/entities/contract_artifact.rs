//! Contract Artifact Entity
//!
//! A compiled, deployable program unit: the contract's ABI plus its creation
//! bytecode. Opaque to the migration beyond its name; how it is found is the
//! concern of the [`crate::domain::ports::ArtifactRegistry`] port.

use ethers_core::abi::Abi;
use ethers_core::types::Bytes;

/// Compiled contract artifact.
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    /// Contract name, e.g. "Conference"
    pub name: String,

    /// Contract ABI, including the constructor signature when one exists
    pub abi: Abi,

    /// Creation bytecode the deployment transaction carries
    pub bytecode: Bytes,
}

impl ContractArtifact {
    pub fn new(name: impl Into<String>, abi: Abi, bytecode: Bytes) -> Self {
        Self {
            name: name.into(),
            abi,
            bytecode,
        }
    }

    /// Number of parameters the constructor declares (zero when the ABI has
    /// no explicit constructor).
    pub fn constructor_arity(&self) -> usize {
        self.abi
            .constructor()
            .map(|c| c.inputs.len())
            .unwrap_or_default()
    }
}
