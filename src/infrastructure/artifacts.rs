//! Filesystem Artifact Registry
//!
//! Resolves contract names against compiler output on disk: a directory of
//! `<Name>.json` files, each carrying the contract's ABI and creation
//! bytecode (the layout the Solidity toolchain writes to `build/contracts`).

use std::fs;
use std::path::{Path, PathBuf};

use ethers_core::abi::Abi;
use ethers_core::types::Bytes;
use serde::Deserialize;

use crate::domain::entities::ContractArtifact;
use crate::domain::ports::{ArtifactError, ArtifactRegistry};

/// Subset of the compiled artifact JSON that deployment needs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArtifactFile {
    contract_name: Option<String>,
    abi: Abi,
    bytecode: Bytes,
}

/// Artifact registry backed by a build directory.
#[derive(Debug, Clone)]
pub struct FsArtifactRegistry {
    dir: PathBuf,
}

impl FsArtifactRegistry {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory this registry resolves against.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArtifactRegistry for FsArtifactRegistry {
    fn require(&self, name: &str) -> Result<ContractArtifact, ArtifactError> {
        let path = self.dir.join(format!("{name}.json"));
        if !path.is_file() {
            return Err(ArtifactError::NotFound {
                name: name.to_string(),
                searched: self.dir.clone(),
            });
        }

        let content = fs::read_to_string(&path)?;
        let parsed: ArtifactFile =
            serde_json::from_str(&content).map_err(|e| ArtifactError::Invalid {
                path: path.clone(),
                message: e.to_string(),
            })?;

        if parsed.bytecode.is_empty() {
            return Err(ArtifactError::Invalid {
                path,
                message: "artifact carries no creation bytecode (abstract contract?)".to_string(),
            });
        }

        Ok(ContractArtifact::new(
            parsed.contract_name.unwrap_or_else(|| name.to_string()),
            parsed.abi,
            parsed.bytecode,
        ))
    }
}
