//! Artifact Registry Port
//!
//! Resolves a contract name to its compiled artifact. The original migration
//! framework exposed this as an ambient `artifacts` global; here it is an
//! explicit capability injected into the migration.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::entities::ContractArtifact;

/// Error during artifact resolution
#[derive(Error, Debug)]
pub enum ArtifactError {
    /// No artifact exists under the requested name
    #[error("unknown contract artifact '{name}' (searched {searched})")]
    NotFound { name: String, searched: PathBuf },

    /// The artifact file exists but is not a usable compiled artifact
    #[error("invalid contract artifact at {path}: {message}")]
    Invalid { path: PathBuf, message: String },

    /// IO error while reading the artifact
    #[error("IO error reading artifact: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for contract artifact lookup
///
/// Implementations resolve a contract name to a compiled artifact:
/// - `FsArtifactRegistry`: reads compiler output from a build directory
/// - test fakes: serve artifacts from memory
pub trait ArtifactRegistry {
    /// Resolve a contract by name, failing when it cannot be found or read.
    fn require(&self, name: &str) -> Result<ContractArtifact, ArtifactError>;
}
