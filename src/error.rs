//! Error types for Convene
//!
//! Library errors use `thiserror`; the CLI edge wraps them in `anyhow`.
//! External failures (unit conversion, artifact resolution, deployment)
//! are propagated unmodified in meaning, never swallowed locally.

use std::path::PathBuf;

use ethers_core::utils::ConversionError;
use thiserror::Error;

use crate::domain::ports::{ArtifactError, DeployerError};

/// Result type alias for Convene operations
pub type ConveneResult<T> = Result<T, ConveneError>;

/// Main error type for Convene operations
#[derive(Error, Debug)]
pub enum ConveneError {
    /// Deposit amount did not parse as a decimal currency amount
    #[error("invalid deposit amount '{value}': {source}")]
    InvalidAmount {
        value: String,
        #[source]
        source: ConversionError,
    },

    /// Artifact resolution failure (unknown name, unreadable file, bad JSON)
    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    /// Failure reported by the deployment mechanism
    #[error(transparent)]
    Deployer(#[from] DeployerError),

    /// No deployment context could be supplied for the configured network
    #[error("no deployment context available for network '{network}': {reason}")]
    ContextUnavailable { network: String, reason: String },

    /// Configuration file did not parse
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Configuration file not found
    #[error("configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
