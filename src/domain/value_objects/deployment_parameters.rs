//! Deployment Parameters Value Object
//!
//! The named Conference configuration record and its flattening into the
//! constructor's positional argument list. The constructor takes arguments
//! by position, not by name, so the record-to-positional mapping lives in
//! exactly one place: [`DeploymentParameters::to_positional_args`].
//! Reordering fields on the named record cannot change the emitted order.

use ethers_core::abi::Token;
use ethers_core::types::U256;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Wei;
use crate::error::{ConveneError, ConveneResult};

/// Named configuration record for one Conference deployment.
///
/// Field values default to the shipped deployment: a "Test" conference with a
/// 0.01 ether deposit, 10 participants, and a cooling period of one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConferenceConfig {
    /// Display name of the deployed conference
    pub name: String,

    /// Participant deposit as a decimal ether string (e.g. "0.01")
    pub deposit: String,

    /// Maximum number of participants
    pub limit_of_participants: u64,

    /// Cooling period in seconds before the owner may clear the contract
    pub cooling_period: u64,

    /// Optional encryption key material; empty when unused
    pub encryption: String,
}

impl Default for ConferenceConfig {
    fn default() -> Self {
        Self {
            name: "Test".to_string(),
            deposit: "0.01".to_string(),
            limit_of_participants: 10,
            cooling_period: 60 * 60 * 24 * 7,
            encryption: String::new(),
        }
    }
}

/// Ordered constructor arguments for one Conference deployment.
///
/// Transient: constructed once per run, consumed by a single deploy call,
/// then discarded. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentParameters {
    pub name: String,
    pub deposit: Wei,
    pub limit_of_participants: u64,
    pub cooling_period: u64,
    pub encryption: String,
}

impl DeploymentParameters {
    /// Resolve the named record into deployable values.
    ///
    /// The deposit is converted from its decimal ether form into wei
    /// (18-decimal fixed point). A malformed amount surfaces as
    /// [`ConveneError::InvalidAmount`]; nothing is caught here.
    pub fn resolve(config: &ConferenceConfig) -> ConveneResult<Self> {
        let deposit =
            Wei::from_ether(&config.deposit).map_err(|source| ConveneError::InvalidAmount {
                value: config.deposit.clone(),
                source,
            })?;

        Ok(Self {
            name: config.name.clone(),
            deposit,
            limit_of_participants: config.limit_of_participants,
            cooling_period: config.cooling_period,
            encryption: config.encryption.clone(),
        })
    }

    /// Flatten into the constructor's positional argument list.
    ///
    /// Position is the contract constructor's declared parameter order:
    /// `(name, deposit, limitOfParticipants, coolingPeriod, encryption)`.
    /// This is the only place that order is encoded.
    pub fn to_positional_args(&self) -> Vec<Token> {
        vec![
            Token::String(self.name.clone()),
            Token::Uint(self.deposit.as_u256()),
            Token::Uint(U256::from(self.limit_of_participants)),
            Token::Uint(U256::from(self.cooling_period)),
            Token::String(self.encryption.clone()),
        ]
    }
}
