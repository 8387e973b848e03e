//! JSON-RPC Deployer
//!
//! Submits the deployment transaction to a development node with unlocked
//! accounts (`eth_accounts` / `eth_sendTransaction`), then polls for the
//! receipt. Node-side failures (no accounts, rejected transaction, reverted
//! constructor) surface as [`DeployerError`] values; nothing is retried
//! beyond the bounded receipt poll.

use std::thread;
use std::time::Duration;

use ethers_core::abi::Token;
use ethers_core::types::{Address, H256, U256};
use serde_json::{json, Value};

use crate::domain::entities::ContractArtifact;
use crate::domain::ports::{constructor_calldata, Deployer, DeployerError, DeploymentReceipt};

const RECEIPT_POLL_ATTEMPTS: u32 = 40;
const RECEIPT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Deployer backed by a JSON-RPC endpoint.
pub struct RpcDeployer {
    client: reqwest::blocking::Client,
    url: String,
    network: String,
    gas_limit: U256,
    next_id: u64,
}

impl RpcDeployer {
    pub fn new(url: impl Into<String>, network: impl Into<String>, gas_limit: u64) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            url: url.into(),
            network: network.into(),
            gas_limit: U256::from(gas_limit),
            next_id: 0,
        }
    }

    /// One JSON-RPC round trip. Node error objects become `DeployerError::Rpc`.
    fn call(&mut self, method: &str, params: Value) -> Result<Value, DeployerError> {
        self.next_id += 1;
        let body = json!({
            "jsonrpc": "2.0",
            "id": self.next_id,
            "method": method,
            "params": params,
        });

        let response: Value = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .map_err(|e| DeployerError::Transport(e.to_string()))?
            .json()
            .map_err(|e| DeployerError::Transport(e.to_string()))?;

        if let Some(error) = response.get("error").filter(|e| !e.is_null()) {
            return Err(DeployerError::Rpc {
                code: error.get("code").and_then(Value::as_i64).unwrap_or_default(),
                message: error
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown error")
                    .to_string(),
            });
        }

        Ok(response.get("result").cloned().unwrap_or(Value::Null))
    }

    fn sender_account(&mut self) -> Result<Address, DeployerError> {
        let result = self.call("eth_accounts", json!([]))?;
        let accounts: Vec<Address> = serde_json::from_value(result)
            .map_err(|e| DeployerError::InvalidResponse(e.to_string()))?;
        accounts.into_iter().next().ok_or(DeployerError::NoAccounts)
    }

    fn wait_for_receipt(
        &mut self,
        tx_hash: H256,
        contract: &str,
    ) -> Result<Address, DeployerError> {
        for attempt in 0..RECEIPT_POLL_ATTEMPTS {
            if attempt > 0 {
                thread::sleep(RECEIPT_POLL_INTERVAL);
            }

            let receipt = self.call("eth_getTransactionReceipt", json!([tx_hash]))?;
            if receipt.is_null() {
                continue;
            }

            // Post-Byzantium receipts carry a status field; absent one, the
            // created address is the only signal we have.
            if receipt.get("status").and_then(Value::as_str) == Some("0x0") {
                return Err(DeployerError::Reverted {
                    contract: contract.to_string(),
                    tx_hash,
                });
            }

            let address: Address =
                serde_json::from_value(receipt.get("contractAddress").cloned().unwrap_or(Value::Null))
                    .map_err(|e| {
                        DeployerError::InvalidResponse(format!(
                            "receipt without contract address: {e}"
                        ))
                    })?;
            return Ok(address);
        }

        Err(DeployerError::ReceiptTimeout { tx_hash })
    }
}

impl Deployer for RpcDeployer {
    fn deploy(
        &mut self,
        artifact: &ContractArtifact,
        args: &[Token],
    ) -> Result<DeploymentReceipt, DeployerError> {
        let data = constructor_calldata(artifact, args)?;
        let from = self.sender_account()?;

        let result = self.call(
            "eth_sendTransaction",
            json!([{
                "from": from,
                "data": data,
                "gas": self.gas_limit,
            }]),
        )?;
        let tx_hash: H256 = serde_json::from_value(result)
            .map_err(|e| DeployerError::InvalidResponse(format!("bad transaction hash: {e}")))?;

        let address = self.wait_for_receipt(tx_hash, &artifact.name)?;

        Ok(DeploymentReceipt {
            contract: artifact.name.clone(),
            network: self.network.clone(),
            data,
            transaction_hash: Some(tx_hash),
            address: Some(address),
        })
    }
}
