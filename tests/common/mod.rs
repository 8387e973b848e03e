//! Common test utilities for Convene integration tests.
//!
//! Provides an isolated project directory (config + compiled artifact
//! fixture) and a helper to run the compiled CLI inside it.

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Compiled artifact fixture with the Conference constructor signature and a
/// token amount of creation bytecode.
pub const CONFERENCE_ARTIFACT: &str = r#"{
    "contractName": "Conference",
    "abi": [{
        "type": "constructor",
        "stateMutability": "nonpayable",
        "inputs": [
            {"name": "_name", "type": "string"},
            {"name": "_deposit", "type": "uint256"},
            {"name": "_limitOfParticipants", "type": "uint256"},
            {"name": "_coolingPeriod", "type": "uint256"},
            {"name": "_encryption", "type": "string"}
        ]
    }],
    "bytecode": "0x608060405234801561001057600080fd5b50"
}"#;

/// Result of running the convene CLI
#[derive(Debug)]
pub struct CliResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated project directory with a config file and artifact fixture.
pub struct TestProject {
    pub root: TempDir,
}

impl TestProject {
    /// Project with the shipped defaults and a Conference artifact.
    pub fn new() -> Self {
        Self::with_config(
            r#"
[conference]
name = "Test"
deposit = "0.01"
limit_of_participants = 10
cooling_period = 604800
encryption = ""
"#,
        )
    }

    /// Project with custom config content and a Conference artifact.
    pub fn with_config(config: &str) -> Self {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("convene.toml"), config).unwrap();
        let artifacts = root.path().join("build/contracts");
        fs::create_dir_all(&artifacts).unwrap();
        fs::write(artifacts.join("Conference.json"), CONFERENCE_ARTIFACT).unwrap();
        Self { root }
    }

    /// Remove the artifact fixture (to exercise missing-artifact paths).
    pub fn remove_artifact(&self) {
        fs::remove_file(self.path().join("build/contracts/Conference.json")).unwrap();
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Run the convene CLI from the project root.
    pub fn run(&self, args: &[&str]) -> CliResult {
        let output = Command::new(env!("CARGO_BIN_EXE_convene"))
            .current_dir(self.path())
            .args(args)
            .env_remove("CONVENE_RPC_URL")
            .env_remove("CONVENE_ARTIFACTS_DIR")
            .output()
            .expect("Failed to execute convene");

        CliResult {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
