//! Convene CLI - deployment migration tool for the Conference contract
//!
//! Usage: convene <COMMAND>
//!
//! Commands:
//!   deploy  Run the deployment migration against the configured network
//!   plan    Preview the deployment transaction without submitting it
//!   check   Validate configuration and compiled artifacts

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use convene::application::{self, DeployMode};
use convene::config::{load_with_warnings, ConfigWarning, CONFIG_FILE_NAME};
use convene::domain::ports::{constructor_calldata, ArtifactRegistry};
use convene::infrastructure::FsArtifactRegistry;
use convene::DeploymentParameters;

/// Convene - deployment migration tool for the Conference contract
#[derive(Parser, Debug)]
#[command(name = "convene")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format for CI
    #[arg(long, default_value = "false")]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the deployment migration against the configured network
    Deploy {
        /// Path to the configuration file
        #[arg(short, long, default_value = CONFIG_FILE_NAME)]
        config: PathBuf,

        /// Dry run - build the transaction but submit nothing
        #[arg(long)]
        dry_run: bool,
    },

    /// Preview the deployment transaction without submitting it
    Plan {
        /// Path to the configuration file
        #[arg(short, long, default_value = CONFIG_FILE_NAME)]
        config: PathBuf,
    },

    /// Validate configuration and compiled artifacts (exits non-zero on errors)
    Check {
        /// Path to the configuration file
        #[arg(short, long, default_value = CONFIG_FILE_NAME)]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Deploy { config, dry_run } => cmd_deploy(&config, dry_run, cli.json),
        Commands::Plan { config } => cmd_plan(&config, cli.json),
        Commands::Check { config } => cmd_check(&config, cli.json),
    }
}

fn print_warnings(warnings: &[ConfigWarning], json: bool) {
    if json {
        return;
    }
    for warning in warnings {
        match &warning.suggestion {
            Some(suggestion) => println!(
                "⚠ Unknown config key '{}' (did you mean '{}'?)",
                warning.key, suggestion
            ),
            None => println!("⚠ Unknown config key '{}'", warning.key),
        }
    }
}

fn cmd_deploy(config_path: &PathBuf, dry_run: bool, json: bool) -> Result<()> {
    let (config, warnings) = load_with_warnings(config_path)?;
    print_warnings(&warnings, json);

    let params = DeploymentParameters::resolve(&config.conference)?;

    if !json {
        println!("🚀 Convene Deploy");
        println!("Network: {}", config.network.name);
        if dry_run {
            println!("Mode: Dry run");
        }
        println!();
        println!("Conference parameters:");
        println!("  name:                  {}", params.name);
        println!(
            "  deposit:               {} wei ({} ether)",
            params.deposit, config.conference.deposit
        );
        println!("  limit_of_participants: {}", params.limit_of_participants);
        println!("  cooling_period:        {}s", params.cooling_period);
        println!("  encryption:            {:?}", params.encryption);
        println!();
    }

    let mode = if dry_run {
        DeployMode::DryRun
    } else {
        DeployMode::Broadcast
    };
    let receipt = application::execute(&config, mode)?;

    if json {
        let output = serde_json::json!({
            "event": "deploy",
            "contract": receipt.contract,
            "network": receipt.network,
            "dry_run": dry_run,
            "transaction_hash": receipt.transaction_hash,
            "address": receipt.address,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else if dry_run {
        println!("✓ Would deploy {} ({} bytes of calldata)", receipt.contract, receipt.data.len());
    } else {
        println!("✓ Deployed {}", receipt.contract);
        if let Some(tx_hash) = receipt.transaction_hash {
            println!("  transaction: {:?}", tx_hash);
        }
        if let Some(address) = receipt.address {
            println!("  address:     {:?}", address);
        }
    }

    Ok(())
}

fn cmd_plan(config_path: &PathBuf, json: bool) -> Result<()> {
    let (config, warnings) = load_with_warnings(config_path)?;
    print_warnings(&warnings, json);

    let params = DeploymentParameters::resolve(&config.conference)?;
    let receipt = application::execute(&config, DeployMode::DryRun)?;

    if json {
        let output = serde_json::json!({
            "event": "plan",
            "contract": receipt.contract,
            "network": receipt.network,
            "args": [
                params.name,
                params.deposit.to_string(),
                params.limit_of_participants,
                params.cooling_period,
                params.encryption,
            ],
            "data": receipt.data,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("📋 Convene Plan");
        println!("Network: {}", receipt.network);
        println!();
        println!("Would deploy {} with constructor arguments:", receipt.contract);
        println!("  [0] name:                  {}", params.name);
        println!("  [1] deposit:               {}", params.deposit);
        println!("  [2] limit_of_participants: {}", params.limit_of_participants);
        println!("  [3] cooling_period:        {}", params.cooling_period);
        println!("  [4] encryption:            {:?}", params.encryption);
        println!();
        println!("Calldata: {} bytes", receipt.data.len());
    }

    Ok(())
}

fn cmd_check(config_path: &PathBuf, json: bool) -> Result<()> {
    let mut passes = 0u32;
    let mut warning_count = 0u32;
    let mut errors = 0u32;

    let report = |status: &str, message: String| {
        if !json {
            println!("  {} {}", status, message);
        }
    };

    if !json {
        println!("🩺 Convene Check");
        println!("Config: {}", config_path.display());
        println!();
    }

    let (config, warnings) = load_with_warnings(config_path)?;
    passes += 1;
    report("✓", "configuration parses".to_string());

    for warning in &warnings {
        warning_count += 1;
        match &warning.suggestion {
            Some(suggestion) => report(
                "⚠",
                format!(
                    "unknown config key '{}' (did you mean '{}'?)",
                    warning.key, suggestion
                ),
            ),
            None => report("⚠", format!("unknown config key '{}'", warning.key)),
        }
    }

    // Deposit must convert with 18-decimal fixed point.
    let params = match DeploymentParameters::resolve(&config.conference) {
        Ok(params) => {
            passes += 1;
            report(
                "✓",
                format!(
                    "deposit {} ether = {} wei",
                    config.conference.deposit, params.deposit
                ),
            );
            Some(params)
        }
        Err(e) => {
            errors += 1;
            report("✗", e.to_string());
            None
        }
    };

    if config.conference.limit_of_participants == 0 {
        warning_count += 1;
        report("⚠", "limit_of_participants is 0 - nobody can register".to_string());
    } else {
        passes += 1;
        report(
            "✓",
            format!(
                "limit_of_participants is {}",
                config.conference.limit_of_participants
            ),
        );
    }

    // The compiled artifact must exist and accept the five arguments.
    let registry = FsArtifactRegistry::new(&config.network.artifacts_dir);
    match registry.require(convene::migrations::deploy_conference::CONTRACT) {
        Ok(artifact) => {
            passes += 1;
            report(
                "✓",
                format!(
                    "artifact {} found ({} constructor parameters)",
                    artifact.name,
                    artifact.constructor_arity()
                ),
            );
            if let Some(params) = &params {
                match constructor_calldata(&artifact, &params.to_positional_args()) {
                    Ok(_) => {
                        passes += 1;
                        report("✓", "constructor arguments match the ABI".to_string());
                    }
                    Err(e) => {
                        errors += 1;
                        report("✗", e.to_string());
                    }
                }
            }
        }
        Err(e) => {
            errors += 1;
            report("✗", e.to_string());
        }
    }

    if json {
        let output = serde_json::json!({
            "event": "check",
            "passes": passes,
            "warnings": warning_count,
            "errors": errors,
            "success": errors == 0,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!();
        println!(
            "Summary: {} passed, {} warnings, {} errors",
            passes, warning_count, errors
        );
    }

    if errors > 0 {
        std::process::exit(1);
    }

    Ok(())
}
