//! Order Tool
//!
//! Hash, sign and verify matching-engine orders stored as JSON files.
//!
//! ```text
//! order-tool --chain-id 1 --contract 0x... hash order.json
//! ORDER_SIGNER_PRIVATE_KEY=0x... order-tool sign order.json > signed.json
//! order-tool --config signer.toml verify signed.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use order_signing::wallet::SigningWallet;
use order_signing::{compute_dedup_hash, Order, OrderSigner, SignerConfig};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "order-tool", version, about = "Hash, sign and verify orders")]
struct Cli {
    /// Signer config file; ORDER_* environment variables override it.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Chain ID of the signing domain.
    #[arg(long, global = true)]
    chain_id: Option<u64>,

    /// Verifying contract of the signing domain.
    #[arg(long, global = true)]
    contract: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the EIP-712 signing hash of an order.
    Hash { order: PathBuf },

    /// Sign an order and print it with its signature attached.
    Sign {
        order: PathBuf,
        /// Private key; defaults to ORDER_SIGNER_PRIVATE_KEY.
        #[arg(long)]
        key: Option<String>,
    },

    /// Verify an order's signature against its owner. Exits 1 on mismatch.
    Verify { order: PathBuf },

    /// Print the storage dedup hash of an order.
    Dedup { order: PathBuf },

    /// Print the EIP-712 typed data a wallet signs for an order.
    TypedData { order: PathBuf },
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "order_tool=info,order_signing=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<ExitCode> {
    match &cli.command {
        Command::Hash { order } => {
            let order = read_order(order)?;
            let signer = build_signer(cli)?;
            println!("{}", signer.hash_order(&order)?);
        }
        Command::Sign { order, key } => {
            let mut order = read_order(order)?;
            let signer = build_signer(cli)?;
            let wallet = match key {
                Some(key) => SigningWallet::from_private_key(key)?,
                None => SigningWallet::from_env()?,
            };

            if !order
                .user_address
                .eq_ignore_ascii_case(&wallet.address().to_string())
            {
                warn!(
                    user = %order.user_address,
                    wallet = %wallet.address(),
                    "Signing key does not control the order's userAddress; verification will fail"
                );
            }

            wallet.sign_order(&mut order, &signer)?;
            info!(wallet = %wallet.address(), "Order signed");
            println!("{}", serde_json::to_string_pretty(&order)?);
        }
        Command::Verify { order } => {
            let order = read_order(order)?;
            let signer = build_signer(cli)?;
            let valid = signer.verify_signature(&order)?;
            println!("{}", valid);
            if !valid {
                return Ok(ExitCode::from(1));
            }
        }
        Command::Dedup { order } => {
            let order = read_order(order)?;
            println!("{}", compute_dedup_hash(&order));
        }
        Command::TypedData { order } => {
            let order = read_order(order)?;
            let signer = build_signer(cli)?;
            let typed = signer.typed_data(&order)?;
            println!("{}", serde_json::to_string_pretty(&typed)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn read_order(path: &Path) -> Result<Order> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read order file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse order file {}", path.display()))
}

/// Resolve the signing domain from flags, falling back to config.
fn build_signer(cli: &Cli) -> Result<OrderSigner> {
    let config = match (cli.chain_id, cli.contract.as_ref()) {
        (Some(chain_id), Some(contract)) => SignerConfig {
            chain_id,
            verifying_contract: contract.clone(),
        },
        _ => {
            let mut config = SignerConfig::load(cli.config.as_deref())
                .context("Failed to load signer configuration")?;
            if let Some(chain_id) = cli.chain_id {
                config.chain_id = chain_id;
            }
            if let Some(contract) = &cli.contract {
                config.verifying_contract = contract.clone();
            }
            config
        }
    };

    let signer = OrderSigner::from_config(&config)?;
    info!(
        chain_id = config.chain_id,
        contract = %signer.verifying_contract(),
        "Order signing domain ready"
    );
    Ok(signer)
}
