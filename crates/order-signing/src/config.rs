//! Signer configuration: the chain and verifying contract an
//! [`OrderSigner`](crate::OrderSigner) is bound to.

use std::env;
use std::path::Path;

use alloy_primitives::Address;
use serde::Deserialize;

use crate::signing::order_hash::parse_address;
use crate::{Error, Result};

/// Environment prefix for configuration keys (`ORDER_CHAIN_ID`, ...).
pub const ENV_PREFIX: &str = "ORDER";

/// Domain configuration for one deployment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignerConfig {
    pub chain_id: u64,
    /// Verifying contract address as hex text.
    pub verifying_contract: String,
}

impl SignerConfig {
    /// Load configuration from environment variables.
    #[allow(clippy::result_large_err)]
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let chain_id = env::var("ORDER_CHAIN_ID")
            .map_err(|_| Error::Config {
                message: "ORDER_CHAIN_ID environment variable not set".to_string(),
            })?
            .parse::<u64>()
            .map_err(|e| Error::Config {
                message: format!("ORDER_CHAIN_ID is not a valid chain id: {}", e),
            })?;

        let verifying_contract = env::var("ORDER_VERIFYING_CONTRACT").map_err(|_| Error::Config {
            message: "ORDER_VERIFYING_CONTRACT environment variable not set".to_string(),
        })?;

        let config = Self {
            chain_id,
            verifying_contract,
        };
        config
            .verifying_contract_address()
            .map_err(|e| Error::Config {
                message: format!("ORDER_VERIFYING_CONTRACT is not a valid address: {}", e),
            })?;
        Ok(config)
    }

    /// Load configuration from an optional file, overlaid by `ORDER_*`
    /// environment variables.
    #[allow(clippy::result_large_err)]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        let settings = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.verifying_contract_address()?;
        Ok(config)
    }

    /// Parse the verifying contract into a 20-byte address.
    pub fn verifying_contract_address(&self) -> Result<Address> {
        parse_address("verifyingContract", &self.verifying_contract)
    }
}
