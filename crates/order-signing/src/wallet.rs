//! Signing wallet for tooling and tests.
//!
//! Loads a secp256k1 private key from hex text or the environment and signs
//! orders with it. Production order flow never needs a private key; only the
//! verification path runs in the matching engine.

use std::str::FromStr;

use alloy_primitives::Address;
use alloy_signer_local::PrivateKeySigner;

use crate::signing::{sign_order, OrderSigner};
use crate::types::Order;
use crate::{Error, Result};

/// Environment variable holding the tooling private key.
pub const PRIVATE_KEY_ENV: &str = "ORDER_SIGNER_PRIVATE_KEY";

/// A private key able to sign orders.
#[derive(Clone)]
pub struct SigningWallet {
    signer: PrivateKeySigner,
}

impl SigningWallet {
    /// Load the wallet from `ORDER_SIGNER_PRIVATE_KEY`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let private_key = std::env::var(PRIVATE_KEY_ENV).map_err(|_| Error::Config {
            message: format!("{} environment variable not set", PRIVATE_KEY_ENV),
        })?;

        Self::from_private_key(&private_key)
    }

    /// Create a wallet from a 64-character hex key, optionally `0x`-prefixed.
    pub fn from_private_key(key: &str) -> Result<Self> {
        let key_clean = key.trim().trim_start_matches("0x");

        // The key itself never goes into the error.
        let signer = PrivateKeySigner::from_str(key_clean).map_err(|_| Error::SigningFailed {
            reason: "invalid private key format - expected 64 hex characters".to_string(),
        })?;

        Ok(Self { signer })
    }

    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Sign an order in place under `order_signer`'s domain.
    pub fn sign_order(&self, order: &mut Order, order_signer: &OrderSigner) -> Result<()> {
        sign_order(order, &self.signer, order_signer)
    }
}

impl std::fmt::Debug for SigningWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningWallet")
            .field("address", &self.address().to_string())
            .finish()
    }
}
