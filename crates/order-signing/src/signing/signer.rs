//! Order hashing, signature verification and signing.
//!
//! An [`OrderSigner`] is bound to one (chain, verifying contract) pair and is
//! immutable after construction, so one instance can be shared across threads.

use alloy_primitives::{Address, B256, U256};
use alloy_signer_local::PrivateKeySigner;
use tracing::{debug, warn};

use super::domain::Eip712Domain;
use super::order_hash::{parse_address, struct_hash, typed_data_hash};
use super::primitives::{ecdsa_sign, public_key_to_address, recover_public_key};
use super::recovery::{decode_signature, encode_signature};
use super::typed_data::TypedData;
use crate::config::SignerConfig;
use crate::types::Order;
use crate::Result;

/// Order hasher and signature verifier for one EIP-712 domain.
#[derive(Debug, Clone)]
pub struct OrderSigner {
    domain: Eip712Domain,
}

impl OrderSigner {
    /// Create a signer bound to a chain and verifying contract.
    pub fn new(chain_id: U256, verifying_contract: Address) -> Self {
        Self {
            domain: Eip712Domain::new(chain_id, verifying_contract),
        }
    }

    /// Create a signer from loaded configuration.
    pub fn from_config(config: &SignerConfig) -> Result<Self> {
        let verifying_contract = config.verifying_contract_address()?;
        Ok(Self::new(U256::from(config.chain_id), verifying_contract))
    }

    pub fn chain_id(&self) -> U256 {
        self.domain.chain_id
    }

    pub fn verifying_contract(&self) -> Address {
        self.domain.verifying_contract
    }

    pub fn domain_separator(&self) -> B256 {
        self.domain.separator()
    }

    /// The EIP-712 struct hash of an order, before domain binding.
    pub fn struct_hash(&self, order: &Order) -> Result<B256> {
        struct_hash(order)
    }

    /// The EIP-712 signing hash of an order.
    pub fn hash_order(&self, order: &Order) -> Result<B256> {
        let digest = typed_data_hash(self.domain.separator(), struct_hash(order)?);
        debug!(order_hash = %digest, user = %order.user_address, "Computed order signing hash");
        Ok(digest)
    }

    /// Recover the address that signed an order.
    pub fn recover_signer(&self, order: &Order) -> Result<Address> {
        let digest = self.hash_order(order)?;
        let signature = decode_signature(&order.signature).inspect_err(|e| {
            warn!(user = %order.user_address, error = %e, "Malformed order signature");
        })?;

        let public_key = recover_public_key(&digest, &signature).inspect_err(|e| {
            warn!(user = %order.user_address, error = %e, "Order signature recovery failed");
        })?;

        Ok(public_key_to_address(&public_key))
    }

    /// Verify that an order was signed by its `user_address`.
    ///
    /// A well-formed signature from a different key is `Ok(false)`, not an error.
    pub fn verify_signature(&self, order: &Order) -> Result<bool> {
        let owner = parse_address("userAddress", &order.user_address)?;
        let recovered = self.recover_signer(order)?;
        let valid = recovered == owner;

        if valid {
            debug!(user = %owner, "Order signature verified");
        } else {
            debug!(user = %owner, recovered = %recovered, "Order signature does not match owner");
        }

        Ok(valid)
    }

    /// The EIP-712 typed data document a wallet signs for this order.
    pub fn typed_data(&self, order: &Order) -> Result<TypedData> {
        TypedData::new(&self.domain, order)
    }
}

/// Sign an order in place with a private key.
///
/// The signature is stored as `0x`-prefixed hex of `r ‖ s ‖ v` with v = 27/28.
pub fn sign_order(order: &mut Order, key: &PrivateKeySigner, signer: &OrderSigner) -> Result<()> {
    let digest = signer.hash_order(order)?;
    let signature = ecdsa_sign(&digest, key)?;
    order.signature = encode_signature(&signature);

    debug!(order_hash = %digest, signer = %key.address(), "Signed order");
    Ok(())
}
