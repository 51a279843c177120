//! Signing module for matching-engine orders.
//!
//! This module provides EIP-712 typed data hashing of orders, signature
//! verification by public-key recovery, and a signing path for tooling.
//!
//! # Architecture
//!
//! ```text
//! Order ──► order_hash::struct_hash ──┐
//!                                     ├──► signing hash ──► OrderSigner::verify_signature
//! Eip712Domain::separator ────────────┘          │
//!                                                └────────► sign_order (tooling)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use order_signing::{sign_order, Order, OrderSide, OrderSigner, OrderType};
//! use alloy_primitives::{Address, U256};
//! use alloy_signer_local::PrivateKeySigner;
//!
//! let signer = OrderSigner::new(U256::from(1u64), contract_address);
//! let key = PrivateKeySigner::from_str("0x...")?;
//!
//! let mut order = Order::new(
//!     key.address().to_string(),
//!     base_token,
//!     quote_token,
//!     OrderSide::Buy,
//!     OrderType::Limit,
//!     U256::from(1_000_000_000_000_000_000u128),
//!     U256::from(500_000_000_000_000_000u128),
//! )
//! .with_nonce(1);
//!
//! sign_order(&mut order, &key, &signer)?;
//! assert!(signer.verify_signature(&order)?);
//! ```

pub mod domain;
pub mod order_hash;
pub mod primitives;
pub mod recovery;
pub mod signer;
pub mod typed_data;

pub use domain::{Eip712Domain, DOMAIN_NAME, DOMAIN_TYPE, DOMAIN_VERSION, MAINNET_CHAIN_ID};

pub use order_hash::{ORDER_TYPE, TYPED_DATA_PREFIX};

pub use recovery::{normalize_recovery_id, to_offset_v, SIGNATURE_LENGTH};

pub use signer::{sign_order, OrderSigner};

pub use typed_data::TypedData;
