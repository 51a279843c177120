//! Order Signing Library
//!
//! Canonical EIP-712 hashing of matching-engine orders, signature
//! verification by public-key recovery, a signing path for tooling and tests,
//! and a separate dedup hash for storage indexing.

pub mod config;
pub mod dedup;
pub mod error;
pub mod signing;
pub mod types;
pub mod wallet;

pub use config::SignerConfig;
pub use dedup::compute_dedup_hash;
pub use error::{Error, Result};
pub use signing::{sign_order, OrderSigner};
pub use types::{Order, OrderSide, OrderType};
