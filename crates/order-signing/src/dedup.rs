//! Dedup hash for storage-layer indexing.
//!
//! This is a lookup key, not a credential. It covers a different field set
//! than the signing hash and never includes the signature, so two orders that
//! differ only in their signature share a dedup hash.

use sha2::{Digest, Sha256};

use crate::types::Order;

/// Compute the dedup hash of an order as lowercase hex.
pub fn compute_dedup_hash(order: &Order) -> String {
    let digest = Sha256::digest(dedup_preimage(order).as_bytes());
    hex::encode(digest.as_slice())
}

/// Concatenated field text, fixed order, no separators.
fn dedup_preimage(order: &Order) -> String {
    format!(
        "{}{}{}{}{}{}{}{}{}{}",
        order.user_address,
        order.trading_pair,
        order.base_token,
        order.quote_token,
        order.side.as_u8(),
        order.order_type.as_u8(),
        order.price,
        order.amount,
        order.expires_at_unix(),
        order.nonce,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OrderSide, OrderType};
    use alloy_primitives::U256;
    use chrono::{TimeZone, Utc};

    fn sample_order() -> Order {
        Order::new(
            "0xA",
            "0xB",
            "0xC",
            OrderSide::Sell,
            OrderType::Market,
            U256::from(1500u64),
            U256::from(20u64),
        )
        .with_trading_pair("B/C")
        .with_nonce(3)
    }

    #[test]
    fn test_preimage_layout() {
        assert_eq!(dedup_preimage(&sample_order()), "0xAB/C0xB0xC1115002003");

        let order = sample_order().with_expires_at(Utc.timestamp_opt(1_700_000_000, 0).unwrap());
        assert_eq!(dedup_preimage(&order), "0xAB/C0xB0xC1115002017000000003");
    }

    #[test]
    fn test_dedup_hash_format() {
        let hash = compute_dedup_hash(&sample_order());
        assert_eq!(hash, "091dd7d84cf5b1e26b350654b73ae25bde63697f7d9b66bbd966a5f5f9697d0a");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_dedup_hash_deterministic() {
        assert_eq!(
            compute_dedup_hash(&sample_order()),
            compute_dedup_hash(&sample_order())
        );
    }

    #[test]
    fn test_dedup_hash_ignores_signature() {
        let order = sample_order();
        let mut signed = order.clone();
        signed.signature = format!("0x{}", "ab".repeat(65));
        assert_eq!(compute_dedup_hash(&order), compute_dedup_hash(&signed));
    }

    #[test]
    fn test_dedup_hash_includes_trading_pair() {
        let order = sample_order();
        let other = sample_order().with_trading_pair("C/B");
        assert_ne!(compute_dedup_hash(&order), compute_dedup_hash(&other));
    }
}
