//! EIP-712 struct hashing for orders.
//!
//! The struct hash covers exactly nine typed fields. `signature` and
//! `trading_pair` never reach the encoder.

use std::str::FromStr;

use alloy_primitives::{Address, B256, U256};
use alloy_sol_types::SolValue;

use super::primitives::hash256;
use crate::types::Order;
use crate::{Error, Result};

/// EIP-712 type signature of the order struct.
pub const ORDER_TYPE: &str = "Order(address userAddress,address baseToken,address quoteToken,uint8 side,uint8 orderType,uint256 price,uint256 amount,uint256 expiresAt,uint256 nonce)";

/// Magic prefix of an EIP-712 signing buffer.
pub const TYPED_DATA_PREFIX: [u8; 2] = [0x19, 0x01];

/// Number of 32-byte words in the encoded struct (type hash + nine fields).
pub const ENCODED_WORDS: usize = 10;

/// Parse a hex address field, rejecting anything that is not 20 bytes.
pub fn parse_address(field: &'static str, value: &str) -> Result<Address> {
    Address::from_str(value).map_err(|e| Error::InvalidAddress {
        field,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Encode an order as EIP-712 `encodeData`, type hash included.
///
/// Every member is left-padded to a full 32-byte word.
pub fn encode_order(order: &Order) -> Result<Vec<u8>> {
    let order_type_hash = hash256(ORDER_TYPE.as_bytes());

    let user_address = parse_address("userAddress", &order.user_address)?;
    let base_token = parse_address("baseToken", &order.base_token)?;
    let quote_token = parse_address("quoteToken", &order.quote_token)?;
    let expires_at = order.expires_at_secs()?;

    let encoded = (
        order_type_hash,
        B256::left_padding_from(user_address.as_slice()),
        B256::left_padding_from(base_token.as_slice()),
        B256::left_padding_from(quote_token.as_slice()),
        U256::from(order.side.as_u8()),
        U256::from(order.order_type.as_u8()),
        order.price,
        order.amount,
        U256::from(expires_at),
        U256::from(order.nonce),
    )
        .abi_encode_packed();

    debug_assert_eq!(encoded.len(), ENCODED_WORDS * 32);
    Ok(encoded)
}

/// Compute the EIP-712 struct hash of an order.
pub fn struct_hash(order: &Order) -> Result<B256> {
    Ok(hash256(&encode_order(order)?))
}

/// Compute the EIP-712 signing hash: keccak256("\x19\x01" ‖ domainSeparator ‖ structHash).
pub fn typed_data_hash(domain_separator: B256, struct_hash: B256) -> B256 {
    let mut buf = [0u8; 2 + 32 + 32];
    buf[..2].copy_from_slice(&TYPED_DATA_PREFIX);
    buf[2..34].copy_from_slice(domain_separator.as_slice());
    buf[34..].copy_from_slice(struct_hash.as_slice());
    hash256(&buf)
}
