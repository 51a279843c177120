//! Order types consumed by the signing and dedup paths.

use alloy_primitives::U256;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Side of the order (buy or sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    /// Get the numeric value for hashing.
    pub fn as_u8(&self) -> u8 {
        match self {
            OrderSide::Buy => 0,
            OrderSide::Sell => 1,
        }
    }
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "BUY"),
            OrderSide::Sell => write!(f, "SELL"),
        }
    }
}

/// Type of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    Limit,
    Market,
    StopLoss,
    TakeProfit,
}

impl OrderType {
    /// Get the numeric value for hashing.
    pub fn as_u8(&self) -> u8 {
        match self {
            OrderType::Limit => 0,
            OrderType::Market => 1,
            OrderType::StopLoss => 2,
            OrderType::TakeProfit => 3,
        }
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderType::Limit => write!(f, "LIMIT"),
            OrderType::Market => write!(f, "MARKET"),
            OrderType::StopLoss => write!(f, "STOP_LOSS"),
            OrderType::TakeProfit => write!(f, "TAKE_PROFIT"),
        }
    }
}

/// An order as submitted to the matching engine.
///
/// `price` and `amount` are already scaled to on-chain fixed-point units.
/// Only `signature` is expected to change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Owner address as hex text.
    pub user_address: String,
    /// Base token contract address as hex text.
    pub base_token: String,
    /// Quote token contract address as hex text.
    pub quote_token: String,
    pub side: OrderSide,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    #[serde(
        serialize_with = "u256_decimal::serialize",
        deserialize_with = "u256_decimal::price"
    )]
    pub price: U256,
    #[serde(
        serialize_with = "u256_decimal::serialize",
        deserialize_with = "u256_decimal::amount"
    )]
    pub amount: U256,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub nonce: u64,
    /// Hex-encoded 65-byte signature (r ‖ s ‖ v), empty until signed.
    #[serde(default)]
    pub signature: String,
    /// Free-text pair label. Feeds the dedup hash only.
    #[serde(default)]
    pub trading_pair: String,
}

impl Order {
    pub fn new(
        user_address: impl Into<String>,
        base_token: impl Into<String>,
        quote_token: impl Into<String>,
        side: OrderSide,
        order_type: OrderType,
        price: U256,
        amount: U256,
    ) -> Self {
        Self {
            user_address: user_address.into(),
            base_token: base_token.into(),
            quote_token: quote_token.into(),
            side,
            order_type,
            price,
            amount,
            expires_at: None,
            nonce: 0,
            signature: String::new(),
            trading_pair: String::new(),
        }
    }

    pub fn with_expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    pub fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = nonce;
        self
    }

    pub fn with_trading_pair(mut self, trading_pair: impl Into<String>) -> Self {
        self.trading_pair = trading_pair.into();
        self
    }

    /// Parse a decimal amount into a 256-bit value.
    ///
    /// Values wider than 256 bits are rejected rather than truncated. Order
    /// JSON goes through this for `price` and `amount`.
    pub fn parse_amount(field: &'static str, text: &str) -> Result<U256> {
        parse_decimal(text).map_err(|reason| Error::InvalidAmount {
            field,
            value: text.to_string(),
            reason,
        })
    }

    /// Expiry as unsigned unix seconds, zero when absent.
    pub fn expires_at_secs(&self) -> Result<u64> {
        match self.expires_at {
            None => Ok(0),
            Some(ts) => {
                let secs = ts.timestamp();
                u64::try_from(secs).map_err(|_| Error::InvalidExpiry { timestamp: secs })
            }
        }
    }

    /// Expiry as signed unix seconds, zero when absent.
    pub fn expires_at_unix(&self) -> i64 {
        self.expires_at.map(|ts| ts.timestamp()).unwrap_or(0)
    }

    /// Whether a signature has been attached.
    pub fn is_signed(&self) -> bool {
        !self.signature.is_empty()
    }
}

fn parse_decimal(text: &str) -> std::result::Result<U256, String> {
    let text = text.trim();
    if text.is_empty() {
        return Err("empty value".to_string());
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err("expected an unsigned decimal integer".to_string());
    }
    U256::from_str_radix(text, 10).map_err(|e| format!("does not fit in 256 bits: {}", e))
}

/// Serde adapters carrying `U256` as a decimal string.
mod u256_decimal {
    use alloy_primitives::U256;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::Order;

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        deserialize_field(deserializer, "price")
    }

    pub fn amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        deserialize_field(deserializer, "amount")
    }

    fn deserialize_field<'de, D: Deserializer<'de>>(
        deserializer: D,
        field: &'static str,
    ) -> Result<U256, D::Error> {
        let text = String::deserialize(deserializer)?;
        Order::parse_amount(field, &text).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const TEST_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    fn sample_order() -> Order {
        Order::new(
            TEST_ADDRESS,
            "0x0000000000000000000000000000000000000002",
            "0x0000000000000000000000000000000000000003",
            OrderSide::Buy,
            OrderType::Limit,
            U256::from(1_000_000_000_000_000_000u128),
            U256::from(500_000_000_000_000_000u128),
        )
    }

    #[test]
    fn test_order_side_codes() {
        assert_eq!(OrderSide::Buy.as_u8(), 0);
        assert_eq!(OrderSide::Sell.as_u8(), 1);
        assert_eq!(format!("{}", OrderSide::Sell), "SELL");
    }

    #[test]
    fn test_order_type_codes() {
        assert_eq!(OrderType::Limit.as_u8(), 0);
        assert_eq!(OrderType::Market.as_u8(), 1);
        assert_eq!(OrderType::StopLoss.as_u8(), 2);
        assert_eq!(OrderType::TakeProfit.as_u8(), 3);
    }

    #[test]
    fn test_new_order_defaults() {
        let order = sample_order();
        assert_eq!(order.nonce, 0);
        assert!(order.expires_at.is_none());
        assert!(!order.is_signed());
        assert_eq!(order.expires_at_secs().unwrap(), 0);
        assert_eq!(order.expires_at_unix(), 0);
    }

    #[test]
    fn test_expiry_seconds() {
        let expiry = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let order = sample_order().with_expires_at(expiry);
        assert_eq!(order.expires_at_secs().unwrap(), 1_700_000_000);
    }

    #[test]
    fn test_pre_epoch_expiry_rejected() {
        let expiry = Utc.timestamp_opt(-5, 0).unwrap();
        let order = sample_order().with_expires_at(expiry);
        assert!(matches!(
            order.expires_at_secs(),
            Err(Error::InvalidExpiry { timestamp: -5 })
        ));
        assert_eq!(order.expires_at_unix(), -5);
    }

    #[test]
    fn test_parse_amount() {
        let value = Order::parse_amount("price", "1000000000000000000").unwrap();
        assert_eq!(value, U256::from(1_000_000_000_000_000_000u128));

        assert!(matches!(
            Order::parse_amount("price", "-1"),
            Err(Error::InvalidAmount { field: "price", .. })
        ));
        assert!(Order::parse_amount("amount", "").is_err());
        assert!(Order::parse_amount("amount", "1.5").is_err());
    }

    #[test]
    fn test_parse_amount_overflow() {
        let max = U256::MAX.to_string();
        assert_eq!(Order::parse_amount("amount", &max).unwrap(), U256::MAX);

        // Ten times the maximum
        let overflow = format!("{}0", max);
        assert!(matches!(
            Order::parse_amount("amount", &overflow),
            Err(Error::InvalidAmount { field: "amount", .. })
        ));
    }

    #[test]
    fn test_order_json_shape() {
        let order = sample_order().with_nonce(7).with_trading_pair("WETH/USDC");
        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json["userAddress"], TEST_ADDRESS);
        assert_eq!(json["side"], "buy");
        assert_eq!(json["type"], "limit");
        assert_eq!(json["price"], "1000000000000000000");
        assert_eq!(json["tradingPair"], "WETH/USDC");
        assert!(json.get("expiresAt").is_none());

        let back: Order = serde_json::from_value(json).unwrap();
        assert_eq!(back, order);
    }

    #[test]
    fn test_order_json_rejects_bad_amount() {
        let json = serde_json::json!({
            "userAddress": TEST_ADDRESS,
            "baseToken": TEST_ADDRESS,
            "quoteToken": TEST_ADDRESS,
            "side": "sell",
            "type": "stop_loss",
            "price": "12abc",
            "amount": "1",
        });
        let err = serde_json::from_value::<Order>(json).unwrap_err();
        assert!(err.to_string().contains("Invalid price value"), "{}", err);
    }

    #[test]
    fn test_order_json_rejects_overflowing_amount() {
        let json = serde_json::json!({
            "userAddress": TEST_ADDRESS,
            "baseToken": TEST_ADDRESS,
            "quoteToken": TEST_ADDRESS,
            "side": "buy",
            "type": "market",
            "price": "1",
            "amount": format!("{}0", U256::MAX),
        });
        let err = serde_json::from_value::<Order>(json).unwrap_err();
        assert!(err.to_string().contains("Invalid amount value"), "{}", err);
    }
}
