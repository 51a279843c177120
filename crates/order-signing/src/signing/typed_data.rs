//! EIP-712 typed data document for wallet-based signing.
//!
//! Browser wallets sign orders through `eth_signTypedData_v4`. The document
//! built here hashes to the same digest as [`OrderSigner::hash_order`].
//!
//! [`OrderSigner::hash_order`]: super::OrderSigner::hash_order

use serde::Serialize;

use super::domain::{Eip712Domain, DOMAIN_NAME, DOMAIN_VERSION};
use super::order_hash::parse_address;
use crate::types::Order;
use crate::Result;

/// Members of the EIP712Domain struct, in encoding order.
pub const DOMAIN_FIELDS: [(&str, &str); 4] = [
    ("name", "string"),
    ("version", "string"),
    ("chainId", "uint256"),
    ("verifyingContract", "address"),
];

/// Members of the Order struct, in encoding order.
pub const ORDER_FIELDS: [(&str, &str); 9] = [
    ("userAddress", "address"),
    ("baseToken", "address"),
    ("quoteToken", "address"),
    ("side", "uint8"),
    ("orderType", "uint8"),
    ("price", "uint256"),
    ("amount", "uint256"),
    ("expiresAt", "uint256"),
    ("nonce", "uint256"),
];

/// Full EIP-712 typed data structure for signing.
#[derive(Debug, Clone, Serialize)]
pub struct TypedData {
    pub types: TypedDataTypes,
    #[serde(rename = "primaryType")]
    pub primary_type: String,
    pub domain: TypedDataDomain,
    pub message: TypedDataMessage,
}

/// EIP-712 type definitions.
#[derive(Debug, Clone, Serialize)]
pub struct TypedDataTypes {
    #[serde(rename = "EIP712Domain")]
    pub eip712_domain: Vec<TypeDefinition>,
    #[serde(rename = "Order")]
    pub order: Vec<TypeDefinition>,
}

/// Single type definition field.
#[derive(Debug, Clone, Serialize)]
pub struct TypeDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedDataDomain {
    pub name: String,
    pub version: String,
    pub chain_id: String,
    pub verifying_contract: String,
}

/// Order message; integers wider than 8 bits are decimal strings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedDataMessage {
    pub user_address: String,
    pub base_token: String,
    pub quote_token: String,
    pub side: u8,
    pub order_type: u8,
    pub price: String,
    pub amount: String,
    pub expires_at: String,
    pub nonce: String,
}

impl TypedData {
    /// Build the typed data document for an order under a domain.
    pub fn new(domain: &Eip712Domain, order: &Order) -> Result<Self> {
        let user_address = parse_address("userAddress", &order.user_address)?;
        let base_token = parse_address("baseToken", &order.base_token)?;
        let quote_token = parse_address("quoteToken", &order.quote_token)?;

        Ok(Self {
            types: TypedDataTypes {
                eip712_domain: definitions(&DOMAIN_FIELDS),
                order: definitions(&ORDER_FIELDS),
            },
            primary_type: "Order".to_string(),
            domain: TypedDataDomain {
                name: DOMAIN_NAME.to_string(),
                version: DOMAIN_VERSION.to_string(),
                chain_id: domain.chain_id.to_string(),
                verifying_contract: domain.verifying_contract.to_checksum(None),
            },
            message: TypedDataMessage {
                user_address: user_address.to_checksum(None),
                base_token: base_token.to_checksum(None),
                quote_token: quote_token.to_checksum(None),
                side: order.side.as_u8(),
                order_type: order.order_type.as_u8(),
                price: order.price.to_string(),
                amount: order.amount.to_string(),
                expires_at: order.expires_at_secs()?.to_string(),
                nonce: order.nonce.to_string(),
            },
        })
    }
}

fn definitions(fields: &[(&str, &str)]) -> Vec<TypeDefinition> {
    fields
        .iter()
        .map(|(name, type_name)| TypeDefinition {
            name: name.to_string(),
            type_name: type_name.to_string(),
        })
        .collect()
}

/// Render a struct type signature from its field list.
pub fn encode_type(struct_name: &str, fields: &[(&str, &str)]) -> String {
    let members: Vec<String> = fields
        .iter()
        .map(|(name, type_name)| format!("{} {}", type_name, name))
        .collect();
    format!("{}({})", struct_name, members.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signing::domain::DOMAIN_TYPE;
    use crate::signing::order_hash::ORDER_TYPE;
    use crate::types::{OrderSide, OrderType};
    use alloy_primitives::{Address, U256};

    fn sample_order() -> Order {
        Order::new(
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
            "0x0000000000000000000000000000000000000002",
            "0x0000000000000000000000000000000000000003",
            OrderSide::Sell,
            OrderType::StopLoss,
            U256::from(250u64),
            U256::from(4u64),
        )
        .with_nonce(9)
    }

    #[test]
    fn test_field_lists_match_type_strings() {
        assert_eq!(encode_type("EIP712Domain", &DOMAIN_FIELDS), DOMAIN_TYPE);
        assert_eq!(encode_type("Order", &ORDER_FIELDS), ORDER_TYPE);
    }

    #[test]
    fn test_typed_data_json() {
        let domain = Eip712Domain::new(U256::from(1u64), Address::with_last_byte(1));
        let typed = TypedData::new(&domain, &sample_order()).unwrap();
        let json = serde_json::to_value(&typed).unwrap();

        assert_eq!(json["primaryType"], "Order");
        assert_eq!(json["domain"]["name"], DOMAIN_NAME);
        assert_eq!(json["domain"]["chainId"], "1");
        assert_eq!(json["types"]["Order"].as_array().unwrap().len(), 9);
        assert_eq!(json["types"]["Order"][3]["type"], "uint8");
        assert_eq!(
            json["message"]["userAddress"],
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
        );
        assert_eq!(json["message"]["side"], 1);
        assert_eq!(json["message"]["orderType"], 2);
        assert_eq!(json["message"]["price"], "250");
        assert_eq!(json["message"]["expiresAt"], "0");
        assert_eq!(json["message"]["nonce"], "9");
    }

    #[test]
    fn test_typed_data_rejects_bad_address() {
        let domain = Eip712Domain::new(U256::from(1u64), Address::ZERO);
        let mut order = sample_order();
        order.user_address = "0xzz".to_string();
        assert!(TypedData::new(&domain, &order).is_err());
    }
}
