//! Signature encoding and recovery-id normalization.
//!
//! Signatures travel as `0x`-prefixed hex of `r ‖ s ‖ v` (65 bytes). The
//! signer always emits the offset convention (v = 27/28); the verifier accepts
//! the raw (0/1) and the offset convention and nothing else.

use alloy_primitives::B256;

use super::primitives::RawSignature;
use crate::{Error, Result};

/// Decoded signature length in bytes.
pub const SIGNATURE_LENGTH: usize = 65;

/// Offset added to the raw recovery id by common wallet tooling.
pub const RECOVERY_ID_OFFSET: u8 = 27;

/// Map a trailing signature byte to a raw recovery id.
///
/// Accepts exactly 0, 1, 27 and 28.
pub fn normalize_recovery_id(v: u8) -> Result<u8> {
    match v {
        0 | 1 => Ok(v),
        27 | 28 => Ok(v - RECOVERY_ID_OFFSET),
        _ => Err(Error::RecoveryFailed {
            reason: format!("invalid recovery id {}, expected 0, 1, 27 or 28", v),
        }),
    }
}

/// Convert a y-parity bit to the offset (27/28) convention.
pub fn to_offset_v(y_parity: bool) -> u8 {
    RECOVERY_ID_OFFSET + y_parity as u8
}

/// Decode a hex signature into its components with a normalized recovery id.
///
/// The `0x` prefix is optional and may be upper case.
pub fn decode_signature(signature: &str) -> Result<RawSignature> {
    let trimmed = signature.trim();
    let hex_part = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let bytes = hex::decode(hex_part).map_err(|e| Error::InvalidSignatureEncoding {
        reason: e.to_string(),
    })?;

    if bytes.len() != SIGNATURE_LENGTH {
        return Err(Error::InvalidSignatureLength {
            expected: SIGNATURE_LENGTH,
            actual: bytes.len(),
        });
    }

    Ok(RawSignature {
        r: B256::from_slice(&bytes[0..32]),
        s: B256::from_slice(&bytes[32..64]),
        recovery_id: normalize_recovery_id(bytes[64])?,
    })
}

/// Encode signature components as `0x` hex with an offset recovery id.
pub fn encode_signature(signature: &RawSignature) -> String {
    let mut bytes = [0u8; SIGNATURE_LENGTH];
    bytes[0..32].copy_from_slice(signature.r.as_slice());
    bytes[32..64].copy_from_slice(signature.s.as_slice());
    bytes[64] = to_offset_v(signature.recovery_id == 1);

    format!("0x{}", hex::encode(bytes))
}
