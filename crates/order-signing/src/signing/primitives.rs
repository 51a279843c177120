//! Keccak-256 and secp256k1 primitives used by the signing path.
//!
//! These wrap the audited implementations from `alloy` and `k256`; nothing
//! here knows about orders.

use alloy_primitives::{keccak256, Address, B256};
use alloy_signer::SignerSync;
use alloy_signer_local::PrivateKeySigner;
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};

use crate::{Error, Result};

/// Recoverable ECDSA signature components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSignature {
    pub r: B256,
    pub s: B256,
    /// Raw recovery id (0 or 1).
    pub recovery_id: u8,
}

/// Keccak-256 digest.
pub fn hash256(data: &[u8]) -> B256 {
    keccak256(data)
}

/// Sign a 32-byte prehash with a secp256k1 private key.
pub fn ecdsa_sign(hash: &B256, key: &PrivateKeySigner) -> Result<RawSignature> {
    let signature = key
        .sign_hash_sync(hash)
        .map_err(|e| Error::SigningFailed {
            reason: e.to_string(),
        })?;

    Ok(RawSignature {
        r: B256::from(signature.r().to_be_bytes::<32>()),
        s: B256::from(signature.s().to_be_bytes::<32>()),
        recovery_id: signature.v() as u8,
    })
}

/// Recover the public key that produced `signature` over `hash`.
///
/// Fails on out-of-range scalars, a recovery id other than 0/1, or a point
/// that is not on the curve.
pub fn recover_public_key(hash: &B256, signature: &RawSignature) -> Result<VerifyingKey> {
    let recovery_id =
        RecoveryId::try_from(signature.recovery_id).map_err(|e| Error::RecoveryFailed {
            reason: format!("invalid recovery id {}: {}", signature.recovery_id, e),
        })?;

    let mut sig_bytes = [0u8; 64];
    sig_bytes[..32].copy_from_slice(signature.r.as_slice());
    sig_bytes[32..].copy_from_slice(signature.s.as_slice());

    let ecdsa_signature = Signature::from_slice(&sig_bytes).map_err(|e| Error::RecoveryFailed {
        reason: format!("invalid signature scalars: {}", e),
    })?;

    VerifyingKey::recover_from_prehash(hash.as_slice(), &ecdsa_signature, recovery_id).map_err(
        |e| Error::RecoveryFailed {
            reason: format!("failed to recover key: {}", e),
        },
    )
}

/// Derive the 20-byte address of a public key.
///
/// keccak256 of the uncompressed point without its 0x04 tag, last 20 bytes.
pub fn public_key_to_address(public_key: &VerifyingKey) -> Address {
    let encoded = public_key.to_encoded_point(false);
    let hash = keccak256(&encoded.as_bytes()[1..]);
    Address::from_slice(&hash[12..])
}
