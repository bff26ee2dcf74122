/*
[INPUT]:  Claimed address, hex signature, issued nonce
[OUTPUT]: Whether the signature was produced by the address over the nonce
[POS]:    Auth layer - personal-message signature verification
[UPDATE]: When the signed message format changes
*/

use std::str::FromStr;

use alloy_primitives::{Address, Signature};

use crate::error::AppError;

const VERIFY_FAILED: &str = "failed to verify signature";

/// Verify an EIP-191 personal-message signature over `nonce`
///
/// The signer is recovered from the signature and compared to `address`;
/// checksummed and lowercase addresses are both accepted.
pub fn verify_signature(address: &str, signature_hex: &str, nonce: &str) -> Result<(), AppError> {
    let expected = Address::from_str(address.trim())
        .map_err(|e| AppError::Unauthorized(format!("invalid address: {e}")))?;

    let signature_hex = signature_hex.trim();
    let signature_bytes = hex::decode(signature_hex.strip_prefix("0x").unwrap_or(signature_hex))
        .map_err(|e| AppError::Unauthorized(format!("invalid signature encoding: {e}")))?;

    let signature = Signature::try_from(signature_bytes.as_slice())
        .map_err(|e| AppError::Unauthorized(format!("invalid signature: {e}")))?;

    let recovered = signature
        .recover_address_from_msg(nonce.as_bytes())
        .map_err(|e| AppError::Unauthorized(format!("signature recovery failed: {e}")))?;

    if recovered != expected {
        tracing::debug!(%expected, %recovered, "signature signer mismatch");
        return Err(AppError::Unauthorized(VERIFY_FAILED.to_string()));
    }

    Ok(())
}
