/*
[INPUT]:  EVM private key (hex string)
[OUTPUT]: Personal-message signatures and wallet address
[POS]:    Auth layer - local-key wallet bridge
[UPDATE]: When signing logic or EVM address formatting changes
*/

use std::str::FromStr;

use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;

use crate::auth::{BridgeError, BridgeResult, WalletBridge};
use crate::http::{Result, WalletgateError};

/// Wallet bridge backed by a private key held in process
///
/// Behaves like a browser wallet that approves every prompt for its one account.
pub struct LocalWalletBridge {
    signer: PrivateKeySigner,
    address: String,
}

impl LocalWalletBridge {
    /// Provider name this bridge identifies as
    pub const PROVIDER: &'static str = "local-key";

    /// Create a bridge from a hex-encoded private key
    ///
    /// Supports both "0x"-prefixed and non-prefixed hex strings.
    pub fn new(private_key_hex: &str) -> Result<Self> {
        let private_key_hex = private_key_hex.trim();
        let private_key_hex = private_key_hex
            .strip_prefix("0x")
            .unwrap_or(private_key_hex);
        let signer = PrivateKeySigner::from_str(private_key_hex)
            .map_err(|e| WalletgateError::Config(format!("Invalid EVM private key: {e}")))?;

        let address = signer.address().to_checksum(None);

        Ok(Self { signer, address })
    }

    /// Checksummed address of the key
    pub fn address(&self) -> &str {
        &self.address
    }
}

impl std::fmt::Debug for LocalWalletBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalWalletBridge")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

/// Bytes a wallet actually signs for a `personal_sign` message
fn personal_message_bytes(message: &str) -> Vec<u8> {
    message
        .strip_prefix("0x")
        .and_then(|hex_body| hex::decode(hex_body).ok())
        .unwrap_or_else(|| message.as_bytes().to_vec())
}

#[async_trait]
impl WalletBridge for LocalWalletBridge {
    fn provider(&self) -> Option<&str> {
        Some(Self::PROVIDER)
    }

    async fn request_accounts(&self) -> BridgeResult<String> {
        Ok(self.address.clone())
    }

    async fn personal_sign(&self, message: &str, address: &str) -> BridgeResult<String> {
        if !address.eq_ignore_ascii_case(&self.address) {
            return Err(BridgeError::Other(format!("unknown account {address}")));
        }

        let signature = self
            .signer
            .sign_message(&personal_message_bytes(message))
            .await
            .map_err(|e| BridgeError::Other(format!("Failed to sign EVM message: {e}")))?;

        // [r, s, v] with v in {27, 28}
        Ok(format!("0x{}", hex::encode(signature.as_bytes())))
    }
}
