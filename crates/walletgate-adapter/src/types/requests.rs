/*
[INPUT]:  Wallet address and signature
[OUTPUT]: JSON request bodies for the auth server
[POS]:    Data layer - request types
[UPDATE]: When request payloads change
*/

use serde::{Deserialize, Serialize};

/// Body of `POST /api/nonce`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonceRequest {
    pub address: String,
}

/// Body of `POST /api/verify-signature`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifySignatureRequest {
    pub address: String,
    pub signature: String,
}
