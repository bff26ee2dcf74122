/*
[INPUT]:  Auth server JSON responses
[OUTPUT]: Typed response structs
[POS]:    Data layer - response types
[UPDATE]: When response payloads change
*/

use serde::{Deserialize, Serialize};

use super::Nonce;

/// Response of `POST /api/nonce`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonceResponse {
    pub nonce: Nonce,
}

/// Response of `POST /api/verify-signature`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifySignatureResponse {
    /// Reverse-resolved ENS name, if the server knows one
    #[serde(default)]
    pub ens: Option<String>,
}
