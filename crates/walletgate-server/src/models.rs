/*
[INPUT]:  JSON request bodies
[OUTPUT]: Typed request/response structs
[POS]:    Data layer - wire types for the auth endpoints
[UPDATE]: When endpoint payloads change
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NonceRequest {
    pub address: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NonceResponse {
    pub nonce: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerifySignatureRequest {
    pub address: String,
    pub signature: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VerifySignatureResponse {
    /// ENS name for the address; empty when not resolved
    pub ens: String,
}
