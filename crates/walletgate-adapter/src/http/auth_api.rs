/*
[INPUT]:  Wallet address and signature
[OUTPUT]: Server-issued nonce and verification result
[POS]:    HTTP layer - auth server endpoints
[UPDATE]: When auth endpoints or payloads change
*/

use reqwest::Method;

use crate::http::{AuthClient, Result};
use crate::types::{Nonce, NonceRequest, NonceResponse, VerifySignatureRequest, VerifySignatureResponse};

impl AuthClient {
    /// Request a login nonce for an address
    ///
    /// POST /api/nonce
    pub async fn request_nonce(&self, address: &str) -> Result<Nonce> {
        let body = NonceRequest {
            address: address.to_string(),
        };
        let builder = self.request(Method::POST, "/api/nonce")?.json(&body);
        let response: NonceResponse = self.send_json(builder).await?;
        Ok(response.nonce)
    }

    /// Submit a signature over the nonce for verification
    ///
    /// POST /api/verify-signature
    pub async fn verify_signature(
        &self,
        address: &str,
        signature: &str,
    ) -> Result<VerifySignatureResponse> {
        let body = VerifySignatureRequest {
            address: address.to_string(),
            signature: signature.to_string(),
        };
        let builder = self
            .request(Method::POST, "/api/verify-signature")?
            .json(&body);

        // Only the status matters; any body shape is tolerated.
        let raw = self.send(builder).await?;
        Ok(serde_json::from_str(&raw).unwrap_or_default())
    }
}
