/*
[INPUT]:  HTTP requests for nonces and signature verification
[OUTPUT]: JSON responses or plain-text errors
[POS]:    HTTP layer - axum router and handlers
[UPDATE]: When adding endpoints or changing handler behavior
*/

use std::str::FromStr;

use alloy_primitives::Address;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::models::{NonceRequest, NonceResponse, VerifySignatureRequest, VerifySignatureResponse};
use crate::nonce::generate_nonce;
use crate::store::NonceStore;
use crate::verify::verify_signature;

/// Shared handler state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub nonces: NonceStore,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nonces(nonces: NonceStore) -> Self {
        Self { nonces }
    }
}

fn parse_address(raw: &str) -> Result<Address, AppError> {
    Address::from_str(raw.trim())
        .map_err(|e| AppError::BadRequest(format!("invalid address: {e}")))
}

/// Build the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/nonce", post(issue_nonce))
        .route("/api/verify-signature", post(verify))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// POST /api/nonce — issue a nonce for an address
async fn issue_nonce(
    State(state): State<AppState>,
    body: Result<Json<NonceRequest>, JsonRejection>,
) -> Result<Json<NonceResponse>, AppError> {
    let Json(req) = body?;
    let address = parse_address(&req.address)?;

    let nonce = generate_nonce();
    state.nonces.set(address, nonce.clone());
    tracing::info!(%address, "nonce issued");

    Ok(Json(NonceResponse { nonce }))
}

/// POST /api/verify-signature — check the signature over the issued nonce
async fn verify(
    State(state): State<AppState>,
    body: Result<Json<VerifySignatureRequest>, JsonRejection>,
) -> Result<Json<VerifySignatureResponse>, AppError> {
    let Json(req) = body?;
    let address = parse_address(&req.address)?;

    let nonce = state
        .nonces
        .get(&address)
        .ok_or_else(|| AppError::NotFound(format!("no nonce issued for {}", req.address)))?;

    if let Err(err) = verify_signature(&req.address, &req.signature, &nonce) {
        tracing::warn!(address = %req.address, error = %err, "signature rejected");
        return Err(err);
    }

    if !state.nonces.consume(&address, &nonce) {
        return Err(AppError::NotFound(format!(
            "nonce for {} already used",
            req.address
        )));
    }

    tracing::info!(address = %req.address, "signature verified");
    Ok(Json(VerifySignatureResponse::default()))
}
