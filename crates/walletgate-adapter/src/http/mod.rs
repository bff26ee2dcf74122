/*
[INPUT]:  HTTP client configuration and auth server endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod auth_api;
pub mod client;
pub mod error;

pub use error::{Result, WalletgateError};

pub use client::{AuthClient, ClientConfig};
