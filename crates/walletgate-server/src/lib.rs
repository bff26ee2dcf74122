/*
[INPUT]:  Server configuration and HTTP requests
[OUTPUT]: Nonce issuance and signature verification endpoints
[POS]:    Crate root - module wiring
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod error;
pub mod models;
pub mod nonce;
pub mod routes;
pub mod store;
pub mod verify;

pub use config::ServerConfig;
pub use error::AppError;
pub use routes::{AppState, router};
pub use store::NonceStore;
