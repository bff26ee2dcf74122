/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public walletgate adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{
    BridgeAvailability,
    BridgeError,
    FlowConfig,
    LocalWalletBridge,
    MockWalletBridge,
    SessionStore,
    SignInFlow,
    SignInView,
    SignedInAccount,
    WalletBridge,
};

// Re-export commonly used types from http
pub use http::{
    AuthClient,
    ClientConfig,
    Result,
    WalletgateError,
};

// Re-export all types
pub use types::*;
