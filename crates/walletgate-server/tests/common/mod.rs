/*
[INPUT]:  Test server requirements
[OUTPUT]: Running auth server on an ephemeral port
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When server startup changes
*/

//! Common test utilities for walletgate-server tests

#![allow(dead_code)]

use tokio::net::TcpListener;
use walletgate_server::{AppState, router};

// Hardhat/anvil account #0
pub const TEST_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const TEST_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

/// Start the server on 127.0.0.1 with an ephemeral port
///
/// Returns the base URL and the state shared with the handlers.
pub async fn spawn_server() -> (String, AppState) {
    let state = AppState::new();
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");

    let app = router(state.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });

    (format!("http://{addr}"), state)
}
