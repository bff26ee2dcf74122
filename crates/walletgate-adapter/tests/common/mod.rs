/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for walletgate-adapter tests

#![allow(dead_code)]

use std::sync::Arc;

use walletgate_adapter::{AuthClient, ClientConfig, MockWalletBridge, SignInFlow, WalletBridge};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_ADDRESS: &str = "0xABC0000000000000000000000000000000000abc";
pub const TEST_SIGNATURE: &str = "0xmock_signature";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Auth client pointed at the mock server
pub fn client_for(server: &MockServer) -> AuthClient {
    AuthClient::with_config(ClientConfig::default(), &server.uri()).expect("client init")
}

/// Sign-in flow using the given bridge (or none)
pub fn flow_with_bridge(server: &MockServer, bridge: Option<MockWalletBridge>) -> SignInFlow {
    let bridge = bridge.map(|bridge| Arc::new(bridge) as Arc<dyn WalletBridge>);
    SignInFlow::new(client_for(server), bridge)
}

/// Mount `POST /api/nonce` answering with `status` and nonce `[1, 2, 3]`
pub async fn mount_nonce(server: &MockServer, status: u16) {
    Mock::given(method("POST"))
        .and(path("/api/nonce"))
        .respond_with(
            ResponseTemplate::new(status).set_body_json(serde_json::json!({ "nonce": [1, 2, 3] })),
        )
        .mount(server)
        .await;
}

/// Mount `POST /api/verify-signature` answering with `status`
pub async fn mount_verify(server: &MockServer, status: u16) {
    Mock::given(method("POST"))
        .and(path("/api/verify-signature"))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
