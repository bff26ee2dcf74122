/*
[INPUT]:  Mock wallet bridges and mock auth server responses
[OUTPUT]: Test results for the sign-in flow
[POS]:    Integration tests - authentication
[UPDATE]: When auth endpoints or flow changes
*/

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{
    TEST_ADDRESS, TEST_SIGNATURE, flow_with_bridge, mount_nonce, mount_verify, setup_mock_server,
};
use tokio_test::{assert_err, assert_ok};
use walletgate_adapter::{
    BridgeAvailability, BridgeError, MockWalletBridge, SignInView, WalletgateError,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_absent_bridge_offers_no_login() {
    let server = setup_mock_server().await;
    let flow = flow_with_bridge(&server, None);

    assert_eq!(flow.availability(), BridgeAvailability::Absent);
    assert_eq!(
        flow.view(),
        SignInView::InstallWallet {
            availability: BridgeAvailability::Absent
        }
    );

    let err = assert_err!(flow.login().await);
    assert!(matches!(
        err,
        WalletgateError::BridgeUnavailable(BridgeAvailability::Absent)
    ));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_wrong_provider_offers_no_login() {
    let server = setup_mock_server().await;
    let bridge = MockWalletBridge::new(TEST_ADDRESS, TEST_SIGNATURE).with_provider(Some("phantom"));
    let flow = flow_with_bridge(&server, Some(bridge));

    assert!(!flow.availability().is_usable());
    assert!(matches!(flow.view(), SignInView::InstallWallet { .. }));
}

#[tokio::test]
async fn test_happy_path_signs_in() {
    let server = setup_mock_server().await;
    mount_nonce(&server, 200).await;
    Mock::given(method("POST"))
        .and(path("/api/verify-signature"))
        .and(body_json(serde_json::json!({
            "address": TEST_ADDRESS,
            "signature": TEST_SIGNATURE,
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let bridge = MockWalletBridge::new(TEST_ADDRESS, TEST_SIGNATURE);
    let flow = flow_with_bridge(&server, Some(bridge.clone()));
    assert_eq!(
        flow.view(),
        SignInView::SignIn {
            authenticating: false,
            last_error: None,
        }
    );

    let account = assert_ok!(flow.login().await);
    assert_eq!(account.address, TEST_ADDRESS);

    let requests = bridge.sign_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].message, "0x010203");
    assert_eq!(requests[0].address, TEST_ADDRESS);

    assert_eq!(flow.session().address(), Some(TEST_ADDRESS.to_string()));
    assert_eq!(
        flow.view(),
        SignInView::SignedIn {
            address: TEST_ADDRESS.to_string(),
            ens: None,
        }
    );
}

#[tokio::test]
async fn test_nonce_failure_aborts_before_signing() {
    let server = setup_mock_server().await;
    mount_nonce(&server, 500).await;

    let bridge = MockWalletBridge::new(TEST_ADDRESS, TEST_SIGNATURE);
    let flow = flow_with_bridge(&server, Some(bridge.clone()));

    let err = assert_err!(flow.login().await);
    assert_eq!(err.status(), Some(500));
    assert!(bridge.sign_requests().is_empty());
    assert_eq!(flow.session().address(), None);
}

#[tokio::test]
async fn test_verify_failure_leaves_session_unset() {
    let server = setup_mock_server().await;
    mount_nonce(&server, 200).await;
    mount_verify(&server, 401).await;

    let bridge = MockWalletBridge::new(TEST_ADDRESS, TEST_SIGNATURE);
    let flow = flow_with_bridge(&server, Some(bridge.clone()));

    let err = assert_err!(flow.login().await);
    match err {
        WalletgateError::Request {
            status,
            status_text,
        } => {
            assert_eq!(status, 401);
            assert_eq!(status_text, "Unauthorized");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(bridge.sign_requests().len(), 1);
    assert!(!flow.session().is_signed_in());
}

#[tokio::test]
async fn test_account_rejection_propagates_unchanged() {
    let server = setup_mock_server().await;
    let bridge = MockWalletBridge::new(TEST_ADDRESS, TEST_SIGNATURE)
        .rejecting_accounts(BridgeError::user_rejected());
    let flow = flow_with_bridge(&server, Some(bridge));

    let err = assert_err!(flow.login().await);
    assert!(err.is_wallet_rejection());
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_logout_clears_session_without_network() {
    let server = setup_mock_server().await;
    mount_nonce(&server, 200).await;
    mount_verify(&server, 200).await;

    let flow = flow_with_bridge(
        &server,
        Some(MockWalletBridge::new(TEST_ADDRESS, TEST_SIGNATURE)),
    );
    assert_ok!(flow.login().await);
    let requests_before = server.received_requests().await.unwrap_or_default().len();

    // Auth server unreachable from here on; logout must not care
    server.reset().await;
    flow.logout();

    assert!(!flow.session().is_signed_in());
    assert!(matches!(flow.view(), SignInView::SignIn { .. }));
    assert_eq!(requests_before, 2);
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_second_login_while_in_flight_is_rejected() {
    let server = setup_mock_server().await;
    mount_nonce(&server, 200).await;

    let bridge = MockWalletBridge::new(TEST_ADDRESS, TEST_SIGNATURE).hanging_signature();
    let flow = Arc::new(flow_with_bridge(&server, Some(bridge.clone())));

    let first = tokio::spawn({
        let flow = Arc::clone(&flow);
        async move { flow.login().await }
    });

    while bridge.sign_requests().is_empty() {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert!(flow.session().is_authenticating());
    assert_eq!(
        flow.view(),
        SignInView::SignIn {
            authenticating: true,
            last_error: None,
        }
    );

    let err = assert_err!(flow.login().await);
    assert!(matches!(err, WalletgateError::LoginInProgress));

    // Cancelling the pending login releases the guard
    first.abort();
    let _ = first.await;
    assert!(!flow.session().is_authenticating());
    assert!(!flow.session().is_signed_in());
}

#[tokio::test]
async fn test_logout_during_login_cancels_it() {
    let server = setup_mock_server().await;
    mount_nonce(&server, 200).await;
    Mock::given(method("POST"))
        .and(path("/api/verify-signature"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "ens": "" }))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;

    let flow = Arc::new(flow_with_bridge(
        &server,
        Some(MockWalletBridge::new(TEST_ADDRESS, TEST_SIGNATURE)),
    ));
    let login = tokio::spawn({
        let flow = Arc::clone(&flow);
        async move { flow.login().await }
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(flow.session().is_authenticating());
    flow.logout();

    let err = assert_err!(login.await.expect("login task"));
    assert!(matches!(err, WalletgateError::LoginCancelled));
    assert!(!flow.session().is_signed_in());
    assert!(!flow.session().is_authenticating());
    assert_eq!(flow.session().last_error(), None);

    // A fresh login after the logout goes through
    assert_ok!(flow.login().await);
    assert!(flow.session().is_signed_in());
}
