/*
[INPUT]:  Auth server URL and a test private key
[OUTPUT]: Signed-in view state
[POS]:    Examples - sign-in flow demonstration
[UPDATE]: When auth flow changes
*/

use std::sync::Arc;

use walletgate_adapter::*;

/// Example: wallet sign-in against a running walletgate-server
///
/// 1. Create HTTP client
/// 2. Create a local-key wallet bridge
/// 3. Check the bridge is usable
/// 4. Run the handshake
/// 5. Log out again
#[tokio::main]
async fn main() {
    println!("=== walletgate Sign-In Example ===\n");

    let base_url =
        std::env::var("WALLETGATE_SERVER").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let client = match AuthClient::with_config(ClientConfig::default(), &base_url) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created for {}", base_url);

    // Hardhat/anvil account #0; never use for real funds
    let pk = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    let bridge = match LocalWalletBridge::new(pk) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Failed to create wallet bridge: {}", e);
            return;
        }
    };
    println!("✓ Wallet bridge for {}", bridge.address());

    let flow = SignInFlow::with_config(
        client,
        Some(Arc::new(bridge)),
        FlowConfig {
            expected_provider: LocalWalletBridge::PROVIDER.to_string(),
            ..FlowConfig::default()
        },
    );
    println!("✓ Bridge availability: {}", flow.availability());

    match flow.login().await {
        Ok(account) => println!("✓ Signed in as {}", account.address),
        Err(e) => {
            eprintln!("✗ Sign-in failed: {}", e);
            return;
        }
    }
    println!("  View: {:?}", flow.view());

    flow.logout();
    println!("✓ Logged out, view: {:?}", flow.view());
}
