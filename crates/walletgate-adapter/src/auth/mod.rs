/*
[INPUT]:  Wallet bridge, auth server client, session state
[OUTPUT]: Signed-in account, view state, and auth errors
[POS]:    Auth layer - handles wallet sign-in
[UPDATE]: When auth flow or bridge capabilities change
*/

pub mod bridge;
pub mod evm_wallet;
pub mod manager;
pub mod session;

pub use bridge::{
    BridgeAvailability, BridgeError, BridgeResult, MockWalletBridge, SignRequest,
    USER_REJECTED_CODE, WalletBridge,
};
pub use evm_wallet::LocalWalletBridge;
pub use manager::{DEFAULT_PROVIDER, FlowConfig, INSTALL_WALLET_MESSAGE, SignInFlow, SignInView};
pub use session::{SessionStore, SignedInAccount};
