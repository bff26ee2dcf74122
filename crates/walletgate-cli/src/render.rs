/*
[INPUT]:  Sign-in view state
[OUTPUT]: Terminal lines describing what the user can do
[POS]:    Presentation layer - text rendering of the sign-in view
[UPDATE]: When SignInView variants change
*/

use walletgate_adapter::SignInView;
use walletgate_adapter::auth::INSTALL_WALLET_MESSAGE;

/// Lines shown for a view, top to bottom
pub fn render_view(view: &SignInView) -> Vec<String> {
    match view {
        SignInView::InstallWallet { availability } => vec![
            INSTALL_WALLET_MESSAGE.to_string(),
            format!("({availability})"),
        ],
        SignInView::SignIn {
            authenticating: true,
            ..
        } => vec!["Signing in, check your wallet...".to_string()],
        SignInView::SignIn {
            authenticating: false,
            last_error,
        } => {
            let mut lines = vec!["Not signed in. Run `walletgate login` to sign in.".to_string()];
            if let Some(error) = last_error {
                lines.push(format!("Sign-in failed: {error}"));
            }
            lines
        }
        SignInView::SignedIn { address, ens } => {
            let mut lines = vec![
                "Successfully signed in!".to_string(),
                format!("ETH address {address}"),
            ];
            if let Some(name) = ens {
                lines.push(format!("ENS name {name}"));
            }
            lines
        }
    }
}
