/*
[INPUT]:  Wallet bridge and auth server client
[OUTPUT]: Signed-in session and the view a UI should render
[POS]:    Auth layer - orchestrates the sign-in handshake
[UPDATE]: When auth endpoints or flow steps change
*/

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::http::{AuthClient, Result, WalletgateError};

use super::{BridgeAvailability, BridgeResult, SessionStore, SignedInAccount, WalletBridge};

/// Provider the flow expects the wallet bridge to identify as
pub const DEFAULT_PROVIDER: &str = "metamask";

/// Shown instead of the sign-in control when no usable bridge exists
pub const INSTALL_WALLET_MESSAGE: &str = "Please install or enable MetaMask to get started";

/// Sign-in flow configuration
#[derive(Debug, Clone)]
pub struct FlowConfig {
    pub expected_provider: String,
    /// Upper bound on each wallet prompt; `None` waits indefinitely
    pub wallet_timeout: Option<Duration>,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            expected_provider: DEFAULT_PROVIDER.to_string(),
            wallet_timeout: None,
        }
    }
}

/// What the UI should render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInView {
    /// No usable wallet bridge: show instructions instead of a login control
    InstallWallet { availability: BridgeAvailability },
    /// Offer the sign-in trigger
    SignIn {
        authenticating: bool,
        last_error: Option<String>,
    },
    /// Show the address and a sign-out trigger
    SignedIn {
        address: String,
        ens: Option<String>,
    },
}

/// Drives login and logout against a wallet bridge and the auth server
pub struct SignInFlow {
    client: AuthClient,
    bridge: Option<Arc<dyn WalletBridge>>,
    config: FlowConfig,
    session: SessionStore,
}

impl fmt::Debug for SignInFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInFlow")
            .field("client", &self.client)
            .field("bridge_present", &self.bridge.is_some())
            .field("config", &self.config)
            .field("session", &self.session)
            .finish()
    }
}

impl SignInFlow {
    /// Create a flow expecting the default provider
    pub fn new(client: AuthClient, bridge: Option<Arc<dyn WalletBridge>>) -> Self {
        Self::with_config(client, bridge, FlowConfig::default())
    }

    pub fn with_config(
        client: AuthClient,
        bridge: Option<Arc<dyn WalletBridge>>,
        config: FlowConfig,
    ) -> Self {
        Self {
            client,
            bridge,
            config,
            session: SessionStore::new(),
        }
    }

    /// Session state, shareable with whatever renders it
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Capability check performed before offering login
    pub fn availability(&self) -> BridgeAvailability {
        BridgeAvailability::detect(self.bridge.as_deref(), &self.config.expected_provider)
    }

    pub fn view(&self) -> SignInView {
        let availability = self.availability();
        if !availability.is_usable() {
            return SignInView::InstallWallet { availability };
        }

        match self.session.account() {
            Some(account) => SignInView::SignedIn {
                address: account.address,
                ens: account.ens,
            },
            None => SignInView::SignIn {
                authenticating: self.session.is_authenticating(),
                last_error: self.session.last_error(),
            },
        }
    }

    /// Complete sign-in handshake
    ///
    /// 1. Request accounts from the wallet
    /// 2. Fetch a nonce for the selected address
    /// 3. Have the wallet sign `0x<hex nonce>`
    /// 4. Submit address and signature for verification
    /// 5. Store the signed-in account
    pub async fn login(&self) -> Result<SignedInAccount> {
        let availability = self.availability();
        let bridge = match self.bridge.as_deref() {
            Some(bridge) if availability.is_usable() => bridge,
            _ => return Err(WalletgateError::BridgeUnavailable(availability)),
        };

        let login = self.session.begin_login()?;
        info!(provider = %self.config.expected_provider, "starting wallet sign-in");

        match self.handshake(bridge).await {
            Ok(account) => {
                if !self.session.complete_login(&login, account.clone()) {
                    warn!(address = %account.address, "logout during sign-in, discarding result");
                    return Err(WalletgateError::LoginCancelled);
                }
                info!(address = %account.address, "wallet sign-in succeeded");
                Ok(account)
            }
            Err(err) => {
                warn!(error = %err, "wallet sign-in failed");
                self.session.record_failure(err.to_string());
                Err(err)
            }
        }
    }

    /// Clear the session; purely local
    pub fn logout(&self) {
        self.session.sign_out();
        info!("signed out");
    }

    async fn handshake(&self, bridge: &dyn WalletBridge) -> Result<SignedInAccount> {
        // Step 1: Account access
        let address = self.call_wallet(bridge.request_accounts()).await?;
        debug!(%address, "wallet account selected");

        // Step 2: Nonce
        let nonce = self.client.request_nonce(&address).await?;
        if nonce.is_empty() {
            return Err(WalletgateError::InvalidResponse(
                "auth server issued an empty nonce".to_string(),
            ));
        }

        // Step 3: Signature over the hex-encoded nonce
        let message = nonce.signing_message();
        debug!(%address, %message, "requesting personal signature");
        let signature = self
            .call_wallet(bridge.personal_sign(&message, &address))
            .await?;

        // Step 4: Verification; a rejected verification ends any earlier session
        let verified = match self.client.verify_signature(&address, &signature).await {
            Ok(verified) => verified,
            Err(err) => {
                self.session.clear_account();
                return Err(err);
            }
        };

        Ok(SignedInAccount {
            address,
            ens: verified.ens.filter(|name| !name.is_empty()),
        })
    }

    async fn call_wallet<T, F>(&self, call: F) -> Result<T>
    where
        F: Future<Output = BridgeResult<T>>,
    {
        match self.config.wallet_timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| WalletgateError::Timeout { duration: limit })?
                .map_err(WalletgateError::from),
            None => Ok(call.await?),
        }
    }
}
