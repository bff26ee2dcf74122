/*
[INPUT]:  Injected wallet bridge (browser extension, local key, test double)
[OUTPUT]: Selected account, personal-message signatures, availability check
[POS]:    Auth layer - wallet bridge abstraction
[UPDATE]: When adding new bridge types or changing the capability check
*/

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use thiserror::Error;

/// Error code wallets use when the user declines a prompt (EIP-1193)
pub const USER_REJECTED_CODE: i64 = 4001;

/// Errors raised by the wallet bridge itself
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// The user declined, or the wallet refused the request
    #[error("wallet rejected the request (code {code}): {message}")]
    Rejected { code: i64, message: String },

    /// The bridge lost its connection to the wallet
    #[error("wallet bridge disconnected")]
    Disconnected,

    /// Any other bridge failure
    #[error("wallet bridge error: {0}")]
    Other(String),
}

impl BridgeError {
    /// Rejection with the standard user-declined code
    pub fn user_rejected() -> Self {
        BridgeError::Rejected {
            code: USER_REJECTED_CODE,
            message: "User rejected the request.".to_string(),
        }
    }
}

pub type BridgeResult<T> = std::result::Result<T, BridgeError>;

/// Trait for wallet bridge operations
///
/// Mirrors what a browser-injected wallet exposes: a self-identification,
/// account access and personal-message signing. Each call may prompt the user.
#[async_trait]
pub trait WalletBridge: Send + Sync {
    /// Provider the bridge identifies as (e.g. "metamask"), if any
    fn provider(&self) -> Option<&str>;

    /// Request account access and return the currently selected address
    async fn request_accounts(&self) -> BridgeResult<String>;

    /// Sign `message` as a personal message with the account at `address`
    ///
    /// A `0x`-prefixed hex message is signed as the decoded bytes.
    async fn personal_sign(&self, message: &str, address: &str) -> BridgeResult<String>;
}

/// Result of checking whether a usable wallet bridge is present
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeAvailability {
    /// No bridge in this environment
    Absent,
    /// A bridge exists but does not identify as the expected provider
    WrongProvider { found: Option<String> },
    /// Bridge present and identifies as the expected provider
    Usable,
}

impl BridgeAvailability {
    pub fn detect(bridge: Option<&dyn WalletBridge>, expected_provider: &str) -> Self {
        let Some(bridge) = bridge else {
            return BridgeAvailability::Absent;
        };

        match bridge.provider() {
            Some(found) if found.eq_ignore_ascii_case(expected_provider) => {
                BridgeAvailability::Usable
            }
            found => BridgeAvailability::WrongProvider {
                found: found.map(str::to_string),
            },
        }
    }

    pub fn is_usable(&self) -> bool {
        matches!(self, BridgeAvailability::Usable)
    }
}

impl fmt::Display for BridgeAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeAvailability::Absent => write!(f, "no wallet bridge present"),
            BridgeAvailability::WrongProvider { found: Some(found) } => {
                write!(f, "unexpected wallet provider '{found}'")
            }
            BridgeAvailability::WrongProvider { found: None } => {
                write!(f, "wallet bridge does not identify its provider")
            }
            BridgeAvailability::Usable => write!(f, "wallet bridge usable"),
        }
    }
}

/// A `personal_sign` call observed by [`MockWalletBridge`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignRequest {
    pub message: String,
    pub address: String,
}

#[derive(Debug, Clone)]
enum SignBehavior {
    Approve(String),
    Reject(BridgeError),
    Hang,
}

/// Mock wallet bridge for testing
///
/// Approves by default. Clones share the recorded sign requests.
#[derive(Debug, Clone)]
pub struct MockWalletBridge {
    provider: Option<String>,
    accounts: BridgeResult<String>,
    sign: SignBehavior,
    sign_requests: Arc<Mutex<Vec<SignRequest>>>,
}

impl MockWalletBridge {
    /// Create a mock that identifies as MetaMask and approves every prompt
    pub fn new(address: &str, signature: &str) -> Self {
        Self {
            provider: Some(crate::auth::DEFAULT_PROVIDER.to_string()),
            accounts: Ok(address.to_string()),
            sign: SignBehavior::Approve(signature.to_string()),
            sign_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_provider(mut self, provider: Option<&str>) -> Self {
        self.provider = provider.map(str::to_string);
        self
    }

    pub fn rejecting_accounts(mut self, error: BridgeError) -> Self {
        self.accounts = Err(error);
        self
    }

    pub fn rejecting_signature(mut self, error: BridgeError) -> Self {
        self.sign = SignBehavior::Reject(error);
        self
    }

    /// Never answer signature prompts
    pub fn hanging_signature(mut self) -> Self {
        self.sign = SignBehavior::Hang;
        self
    }

    /// Sign prompts issued so far
    pub fn sign_requests(&self) -> Vec<SignRequest> {
        self.sign_requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl WalletBridge for MockWalletBridge {
    fn provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }

    async fn request_accounts(&self) -> BridgeResult<String> {
        self.accounts.clone()
    }

    async fn personal_sign(&self, message: &str, address: &str) -> BridgeResult<String> {
        self.sign_requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(SignRequest {
                message: message.to_string(),
                address: address.to_string(),
            });

        match &self.sign {
            SignBehavior::Approve(signature) => Ok(signature.clone()),
            SignBehavior::Reject(error) => Err(error.clone()),
            SignBehavior::Hang => std::future::pending().await,
        }
    }
}
