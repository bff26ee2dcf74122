/*
[INPUT]:  Login outcomes and logout requests
[OUTPUT]: Signed-in account, in-flight flag and last login error
[POS]:    Auth layer - in-memory session state
[UPDATE]: When adding session fields or changing login guarding
*/

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::http::{Result, WalletgateError};

/// Account established by a successful verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedInAccount {
    pub address: String,
    pub ens: Option<String>,
}

#[derive(Debug, Default)]
struct SessionInner {
    account: Option<SignedInAccount>,
    authenticating: bool,
    last_error: Option<String>,
    /// Bumped by every sign-out; logins started before it cannot complete
    generation: u64,
}

/// Thread-safe session state shared between the flow and its UI
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<SessionInner>>,
}

impl SessionStore {
    /// Create a signed-out session
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Signed-in address, if any
    pub fn address(&self) -> Option<String> {
        self.read().account.as_ref().map(|account| account.address.clone())
    }

    pub fn account(&self) -> Option<SignedInAccount> {
        self.read().account.clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.read().account.is_some()
    }

    pub fn is_authenticating(&self) -> bool {
        self.read().authenticating
    }

    /// Error of the most recent failed login, cleared by the next attempt
    pub fn last_error(&self) -> Option<String> {
        self.read().last_error.clone()
    }

    /// Mark a login as in flight
    ///
    /// Fails while another login holds the guard. Dropping the guard,
    /// including by cancelling the login future, releases it.
    pub(crate) fn begin_login(&self) -> Result<LoginGuard> {
        let mut guard = self.write();
        if guard.authenticating {
            return Err(WalletgateError::LoginInProgress);
        }
        guard.authenticating = true;
        guard.last_error = None;

        Ok(LoginGuard {
            inner: Arc::clone(&self.inner),
            generation: guard.generation,
        })
    }

    /// Store the account of a finished login
    ///
    /// Returns false, leaving the session signed out, when a sign-out
    /// happened after the login began.
    pub(crate) fn complete_login(&self, login: &LoginGuard, account: SignedInAccount) -> bool {
        let mut guard = self.write();
        if guard.generation != login.generation {
            return false;
        }
        guard.account = Some(account);
        guard.last_error = None;
        true
    }

    #[cfg(test)]
    pub(crate) fn sign_in(&self, account: SignedInAccount) {
        let mut guard = self.write();
        guard.account = Some(account);
        guard.last_error = None;
    }

    /// Forget the signed-in account without touching the error state
    pub(crate) fn clear_account(&self) {
        self.write().account = None;
    }

    pub(crate) fn record_failure(&self, message: String) {
        self.write().last_error = Some(message);
    }

    /// Clear the account and any login error
    pub fn sign_out(&self) {
        let mut guard = self.write();
        guard.account = None;
        guard.last_error = None;
        guard.generation = guard.generation.wrapping_add(1);
    }
}

/// Holds the in-flight flag for the duration of one login
#[derive(Debug)]
pub(crate) struct LoginGuard {
    inner: Arc<RwLock<SessionInner>>,
    generation: u64,
}

impl Drop for LoginGuard {
    fn drop(&mut self) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .authenticating = false;
    }
}
