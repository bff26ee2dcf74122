/*
[INPUT]:  Wallet addresses and issued nonces
[OUTPUT]: Outstanding nonce lookup and single-use consumption
[POS]:    Storage layer - in-memory nonce store
[UPDATE]: When nonce lifetime rules change
*/

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use alloy_primitives::Address;

/// How long an issued nonce stays usable
pub const DEFAULT_NONCE_TTL: Duration = Duration::from_secs(300);

#[derive(Debug, Clone)]
struct IssuedNonce {
    nonce: String,
    issued_at: Instant,
}

/// Outstanding nonces keyed by wallet address
///
/// Entries older than the TTL are treated as absent and are purged
/// whenever a new nonce is stored.
#[derive(Debug, Clone)]
pub struct NonceStore {
    nonces: Arc<Mutex<HashMap<Address, IssuedNonce>>>,
    ttl: Duration,
}

impl Default for NonceStore {
    fn default() -> Self {
        Self::with_ttl(DEFAULT_NONCE_TTL)
    }
}

impl NonceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            nonces: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Address, IssuedNonce>> {
        self.nonces.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_live(&self, entry: &IssuedNonce, now: Instant) -> bool {
        now.duration_since(entry.issued_at) < self.ttl
    }

    /// Store a nonce for `address`, replacing any earlier one
    pub fn set(&self, address: Address, nonce: String) {
        let now = Instant::now();
        let mut nonces = self.lock();
        let before = nonces.len();
        nonces.retain(|_, entry| self.is_live(entry, now));
        let purged = before - nonces.len();
        if purged > 0 {
            tracing::debug!(purged, "expired nonces purged");
        }
        nonces.insert(
            address,
            IssuedNonce {
                nonce,
                issued_at: now,
            },
        );
    }

    /// Live nonce for `address`, if any
    pub fn get(&self, address: &Address) -> Option<String> {
        let now = Instant::now();
        self.lock()
            .get(address)
            .filter(|entry| self.is_live(entry, now))
            .map(|entry| entry.nonce.clone())
    }

    /// Remove the nonce for `address` if it is still `nonce` and unexpired
    ///
    /// Returns false when it was already consumed, replaced or expired.
    pub fn consume(&self, address: &Address, nonce: &str) -> bool {
        let now = Instant::now();
        let mut nonces = self.lock();
        match nonces.get(address) {
            Some(entry) if entry.nonce == nonce && self.is_live(entry, now) => {
                nonces.remove(address);
                true
            }
            _ => false,
        }
    }

    /// Number of stored entries, expired ones included until the next purge
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
