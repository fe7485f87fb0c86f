//! Nonce generation for Poloniex API authentication.
//!
//! Every private request must carry a nonce greater than the last one the
//! exchange saw for the same API key, otherwise it is rejected.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::PoloniexError;

/// Trait for providing nonces for authenticated requests.
///
/// The nonce must be strictly increasing for each request.
pub trait NonceProvider: Send + Sync {
    /// Generate the next nonce value.
    ///
    /// This value must be greater than any previously returned value. Fails
    /// once no greater value can be represented.
    fn next_nonce(&self) -> Result<u64, PoloniexError>;
}

/// A nonce provider that generates strictly increasing nonces based on time.
///
/// The counter is seeded with the construction time in microseconds since the
/// UNIX epoch. Each allocation re-reads the clock and returns
/// `max(now, last + 1)`, so a clock that stalls or steps backwards still
/// yields increasing values.
pub struct IncreasingNonce {
    last_nonce: AtomicU64,
}

impl IncreasingNonce {
    /// Create a new increasing nonce provider seeded from the current time.
    pub fn new() -> Self {
        Self::starting_after(Self::current_time_micros())
    }

    /// Create a provider whose first nonce is greater than `last`.
    ///
    /// Useful when the last nonce sent with a key is known, e.g. after a
    /// restart with a clock that is behind.
    pub fn starting_after(last: u64) -> Self {
        Self {
            last_nonce: AtomicU64::new(last),
        }
    }

    /// Get current time in microseconds since UNIX epoch.
    fn current_time_micros() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_micros() as u64
    }
}

impl Default for IncreasingNonce {
    fn default() -> Self {
        Self::new()
    }
}

impl NonceProvider for IncreasingNonce {
    fn next_nonce(&self) -> Result<u64, PoloniexError> {
        let time_nonce = Self::current_time_micros();

        loop {
            let last = self.last_nonce.load(Ordering::SeqCst);
            let next = last
                .checked_add(1)
                .ok_or_else(|| PoloniexError::Auth(format!("nonce exhausted after {last}")))?
                .max(time_nonce);

            if self
                .last_nonce
                .compare_exchange(last, next, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                tracing::trace!(nonce = next, "allocated nonce");
                return Ok(next);
            }
            // Lost the race to another caller; retry from its value.
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn test_nonce_strictly_increasing() {
        let provider = IncreasingNonce::new();

        let mut last = 0u64;
        for _ in 0..1000 {
            let nonce = provider.next_nonce().unwrap();
            assert!(nonce > last, "Nonce must be strictly increasing");
            last = nonce;
        }
    }

    #[test]
    fn test_nonce_seeded_from_clock_in_micros() {
        let before = IncreasingNonce::current_time_micros();
        let nonce = IncreasingNonce::new().next_nonce().unwrap();
        // Sixteen digits for any date between 2001 and 2286.
        assert_eq!(nonce.to_string().len(), 16);
        assert!(nonce > before);
    }

    #[test]
    fn test_nonce_ahead_of_clock_still_increases() {
        let far_future = IncreasingNonce::current_time_micros() + 3_600_000_000;
        let provider = IncreasingNonce::starting_after(far_future);

        assert_eq!(provider.next_nonce().unwrap(), far_future + 1);
        assert_eq!(provider.next_nonce().unwrap(), far_future + 2);
    }

    #[test]
    fn test_nonce_exhaustion_is_an_error() {
        let provider = IncreasingNonce::starting_after(u64::MAX - 1);

        assert_eq!(provider.next_nonce().unwrap(), u64::MAX);
        assert!(matches!(provider.next_nonce(), Err(PoloniexError::Auth(_))));
        // The counter is left untouched.
        assert!(provider.next_nonce().is_err());
    }

    #[test]
    fn test_nonce_unique_across_threads() {
        let provider = std::sync::Arc::new(IncreasingNonce::new());
        let mut handles = vec![];

        for _ in 0..4 {
            let p = provider.clone();
            handles.push(thread::spawn(move || {
                let mut nonces = Vec::new();
                for _ in 0..1000 {
                    nonces.push(p.next_nonce().unwrap());
                }
                nonces
            }));
        }

        let mut all_nonces = HashSet::new();
        for handle in handles {
            let nonces = handle.join().unwrap();
            assert!(nonces.windows(2).all(|w| w[0] < w[1]));
            for nonce in nonces {
                assert!(
                    all_nonces.insert(nonce),
                    "Nonce must be unique across threads"
                );
            }
        }
    }
}
