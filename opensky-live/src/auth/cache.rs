//! Bearer token cache and clock abstraction.

use std::time::Instant;

use parking_lot::RwLock;

/// Source of the current instant, substitutable in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A bearer token and the instant after which it must not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedToken {
    value: String,
    expires_at: Instant,
}

impl CachedToken {
    pub fn new(value: impl Into<String>, expires_at: Instant) -> Self {
        Self {
            value: value.into(),
            expires_at,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn expires_at(&self) -> Instant {
        self.expires_at
    }

    /// A token is valid strictly before its expiry instant.
    pub fn is_valid_at(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Process-wide token slot.
///
/// Created once at startup and shared (`Arc`) with every token manager that
/// should reuse it. Entries are replaced whole, never edited; the lock is only
/// held for the copy in or out, never across a network call.
#[derive(Debug, Default)]
pub struct TokenCache {
    slot: RwLock<Option<CachedToken>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached token value if it is still valid at `now`.
    pub fn valid_token(&self, now: Instant) -> Option<String> {
        self.slot
            .read()
            .as_ref()
            .filter(|token| token.is_valid_at(now))
            .map(|token| token.value.clone())
    }

    /// Replaces the cached entry. Last write wins.
    pub fn replace(&self, token: CachedToken) {
        *self.slot.write() = Some(token);
    }

    /// Snapshot of the current entry, valid or not.
    pub fn snapshot(&self) -> Option<CachedToken> {
        self.slot.read().clone()
    }

    pub fn clear(&self) {
        *self.slot.write() = None;
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::time::Duration;

    /// Clock that only moves when told to.
    #[derive(Debug)]
    pub struct ManualClock {
        base: Instant,
        offset: Mutex<Duration>,
    }

    impl ManualClock {
        pub fn new() -> Self {
            Self {
                base: Instant::now(),
                offset: Mutex::new(Duration::ZERO),
            }
        }

        pub fn advance(&self, by: Duration) {
            *self.offset.lock() += by;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            self.base + *self.offset.lock()
        }
    }

    #[test]
    fn test_empty_cache() {
        let cache = TokenCache::new();
        assert_eq!(cache.valid_token(Instant::now()), None);
        assert!(cache.snapshot().is_none());
    }

    #[test]
    fn test_valid_until_expiry() {
        let clock = ManualClock::new();
        let cache = TokenCache::new();
        cache.replace(CachedToken::new("abc", clock.now() + Duration::from_secs(60)));

        assert_eq!(cache.valid_token(clock.now()).as_deref(), Some("abc"));

        clock.advance(Duration::from_secs(59));
        assert_eq!(cache.valid_token(clock.now()).as_deref(), Some("abc"));

        // now == expires_at is already expired
        clock.advance(Duration::from_secs(1));
        assert_eq!(cache.valid_token(clock.now()), None);
        assert!(cache.snapshot().is_some());
    }

    #[test]
    fn test_replace_and_clear() {
        let now = Instant::now();
        let cache = TokenCache::new();
        cache.replace(CachedToken::new("first", now + Duration::from_secs(10)));
        cache.replace(CachedToken::new("second", now + Duration::from_secs(10)));
        assert_eq!(cache.valid_token(now).as_deref(), Some("second"));

        cache.clear();
        assert_eq!(cache.valid_token(now), None);
    }
}
