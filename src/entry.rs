use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A stored value together with the instant it stops being visible
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry<V> {
    pub value: V,
    pub expiration: DateTime<Utc>,
}

impl<V> Entry<V> {
    /// Creates an entry that expires at the given instant
    pub fn new(value: V, expiration: DateTime<Utc>) -> Self {
        Self { value, expiration }
    }

    /// Creates an entry that expires `ttl` from now
    ///
    /// A zero or negative `ttl` yields an entry that is already stale.
    pub fn with_ttl(value: V, ttl: Duration) -> Self {
        Self::new(value, expires_after(Utc::now(), ttl))
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn expiration(&self) -> DateTime<Utc> {
        self.expiration
    }

    /// Checks whether this entry has expired as of `now`
    ///
    /// An entry is still valid at the exact instant it expires.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiration < now
    }
}

/// `now + ttl`, clamped to the representable range
fn expires_after(now: DateTime<Utc>, ttl: Duration) -> DateTime<Utc> {
    now.checked_add_signed(ttl).unwrap_or(if ttl < Duration::zero() {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}
