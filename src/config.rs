use chrono::Duration;

/// Configuration for a [`Store`](crate::Store)
///
/// # Example
///
/// ```rust
/// use memkv::StoreConfig;
/// use chrono::Duration;
///
/// let config = StoreConfig::default()
///     .with_default_ttl(Duration::minutes(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// TTL applied by `set` when no explicit one is given (default: 5 minutes)
    pub default_ttl: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            default_ttl: Duration::minutes(5),
        }
    }
}

impl StoreConfig {
    /// Creates a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default TTL
    pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = ttl;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.default_ttl, Duration::minutes(5));
        assert_eq!(config, StoreConfig::new());
    }

    #[test]
    fn test_custom_default_ttl() {
        let config = StoreConfig::default().with_default_ttl(Duration::seconds(30));
        assert_eq!(config.default_ttl, Duration::seconds(30));
    }
}
