/// Configuration for a [`Sanitizer`](crate::Sanitizer).
///
/// The fallback `limit` is substituted whenever numeric coercion has no
/// digits to work with or the converter rejects them.
///
/// # Examples
///
/// ```
/// use destroy_invalids::SanitizerConfig;
///
/// let config = SanitizerConfig::new(10);
/// assert_eq!(config.limit(), 10);
///
/// assert_eq!(SanitizerConfig::default().limit(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SanitizerConfig {
    limit: i64,
}

impl SanitizerConfig {
    /// Fallback limit used by [`SanitizerConfig::default`].
    pub const DEFAULT_LIMIT: i64 = 0;

    /// Creates a configuration with the given fallback limit.
    pub fn new(limit: i64) -> Self {
        Self { limit }
    }

    /// Returns the fallback limit.
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Returns a copy of this configuration with a different fallback limit.
    pub fn with_limit(self, limit: i64) -> Self {
        Self { limit }
    }
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIMIT)
    }
}
