//! Launchgate configuration.

use crate::VerifyError;
use std::time::Duration;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Longest accepted request timeout.
pub const MAX_TIMEOUT: Duration = Duration::from_secs(300);

/// Default User-Agent product token.
pub const DEFAULT_PRODUCT: &str = "launchgate";

/// Configuration for a [`LicenseVerifier`](crate::LicenseVerifier).
#[derive(Debug, Clone)]
pub struct VerifierConfig {
    /// Service root address (e.g. `https://licenses.example.com`).
    /// Trailing slashes are ignored.
    pub base_url: String,

    /// Upper bound on the whole verification round-trip.
    pub timeout: Duration,

    /// User-Agent product identifier (e.g. "myapp").
    pub user_agent_product: String,
}

impl VerifierConfig {
    /// Create a config for the given service address with default settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent_product: DEFAULT_PRODUCT.to_string(),
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent product token.
    pub fn with_user_agent_product(mut self, product: impl Into<String>) -> Self {
        self.user_agent_product = product.into();
        self
    }

    /// Validate configuration for obvious errors.
    pub fn validate(&self) -> Result<(), VerifyError> {
        if self.base_url.trim().is_empty() {
            return Err(VerifyError::Config("base_url cannot be empty".to_string()));
        }
        if self.timeout.is_zero() {
            return Err(VerifyError::Config(
                "timeout must be greater than zero".to_string(),
            ));
        }
        if self.timeout > MAX_TIMEOUT {
            return Err(VerifyError::Config(format!(
                "timeout must be at most {}s, got {}s",
                MAX_TIMEOUT.as_secs(),
                self.timeout.as_secs()
            )));
        }
        if self.user_agent_product.trim().is_empty() {
            return Err(VerifyError::Config(
                "user_agent_product cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
