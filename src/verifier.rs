//! License verifier - the main public API for Launchgate.
//!
//! The `LicenseVerifier` performs one verification round-trip per call and
//! always answers with a [`VerificationResult`]:
//! - 2xx replies are decoded and classified
//! - non-2xx replies become `error` with the status code
//! - transport and decoding failures become `error` with a diagnostic

use crate::client::http::VerifyClient;
use crate::config::VerifierConfig;
use crate::key::LicenseKey;
use crate::protocol::models::{parse_verify_response, VerificationResult};
use crate::VerifyError;
use tracing::{debug, warn};

/// Verification client bound to one service address.
pub struct LicenseVerifier {
    config: VerifierConfig,
    client: VerifyClient,
}

impl LicenseVerifier {
    /// Create a verifier with the given configuration.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Configuration validation fails
    /// - HTTP client creation fails
    pub fn new(config: VerifierConfig) -> Result<Self, VerifyError> {
        config.validate()?;
        let client = VerifyClient::new(&config)?;
        Ok(Self { config, client })
    }

    /// Verify a license key against the service.
    ///
    /// Never fails: every failure is reported as an `error` status with a
    /// diagnostic message.
    pub fn verify(&self, key: &LicenseKey) -> VerificationResult {
        if !key.is_canonical() {
            debug!(key = %key.fingerprint(), "license key is not in XXXX-XXXX-XXXX-XXXX form; submitting anyway");
        }

        match self.try_verify(key) {
            Ok(result) => {
                debug!(key = %key.fingerprint(), status = %result.status(), "license verified");
                result
            }
            Err(err) => {
                warn!(key = %key.fingerprint(), error = %err, "verification failed");
                VerificationResult::error(err.diagnostic())
            }
        }
    }

    /// Whether `key` is currently valid.
    pub fn is_valid(&self, key: &LicenseKey) -> bool {
        self.verify(key).is_valid()
    }

    /// Get the current configuration.
    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    fn try_verify(&self, key: &LicenseKey) -> Result<VerificationResult, VerifyError> {
        let reply = self.client.fetch(key)?;
        if !reply.is_success() {
            return Err(VerifyError::HttpStatus(reply.status));
        }

        let response = parse_verify_response(&reply.body)?;
        VerificationResult::from_response(response)
    }
}

/// Verify `key` against the service rooted at `base_url` with default settings.
///
/// Configuration problems are reported the same way as transport failures.
pub fn verify(base_url: &str, key: &LicenseKey) -> VerificationResult {
    match LicenseVerifier::new(VerifierConfig::new(base_url)) {
        Ok(verifier) => verifier.verify(key),
        Err(err) => VerificationResult::error(err.diagnostic()),
    }
}

/// Shorthand for `verify(base_url, key).is_valid()`.
pub fn is_valid(base_url: &str, key: &LicenseKey) -> bool {
    verify(base_url, key).is_valid()
}
