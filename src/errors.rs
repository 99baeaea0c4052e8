//! Launchgate error types.

use thiserror::Error;

/// Errors that can occur while preparing or performing a verification.
///
/// `HttpStatus`, `Transport` and `Protocol` never escape
/// [`LicenseVerifier::verify`](crate::LicenseVerifier::verify); they are
/// folded into an error-status [`VerificationResult`](crate::VerificationResult).
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No license key provided (empty after trimming).
    #[error("No license key provided")]
    MissingLicense,

    /// The service answered with a non-2xx status code.
    #[error("API request failed: {0}")]
    HttpStatus(u16),

    /// The request could not be completed (connect, DNS, bad URL, timeout).
    #[error("{0}")]
    Transport(String),

    /// The response body did not match the expected structure.
    #[error("invalid response body: {0}")]
    Protocol(String),
}

impl VerifyError {
    /// Message carried by an error-status result built from this error.
    pub fn diagnostic(&self) -> String {
        match self {
            VerifyError::HttpStatus(_) => self.to_string(),
            other => format!("verification failed: {}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_diagnostic_names_the_code() {
        assert_eq!(
            VerifyError::HttpStatus(500).diagnostic(),
            "API request failed: 500"
        );
    }

    #[test]
    fn transport_diagnostic_is_prefixed() {
        let err = VerifyError::Transport("connection refused".to_string());
        assert_eq!(err.diagnostic(), "verification failed: connection refused");
    }

    #[test]
    fn protocol_diagnostic_mentions_body() {
        let err = VerifyError::Protocol("expected value at line 1".to_string());
        assert_eq!(
            err.diagnostic(),
            "verification failed: invalid response body: expected value at line 1"
        );
    }
}
