//! Reqwest-based HTTP client for the verification service.
//!
//! This module only moves bytes: it builds the endpoint URL, issues the
//! GET and captures status and body. Classification happens in
//! [`crate::verifier`].

use crate::config::VerifierConfig;
use crate::key::LicenseKey;
use crate::VerifyError;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Url;
use tracing::debug;

/// Fixed path segment under the service root.
pub const VERIFY_SEGMENT: &str = "verify";

/// HTTP reply with status and raw body.
#[derive(Debug)]
pub struct VerifyReply {
    /// HTTP status code.
    pub status: u16,

    /// Raw response body.
    pub body: Vec<u8>,
}

impl VerifyReply {
    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Verification service HTTP client.
pub struct VerifyClient {
    client: Client,
    user_agent: String,
    base_url: String,
}

impl VerifyClient {
    /// Create a new client from config.
    pub fn new(config: &VerifierConfig) -> Result<Self, VerifyError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| VerifyError::Transport(format!("Failed to create client: {}", e)))?;

        Ok(Self {
            client,
            user_agent: build_user_agent(config),
            base_url: config.base_url.clone(),
        })
    }

    /// Send one GET to the verify endpoint for `key`.
    ///
    /// Non-2xx replies are returned as-is; only transport failures are errors.
    pub fn fetch(&self, key: &LicenseKey) -> Result<VerifyReply, VerifyError> {
        let url = verify_url(&self.base_url, key)?;
        debug!(host = url.host_str().unwrap_or(""), key = %key.fingerprint(), "sending verify request");

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| VerifyError::Transport(describe(&e)))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|e| VerifyError::Transport(format!("failed to read body: {}", describe(&e))))?
            .to_vec();

        debug!(status, bytes = body.len(), "verify response received");
        Ok(VerifyReply { status, body })
    }

    /// The configured service root.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Compose `{base_url}/verify/{key}`.
///
/// Trailing slashes on `base_url` are dropped and the key is pushed as a
/// single percent-encoded path segment, so `/`, `?` or `#` in a key cannot
/// change the request target.
pub fn verify_url(base_url: &str, key: &LicenseKey) -> Result<Url, VerifyError> {
    let trimmed = base_url.trim().trim_end_matches('/');
    let mut url = Url::parse(trimmed)
        .map_err(|e| VerifyError::Transport(format!("invalid service URL \"{}\": {}", trimmed, e)))?;

    url.path_segments_mut()
        .map_err(|_| {
            VerifyError::Transport(format!("service URL \"{}\" cannot carry a path", trimmed))
        })?
        .pop_if_empty()
        .push(VERIFY_SEGMENT)
        .push(key.as_str());

    Ok(url)
}

/// Build a User-Agent string from config.
///
/// Format: `<product>/launchgate-<version>`
pub fn build_user_agent(config: &VerifierConfig) -> String {
    format!(
        "{}/launchgate-{}",
        config.user_agent_product,
        env!("CARGO_PKG_VERSION")
    )
}

/// Flatten a reqwest error and its sources into one line.
fn describe(err: &reqwest::Error) -> String {
    let mut text = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.contains(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = std::error::Error::source(cause);
    }
    text
}
