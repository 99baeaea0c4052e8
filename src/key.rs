//! License key handling.

use crate::VerifyError;
use sha2::{Digest, Sha256};
use std::fmt;

/// Number of hex characters kept from the key digest for log output.
const FINGERPRINT_LEN: usize = 12;

/// A user-supplied license key, trimmed and known to be non-empty.
///
/// The key is opaque to the client; the remote service decides whether it
/// is genuine. `Debug` prints only the fingerprint so keys stay out of logs.
#[derive(Clone, PartialEq, Eq)]
pub struct LicenseKey(String);

impl LicenseKey {
    /// Trim surrounding whitespace and reject empty input.
    pub fn parse(raw: &str) -> Result<Self, VerifyError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(VerifyError::MissingLicense);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The key exactly as it will be sent.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the key has the issuer's `XXXX-XXXX-XXXX-XXXX` shape
    /// (groups of uppercase ASCII letters and digits).
    ///
    /// Advisory only: non-canonical keys are still submitted.
    pub fn is_canonical(&self) -> bool {
        let groups: Vec<&str> = self.0.split('-').collect();
        groups.len() == 4
            && groups.iter().all(|g| {
                g.len() == 4
                    && g.bytes()
                        .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
            })
    }

    /// Short SHA-256 hex prefix identifying the key in logs.
    pub fn fingerprint(&self) -> String {
        let hash = Sha256::digest(self.0.as_bytes());
        let mut hex = hex::encode(hash);
        hex.truncate(FINGERPRINT_LEN);
        hex
    }
}

impl fmt::Debug for LicenseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LicenseKey").field(&self.fingerprint()).finish()
    }
}
