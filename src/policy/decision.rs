//! Launch decision derived from a verification result.

use crate::protocol::models::{LicenseStatus, VerificationResult};

/// Process exit code when launch is allowed.
pub const EXIT_PROCEED: u8 = 0;

/// Process exit code when launch is denied.
pub const EXIT_DENY: u8 = 1;

/// Whether the calling application may start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchDecision {
    /// License accepted; launch.
    Proceed,
    /// Launch refused.
    Deny,
}

impl LaunchDecision {
    /// Only a `valid` status allows launch.
    pub fn from_result(result: &VerificationResult) -> Self {
        match result.status() {
            LicenseStatus::Valid => Self::Proceed,
            LicenseStatus::Expired
            | LicenseStatus::Disabled
            | LicenseStatus::NotFound
            | LicenseStatus::Error => Self::Deny,
        }
    }

    /// Exit code for the entry point.
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Proceed => EXIT_PROCEED,
            Self::Deny => EXIT_DENY,
        }
    }

    /// Whether launch is allowed.
    pub fn allows_launch(self) -> bool {
        self == Self::Proceed
    }
}
