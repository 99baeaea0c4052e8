//! Verification response structs and result classification.

use crate::VerifyError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::fmt;
use tracing::debug;

/// Raw verify response body.
///
/// The documented contract uses camelCase keys; some deployments
/// emit snake_case. Both are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyResponse {
    /// One of `valid`, `expired`, `disabled`, `not_found`, `error`.
    pub status: String,
    /// Plan label.
    #[serde(default, rename = "planType", alias = "plan_type")]
    pub plan_type: Option<String>,
    /// Expiry timestamp as sent.
    #[serde(default, rename = "endDate", alias = "end_date")]
    pub end_date: Option<String>,
    /// Bound email.
    #[serde(default, rename = "userEmail", alias = "user_email")]
    pub user_email: Option<String>,
    /// Diagnostic text.
    #[serde(default)]
    pub message: Option<String>,
}

/// Closed set of license states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LicenseStatus {
    /// License accepted.
    Valid,
    /// License recognized but past its validity window.
    Expired,
    /// License recognized but administratively revoked.
    Disabled,
    /// Key does not match any known license.
    NotFound,
    /// Verification could not be completed.
    Error,
}

impl LicenseStatus {
    /// Map a wire status string to a known state.
    ///
    /// Returns `None` for anything outside the five defined values.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "valid" => Some(Self::Valid),
            "expired" => Some(Self::Expired),
            "disabled" => Some(Self::Disabled),
            "not_found" => Some(Self::NotFound),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    /// Wire spelling of this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Expired => "expired",
            Self::Disabled => "disabled",
            Self::NotFound => "not_found",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LicenseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified outcome of one verification call.
///
/// Built once and never modified; fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    status: LicenseStatus,
    plan_type: Option<String>,
    end_date: Option<NaiveDateTime>,
    user_email: Option<String>,
    message: Option<String>,
}

impl VerificationResult {
    /// Error-status result carrying a diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: LicenseStatus::Error,
            plan_type: None,
            end_date: None,
            user_email: None,
            message: Some(message.into()),
        }
    }

    /// Classify a decoded response body.
    ///
    /// Unknown status strings become `Error`. On a `valid` status an
    /// `endDate` that cannot be parsed is a protocol error, so a time-limited
    /// license is never mistaken for a perpetual one; on other statuses it
    /// is dropped.
    pub fn from_response(response: VerifyResponse) -> Result<Self, VerifyError> {
        let (status, message) = match LicenseStatus::from_wire(&response.status) {
            Some(status) => (status, response.message),
            None => {
                let message = response.message.unwrap_or_else(|| {
                    format!("unrecognized license status \"{}\"", response.status)
                });
                (LicenseStatus::Error, Some(message))
            }
        };

        let end_date = match response
            .end_date
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(parse_end_date)
            .transpose()
        {
            Ok(end_date) => end_date,
            Err(err) if status == LicenseStatus::Valid => return Err(err),
            Err(err) => {
                debug!(%status, error = %err, "ignoring endDate on non-valid license");
                None
            }
        };

        Ok(Self {
            status,
            plan_type: response.plan_type,
            end_date,
            user_email: response.user_email.filter(|e| !e.is_empty()),
            message,
        })
    }

    /// License state reported by the service.
    pub fn status(&self) -> LicenseStatus {
        self.status
    }

    /// Plan label, if the service supplied one.
    pub fn plan_type(&self) -> Option<&str> {
        self.plan_type.as_deref()
    }

    /// Expiry as the service's wall-clock time; `None` means perpetual.
    pub fn end_date(&self) -> Option<NaiveDateTime> {
        self.end_date
    }

    /// Email bound to the license.
    pub fn user_email(&self) -> Option<&str> {
        self.user_email.as_deref()
    }

    /// Human-readable diagnostic.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the license was accepted.
    pub fn is_valid(&self) -> bool {
        self.status == LicenseStatus::Valid
    }
}

/// Parse a raw JSON body into a verify response.
pub fn parse_verify_response(body: &[u8]) -> Result<VerifyResponse, VerifyError> {
    serde_json::from_slice(body).map_err(|e| VerifyError::Protocol(e.to_string()))
}

/// Parse an `endDate` value, keeping the service's wall-clock time.
pub fn parse_end_date(raw: &str) -> Result<NaiveDateTime, VerifyError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_local());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Ok(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| VerifyError::Protocol(format!("unparseable endDate \"{}\"", raw)))
}
