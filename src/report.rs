//! User-facing verification report.

use crate::protocol::models::{LicenseStatus, VerificationResult};

/// Display pattern for expiry dates.
pub const END_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const UNKNOWN_PLAN: &str = "unknown";
const UNKNOWN_ERROR: &str = "unknown error";

/// Render the report shown after a verification.
pub fn render(result: &VerificationResult) -> String {
    let mut lines = vec!["=== Verification result ===".to_string()];

    match result.status() {
        LicenseStatus::Valid => {
            lines.push("✓ License key accepted".to_string());
            lines.push(format!(
                "  Plan: {}",
                result.plan_type().unwrap_or(UNKNOWN_PLAN)
            ));
            match result.end_date() {
                Some(end) => lines.push(format!("  Expires: {}", end.format(END_DATE_FORMAT))),
                None => lines.push("  Validity: perpetual".to_string()),
            }
            if let Some(email) = result.user_email() {
                lines.push(format!("  Email: {}", email));
            }
            lines.push(String::new());
            lines.push("Launch authorized. Welcome!".to_string());
        }
        LicenseStatus::Expired => {
            lines.push("✗ License key has expired".to_string());
            lines.push("  Renew the license or obtain a new key.".to_string());
        }
        LicenseStatus::Disabled => {
            lines.push("✗ License key has been disabled".to_string());
            lines.push("  Contact your administrator for details.".to_string());
        }
        LicenseStatus::NotFound => {
            lines.push("✗ License key not found".to_string());
            lines.push("  Check that the key was entered correctly.".to_string());
        }
        LicenseStatus::Error => {
            lines.push("✗ Verification failed".to_string());
            lines.push(format!(
                "  Reason: {}",
                result.message().unwrap_or(UNKNOWN_ERROR)
            ));
        }
    }

    if !result.is_valid() {
        lines.push(String::new());
        lines.push("The application cannot start until the license issue is resolved.".to_string());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::models::parse_verify_response;

    fn result_from(body: &str) -> VerificationResult {
        VerificationResult::from_response(parse_verify_response(body.as_bytes()).unwrap()).unwrap()
    }

    #[test]
    fn test_valid_perpetual() {
        let report = render(&result_from(
            r#"{"status":"valid","planType":"pro","userEmail":"a@b.com"}"#,
        ));
        assert!(report.contains("Plan: pro"));
        assert!(report.contains("perpetual"));
        assert!(report.contains("Email: a@b.com"));
        assert!(!report.contains("Expires"));
        assert!(!report.contains("cannot start"));
    }

    #[test]
    fn test_valid_with_end_date() {
        let report = render(&result_from(
            r#"{"status":"valid","planType":"30d","endDate":"2026-11-18T09:05:00"}"#,
        ));
        assert!(report.contains("Expires: 2026-11-18 09:05:00"));
        assert!(!report.contains("perpetual"));
        assert!(!report.contains("Email"));
    }

    #[test]
    fn test_valid_without_plan_defaults_to_unknown() {
        let report = render(&result_from(r#"{"status":"valid"}"#));
        assert!(report.contains("Plan: unknown"));
    }

    #[test]
    fn test_expired() {
        let report = render(&result_from(r#"{"status":"expired"}"#));
        assert!(report.contains("License key has expired"));
        assert!(report.contains("cannot start"));
    }

    #[test]
    fn test_disabled_and_not_found() {
        assert!(render(&result_from(r#"{"status":"disabled"}"#)).contains("has been disabled"));
        assert!(render(&result_from(r#"{"status":"not_found"}"#)).contains("not found"));
    }

    #[test]
    fn test_error_shows_message_or_fallback() {
        let report = render(&VerificationResult::error("API request failed: 503"));
        assert!(report.contains("Reason: API request failed: 503"));

        let report = render(&result_from(r#"{"status":"error"}"#));
        assert!(report.contains("Reason: unknown error"));
    }
}
