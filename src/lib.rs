//! # Launchgate
//!
//! **License verification gate for application launch.**
//!
//! Launchgate submits a user-supplied license key to a remote verification
//! service, classifies the answer into a closed set of license states and
//! turns that into a launch decision: proceed (exit 0) or deny (exit 1).
//!
//! ## Features
//!
//! - **One round-trip**: a single `GET {base}/verify/{key}` per call, no retries
//! - **Bounded timeout**: 10 seconds by default, surfaced as a transport failure
//! - **Safe URL composition**: the key is percent-encoded as one path segment
//! - **Fail-closed**: HTTP errors, transport errors and malformed bodies all
//!   become an `error` result; nothing panics or propagates
//!
//! ## Quickstart
//!
//! ```no_run
//! use launchgate::{LaunchDecision, LicenseKey, LicenseVerifier, VerifierConfig};
//! use std::time::Duration;
//!
//! fn main() -> Result<(), launchgate::VerifyError> {
//!     let config = VerifierConfig::new("https://licenses.example.com")
//!         .with_timeout(Duration::from_secs(5))
//!         .with_user_agent_product("myapp");
//!
//!     let verifier = LicenseVerifier::new(config)?;
//!     let key = LicenseKey::parse("ABCD-EFGH-1234-5678")?;
//!     let result = verifier.verify(&key);
//!
//!     if LaunchDecision::from_result(&result).allows_launch() {
//!         println!("plan: {}", result.plan_type().unwrap_or("unknown"));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Wire Contract
//!
//! The service answers with a JSON object carrying `status` (`valid`,
//! `expired`, `disabled`, `not_found` or `error`) and optional `planType`,
//! `endDate`, `userEmail` and `message`. Any other status is treated as
//! `error`.
//!
//! The key itself is never validated locally; the service is the only
//! authority. Client-side checks can always be bypassed by a determined
//! attacker with access to the binary.

#![deny(missing_docs)]

// Core modules
pub mod config;
pub mod errors;
pub mod key;

// Protocol layer
pub mod protocol;

// Client layer
pub mod client;

// Verifier (main public API)
pub mod verifier;

// Policy and presentation
pub mod policy;
pub mod report;

// Command-line surface
pub mod cli;

// Re-exports for public API
pub use config::VerifierConfig;
pub use errors::VerifyError;
pub use key::LicenseKey;
pub use policy::decision::LaunchDecision;
pub use protocol::models::{LicenseStatus, VerificationResult};
pub use verifier::{is_valid, verify, LicenseVerifier};
