//! Command-line surface.
//!
//! `run` does all the work and returns a [`LaunchDecision`]; only the binary
//! turns that into a process exit.

use crate::config::{VerifierConfig, DEFAULT_PRODUCT};
use crate::key::LicenseKey;
use crate::policy::decision::{LaunchDecision, EXIT_DENY, EXIT_PROCEED};
use crate::report;
use crate::verifier::LicenseVerifier;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing::debug;

/// Verify a license key before launching an application.
///
/// Exits 0 when the license is valid and 1 otherwise.
#[derive(Debug, Parser)]
#[command(name = "launchgate", author, version, about, long_about = None)]
pub struct Cli {
    /// Verification service root address (e.g. `https://licenses.example.com`)
    #[arg(short, long, env = "LAUNCHGATE_URL")]
    pub url: String,

    /// License key to verify
    ///
    /// If omitted, the key is read from standard input.
    #[arg(short, long, env = "LAUNCHGATE_LICENSE_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "LAUNCHGATE_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Product token sent in the User-Agent header
    #[arg(long, default_value = DEFAULT_PRODUCT)]
    pub product: String,
}

impl Cli {
    /// Verifier configuration described by the arguments.
    pub fn verifier_config(&self) -> VerifierConfig {
        VerifierConfig::new(self.url.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_user_agent_product(self.product.clone())
    }
}

/// Exit code after clap reports an argument problem.
///
/// Help and version output exit with success; every real usage error
/// denies launch like any other failure.
pub fn usage_exit_code(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        EXIT_DENY
    } else {
        EXIT_PROCEED
    }
}

/// Collect the key, verify it, print the report and decide.
///
/// An empty key or a bad configuration denies launch without touching the
/// network. Only terminal I/O failures are returned as errors.
pub fn run<R: BufRead, W: Write>(
    cli: &Cli,
    input: &mut R,
    out: &mut W,
) -> io::Result<LaunchDecision> {
    let raw = match &cli.key {
        Some(key) => key.clone(),
        None => prompt_for_key(input, out)?,
    };

    let key = match LicenseKey::parse(&raw) {
        Ok(key) => key,
        Err(err) => {
            writeln!(out, "error: {}", err)?;
            return Ok(LaunchDecision::Deny);
        }
    };

    let verifier = match LicenseVerifier::new(cli.verifier_config()) {
        Ok(verifier) => verifier,
        Err(err) => {
            writeln!(out, "error: {}", err)?;
            return Ok(LaunchDecision::Deny);
        }
    };

    writeln!(out)?;
    writeln!(out, "Verifying license key, please wait...")?;
    out.flush()?;

    let result = verifier.verify(&key);
    writeln!(out)?;
    writeln!(out, "{}", report::render(&result))?;

    let decision = LaunchDecision::from_result(&result);
    debug!(?decision, "launch decision");
    Ok(decision)
}

/// Print the prompt and read one line.
///
/// End of input yields an empty string.
fn prompt_for_key<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<String> {
    writeln!(out, "=== License verification ===")?;
    writeln!(out, "Enter your license key:")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}
