use anyhow::Context;
use clap::Parser;
use launchgate::cli::{self, Cli};
use std::process::ExitCode;

fn setup_logging() {
    use tracing_subscriber::{
        filter::{EnvFilter, LevelFilter},
        fmt,
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    // stdout carries the report; logs go to stderr.
    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_file(false)
        .with_line_number(false)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let opts = match Cli::try_parse() {
        Ok(opts) => opts,
        Err(err) => {
            err.print().context("terminal I/O failed")?;
            return Ok(ExitCode::from(cli::usage_exit_code(&err)));
        }
    };

    setup_logging();

    let mut input = std::io::stdin().lock();
    let mut out = std::io::stdout().lock();
    let decision = cli::run(&opts, &mut input, &mut out).context("terminal I/O failed")?;

    Ok(ExitCode::from(decision.exit_code()))
}
