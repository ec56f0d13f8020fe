use clap::{Parser, Subcommand};
use diffcond::diagnostics::{IntoDiagnostic, Report};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cli;

/// Bitmask constants from per-bit differential condition tables
#[derive(Parser)]
#[command(name = "diffcond", version, about, rename_all = "kebab-case")]
pub struct Cli {
    #[command(subcommand)]
    action: Actions,
}

/// CLI actions
#[derive(Debug, Subcommand)]
pub enum Actions {
    Generate(cli::GenerateCmd),
    Check(cli::CheckCmd),
}

/// CLI entry point
impl Cli {
    pub fn execute(&self) -> Result<(), Report> {
        match &self.action {
            Actions::Generate(generate) => generate.execute(),
            Actions::Check(check) => check.execute(),
        }
    }
}

/// Executable entry point
pub fn main() -> Result<(), Report> {
    let cli = Cli::parse();
    init_tracing()?;
    cli.execute()
}

/// Installs a stderr subscriber filtered by `DIFFCOND_LOG`, e.g. `DIFFCOND_LOG=diffcond=debug`.
///
/// Records emitted through `log` by the library crates are forwarded to the same subscriber.
fn init_tracing() -> Result<(), Report> {
    let filter = EnvFilter::try_from_env("DIFFCOND_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).without_time().with_target(true))
        .with(filter)
        .try_init()
        .into_diagnostic()
}
