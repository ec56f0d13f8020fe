use std::{fs, path::PathBuf};

use clap::Parser;
use diffcond::{
    diagnostics::{IntoDiagnostic, Report, WrapErr},
    generate, render,
};

use super::TableArg;

/// Output format of the generated constants
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `const NAME: u32 = 0x...;` declaration per line
    #[default]
    Rust,
    /// An array of `{ "name": ..., "value": ... }` objects
    Json,
}

/// Generate the mask constants of a condition table
#[derive(Debug, Clone, Parser)]
#[command(about = "Generate the mask constants of a condition table")]
pub struct GenerateCmd {
    #[command(flatten)]
    table: TableArg,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_parser)]
    output: Option<PathBuf>,
}

impl GenerateCmd {
    pub fn execute(&self) -> Result<(), Report> {
        let table = self.table.load()?;
        let constants = generate(&table)?;
        tracing::info!(blocks = table.len(), constants = constants.len(), "generated constants");

        let output = match self.format {
            OutputFormat::Rust => render(&constants),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(&constants).into_diagnostic()?;
                json.push('\n');
                json
            },
        };

        match &self.output {
            Some(path) => fs::write(path, output)
                .into_diagnostic()
                .wrap_err_with(|| format!("failed to write '{}'", path.display())),
            None => {
                print!("{output}");
                Ok(())
            },
        }
    }
}
