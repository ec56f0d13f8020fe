use std::path::PathBuf;

use clap::Args;
use diffcond::{
    ConditionTable,
    diagnostics::{Report, WrapErr},
};

mod check;
mod generate;

pub use check::CheckCmd;
pub use generate::GenerateCmd;

/// The condition table a command operates on.
#[derive(Debug, Clone, Args)]
pub struct TableArg {
    /// Path to a TOML condition table; the built-in MD5 table is used when omitted
    #[arg(value_name = "TABLE", value_parser)]
    path: Option<PathBuf>,
}

impl TableArg {
    pub fn load(&self) -> Result<ConditionTable, Report> {
        match &self.path {
            Some(path) => ConditionTable::load(path)
                .wrap_err_with(|| format!("failed to load '{}'", path.display())),
            None => {
                tracing::debug!("using the built-in md5 table");
                Ok(ConditionTable::md5())
            },
        }
    }
}
