use clap::Parser;
use diffcond::{
    diagnostics::Report,
    fold_table,
    masks::{MaskSet, Variable},
};
use indexmap::IndexMap;

use super::TableArg;

/// Check concrete state values against the conditions of a table
#[derive(Debug, Clone, Parser)]
#[command(about = "Check concrete state values against the conditions of a table")]
pub struct CheckCmd {
    #[command(flatten)]
    table: TableArg,

    /// Value of a state variable, e.g. `a1=0x84200000`; decimal values are accepted too
    #[arg(
        short,
        long = "value",
        value_name = "NAME=VALUE",
        value_parser = parse_assignment,
        required = true
    )]
    values: Vec<(Variable, u32)>,
}

impl CheckCmd {
    pub fn execute(&self) -> Result<(), Report> {
        let masks = fold_table(&self.table.load()?)?;
        let values = self.values.iter().cloned().collect::<IndexMap<_, _>>();
        warn_unconstrained(&masks, &values);

        let lookup = |variable: &Variable| values.get(variable).copied();
        let checked = masks.groups().filter(|group| group.holds(lookup).is_some()).count();
        if checked == 0 {
            tracing::warn!("none of the condition groups can be checked with the given values");
        }

        let violations = masks.violations(lookup);
        for violation in &violations {
            println!(
                "{}: {} violated at {}",
                violation.group.name(),
                violation.group.mask(),
                violation.bits
            );
        }

        if violations.is_empty() {
            println!("all {checked} checked condition groups hold");
            Ok(())
        } else {
            Err(Report::msg(format!(
                "{} of {checked} checked condition groups are violated",
                violations.len()
            )))
        }
    }
}

/// Warns about values given for variables that no condition mentions.
fn warn_unconstrained(masks: &MaskSet, values: &IndexMap<Variable, u32>) {
    for variable in values.keys() {
        let mentioned = masks.groups().any(|group| {
            group.key().variable == *variable || group.key().partner() == Some(variable)
        });
        if !mentioned {
            tracing::warn!("no condition mentions '{variable}'");
        }
    }
}

/// Parses a `NAME=VALUE` assignment, where the value is hexadecimal with a `0x` prefix, or
/// decimal. Underscores between digits are ignored.
fn parse_assignment(arg: &str) -> Result<(Variable, u32), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected an assignment of the form NAME=VALUE, found '{arg}'"))?;
    let (name, value) = (name.trim(), value.trim());
    if name.is_empty() {
        return Err(format!("missing variable name in '{arg}'"));
    }

    let digits = value.replace('_', "");
    let parsed = match digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => digits.parse::<u32>(),
    };
    parsed
        .map(|value| (Variable::from(name), value))
        .map_err(|err| format!("invalid value '{value}' for '{name}': {err}"))
}
