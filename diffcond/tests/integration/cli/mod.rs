use std::fs;

use assert_cmd::prelude::*;
use predicates::prelude::*;

const MD5_FIRST_BLOCK: &str = include_str!("../../data/md5_first_block.txt");

fn bin_under_test() -> escargot::CargoRun {
    escargot::CargoBuild::new()
        .bin("diffcond")
        .features("executable")
        .current_release()
        .current_target()
        .run()
        .unwrap_or_else(|err| {
            let formatted_err = err
                .to_string()
                .lines()
                .map(|line| format!("│\t{line}"))
                .collect::<Vec<_>>()
                .join("\n");

            panic!(
                "\n\
                Failed to build `diffcond`.\n\
                Original cargo error:\n\
                ┌──────────────────────────────────────────────────\n\
                {formatted_err}\n\
                └──────────────────────────────────────────────────\n\
                To reproduce this failure manually, run the following command:\n\
                $ cargo build -p diffcond --features executable\n\n"
            );
        })
}

// GENERATE
// ================================================================================================

#[test]
fn cli_generate_builtin_table() {
    let mut cmd = bin_under_test().command();
    cmd.arg("generate");
    cmd.assert().success().stdout(MD5_FIRST_BLOCK);
}

#[test]
fn cli_generate_table_file() {
    let mut cmd = bin_under_test().command();
    cmd.arg("generate").arg("./tests/integration/cli/data/tiny.toml");
    cmd.assert().success().stdout(
        "const X_ONE_BITS: u32 = 0x00000002;\n\
         const X_ZERO_BITS: u32 = 0x00000001;\n\
         const X_Y_SAME_BITS: u32 = 0x00000002;\n\
         const Y_Z_DIFFERENT_BITS: u32 = 0x80000000;\n\
         const Z_ONE_BITS: u32 = 0x00000010;\n",
    );
}

#[test]
fn cli_generate_json() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = bin_under_test().command();
    cmd.arg("generate")
        .arg("./tests/integration/cli/data/tiny.toml")
        .arg("--format")
        .arg("json");
    let output = cmd.output()?;
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json.as_array().map(Vec::len), Some(5));
    assert_eq!(json[0], serde_json::json!({ "name": "X_ONE_BITS", "value": "0x00000002" }));
    assert_eq!(json[3]["name"], "Y_Z_DIFFERENT_BITS");
    assert_eq!(json[3]["value"], "0x80000000");

    Ok(())
}

#[test]
fn cli_generate_to_file() {
    let output_file = std::env::temp_dir().join("diffcond_cli_generate_to_file.rs");

    let mut cmd = bin_under_test().command();
    cmd.arg("generate").arg("--output").arg(output_file.as_path());
    cmd.assert().success().stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&output_file).unwrap();
    assert_eq!(written, MD5_FIRST_BLOCK);
    fs::remove_file(&output_file).unwrap();
}

#[test]
fn cli_generate_rejects_invalid_blocks() {
    let mut cmd = bin_under_test().command();
    cmd.arg("generate").arg("./tests/integration/cli/data/mismatch.toml");
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid condition block 'a6 - b6'"))
        .stderr(predicate::str::contains("relates different bits"));
}

#[test]
fn cli_generate_reports_missing_tables() {
    let mut cmd = bin_under_test().command();
    cmd.arg("generate").arg("./tests/integration/cli/data/does-not-exist.toml");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to load"))
        .stderr(predicate::str::contains("does-not-exist.toml"));
}

// CHECK
// ================================================================================================

#[test]
fn cli_check_satisfied_values() {
    let mut cmd = bin_under_test().command();
    cmd.arg("check")
        .arg("./tests/integration/cli/data/tiny.toml")
        .arg("--value")
        .arg("x=0x2")
        .arg("--value")
        .arg("y=2");
    cmd.assert().success().stdout(predicate::str::contains("all 3 checked condition groups hold"));
}

#[test]
fn cli_check_violated_values() {
    let mut cmd = bin_under_test().command();
    cmd.arg("check")
        .arg("./tests/integration/cli/data/tiny.toml")
        .arg("--value")
        .arg("x=0x3")
        .arg("--value")
        .arg("y=0x0");
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("X_ZERO_BITS: 0x00000001 violated at 0x00000001"))
        .stdout(predicate::str::contains("X_Y_SAME_BITS: 0x00000002 violated at 0x00000002"))
        .stderr(predicate::str::contains("2 of 3 checked condition groups are violated"));
}

#[test]
fn cli_check_builtin_table() {
    let mut cmd = bin_under_test().command();
    cmd.arg("check").arg("--value").arg("a1=0x84200000");
    cmd.assert().success().stdout(predicate::str::contains("all 2 checked condition groups hold"));
}

#[test]
fn cli_check_requires_values() {
    let mut cmd = bin_under_test().command();
    cmd.arg("check");
    cmd.assert().failure().stderr(predicate::str::contains("--value"));
}
