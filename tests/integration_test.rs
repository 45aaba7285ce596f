use std::process::Command;
use anyhow::Result;

#[test]
fn test_cli_fails_fast_on_missing_settings_file() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_order-range-filter");

    let output = Command::new(binary_path)
        .arg("missing_settings.toml")
        .output()?;

    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr)?;

    assert!(stderr.contains("Configuration loading failed"));

    Ok(())
}

#[test]
fn test_cli_rejects_extra_arguments_with_usage() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_order-range-filter");

    let output = Command::new(binary_path)
        .args(["first.toml", "second.toml"])
        .output()?;

    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr)?;

    assert!(stderr.contains("Usage: order-range-filter"));

    Ok(())
}
