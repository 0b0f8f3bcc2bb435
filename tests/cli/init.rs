use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .xtractrc.json

    ----- stderr -----
    ");

    let content = test.read_file(".xtractrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["function"], "fmt.Sprintf");
    assert_eq!(parsed["ignoreTestFiles"], true);
    assert_eq!(parsed["ignoreVendor"], true);
    assert_eq!(parsed["format"], "text");
    assert!(parsed.get("moduleRoot").is_none());
    assert!(content.contains("\n  \"function\""), "2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".xtractrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: .xtractrc.json already exists
    ");

    assert_eq!(test.read_file(".xtractrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;

    test.write_file(
        "app/main.go",
        r#"package main

import "fmt"

func main() { fmt.Sprintf("ready") }
"#,
    )?;

    let output = test.extract_command().arg("app").output()?;
    assert!(
        output.status.success(),
        "extract should work with the initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8(output.stdout)?, "ready\n");

    Ok(())
}
