use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["translationsRoot"], "./translations");
    assert_eq!(parsed["sourceLanguage"], "en");
    assert_eq!(parsed["includeUnfinished"], true);
    assert!(parsed["locationExtensions"].is_array());

    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "✓ Created .tsglotrc.json\n");
    assert!(test.root().join(".tsglotrc.json").exists());

    let content = test.read_file(".tsglotrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".tsglotrc.json", "{}")?;

    let output = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains(".tsglotrc.json already exists"));
    assert_eq!(test.read_file(".tsglotrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_picked_up_by_check() -> Result<()> {
    let test = CliTest::with_danbooru()?;

    let output = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;
    assert_eq!(output.code, Some(0));

    let output = run(test.check_command())?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("4 problems"));

    Ok(())
}
