use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, stderr_of, stdout_of};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("Created .translayerrc.json"));

    assert!(test.root().join(".translayerrc.json").exists());

    let content = test.read_file(".translayerrc.json")?;
    let parsed: Value = serde_json::from_str(&content)?;
    assert!(parsed.get("langRoot").is_some());
    assert!(parsed.get("overrideRoot").is_some());
    assert!(parsed.get("fallbackLocale").is_some());

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".translayerrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("already exists"));

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());

    test.write_file("lang/en/messages.json", r#"{"greeting": "Hi"}"#)?;

    let output = test.command().arg("groups").output()?;
    assert!(
        output.status.success(),
        "groups should work with the initialized config. stderr: {}",
        stderr_of(&output)
    );
    assert!(stdout_of(&output).contains("messages"));

    Ok(())
}
