use anyhow::Result;
use serde_json::{Value, json};

use crate::{CliTest, stderr_of, stdout_of};

fn parsed(test: &CliTest, path: &str) -> Result<Value> {
    Ok(serde_json::from_str(&test.read_file(path)?)?)
}

#[test]
fn test_promote_merges_into_base() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file(
        "lang/en/messages.json",
        r#"{"greeting": "Hi", "farewell": "Bye"}"#,
    )?;
    test.write_file("overrides/en/messages.json", r#"{"greeting": "Hello"}"#)?;

    let output = test.command().args(["promote", "en"]).output()?;
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("Promoted 1 group(s) for 'en'"));

    assert_eq!(
        parsed(&test, "lang/en/messages.json")?,
        json!({"farewell": "Bye", "greeting": "Hello"})
    );

    Ok(())
}

#[test]
fn test_promote_without_overrides_reports_nothing_to_do() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("lang/en/messages.json", r#"{"greeting": "Hi"}"#)?;

    let output = test.command().args(["promote", "en"]).output()?;
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("No overrides to promote for 'en'"));

    Ok(())
}

#[test]
fn test_promote_verbose_lists_destinations() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("lang/en/messages.json", r#"{"greeting": "Hi"}"#)?;
    test.write_file("overrides/en/messages.json", r#"{"greeting": "Hello"}"#)?;

    let output = test.command().args(["promote", "en", "--verbose"]).output()?;
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("messages"));
    assert!(stdout.contains("lang/en/messages.json"));

    Ok(())
}

#[test]
fn test_promote_vendor_group() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("lang/vendor/acme/en/package.json", r#"{"title": "Acme"}"#)?;
    test.write_file(
        "overrides/vendor/acme/en/package.json",
        r#"{"title": "ACME Corp"}"#,
    )?;

    let output = test.command().args(["promote", "en"]).output()?;
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    assert_eq!(
        parsed(&test, "lang/vendor/acme/en/package.json")?,
        json!({"title": "ACME Corp"})
    );

    Ok(())
}

#[test]
fn test_promote_leaves_untouched_groups_alone() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("lang/en/messages.json", r#"{"greeting": "Hi"}"#)?;
    test.write_file("lang/en/validation.json", r#"{"required": "Required"}"#)?;
    test.write_file("overrides/en/messages.json", r#"{"greeting": "Hello"}"#)?;

    let output = test.command().args(["promote", "en"]).output()?;
    assert!(output.status.success());

    assert_eq!(
        parsed(&test, "lang/en/validation.json")?,
        json!({"required": "Required"})
    );

    Ok(())
}
