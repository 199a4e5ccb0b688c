use anyhow::Result;
use serde_json::{Value, json};

use crate::{CliTest, stderr_of, stdout_of};

fn parsed(test: &CliTest, path: &str) -> Result<Value> {
    Ok(serde_json::from_str(&test.read_file(path)?)?)
}

#[test]
fn test_set_preserves_base_siblings() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file(
        "lang/en/messages.json",
        r#"{"greeting": "Hi", "farewell": "Bye"}"#,
    )?;
    test.write_file("overrides/en/messages.json", r#"{"greeting": "Hi"}"#)?;

    let output = test
        .command()
        .args(["set", "en", "messages", "farewell", "See ya"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("Saved"));

    assert_eq!(
        parsed(&test, "overrides/en/messages.json")?,
        json!({"farewell": "See ya", "greeting": "Hi"})
    );

    Ok(())
}

#[test]
fn test_set_writes_sorted_keys() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("lang/en/messages.json", r#"{"zebra": "Z", "apple": "A"}"#)?;

    let output = test
        .command()
        .args(["set", "en", "messages", "mango", "M"])
        .output()?;
    assert!(output.status.success());

    let content = test.read_file("overrides/en/messages.json")?;
    let apple = content.find("\"apple\"").unwrap();
    let mango = content.find("\"mango\"").unwrap();
    let zebra = content.find("\"zebra\"").unwrap();
    assert!(apple < mango && mango < zebra);

    Ok(())
}

#[test]
fn test_set_nested_key_builds_branches() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("lang/en/messages.json", "{}")?;

    let output = test
        .command()
        .args(["set", "en", "messages", "user.profile.title", "Profile"])
        .output()?;
    assert!(output.status.success());

    assert_eq!(
        parsed(&test, "overrides/en/messages.json")?,
        json!({"user": {"profile": {"title": "Profile"}}})
    );

    Ok(())
}

#[test]
fn test_set_vendor_group_lands_under_vendor_path() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("lang/vendor/acme/en/package.json", r#"{"title": "Acme"}"#)?;

    let output = test
        .command()
        .args(["set", "en", "acme/package", "title", "ACME Corp"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    assert_eq!(
        parsed(&test, "overrides/vendor/acme/en/package.json")?,
        json!({"title": "ACME Corp"})
    );

    Ok(())
}

#[test]
fn test_set_new_locale_creates_directories() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("lang/en/messages.json", "{}")?;

    let output = test
        .command()
        .args(["set", "nl-BE", "messages", "greeting", "Hallo"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    assert!(test.root().join("overrides/nl-BE/messages.json").exists());

    Ok(())
}

#[test]
fn test_set_warns_on_leaf_branch_collision() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("lang/en/messages.json", "{}")?;
    test.write_file("overrides/en/messages.json", r#"{"a": "leaf"}"#)?;

    let output = test
        .command()
        .args(["set", "en", "messages", "a.b", "nested"])
        .output()?;
    assert!(output.status.success());
    assert!(stderr_of(&output).contains("warning:"));

    assert_eq!(
        parsed(&test, "overrides/en/messages.json")?,
        json!({"a": {"b": "nested"}})
    );

    Ok(())
}
