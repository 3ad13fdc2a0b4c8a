use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_no_arguments_is_usage_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("<BASE>"));
    assert!(!test.changelog_exists());
    Ok(())
}

#[test]
fn test_missing_head_is_usage_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("swift-5.9-RELEASE").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("<HEAD>"));
    assert!(!test.changelog_exists());
    Ok(())
}

#[test]
fn test_extra_argument_is_usage_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["a", "b", "c"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(!test.changelog_exists());
    // Usage errors are reported before any request is attempted.
    assert!(!stderr(&output).contains("could not fetch"));
    Ok(())
}

#[test]
fn test_help_exits_successfully() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert!(output.status.success());
    let help = stdout(&output);
    assert!(help.contains("<BASE>"));
    assert!(help.contains("<HEAD>"));
    assert!(help.contains("--verbose"));
    Ok(())
}
