use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr};

#[test]
fn test_comparison_failure_names_revisions() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["v1.0.0", "v1.1.0"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr(&output);
    assert!(
        stderr.contains("could not fetch the list of commits for HEAD: v1.1.0 and BASE: v1.0.0"),
        "stderr: {stderr}"
    );
    assert!(!test.changelog_exists());
    Ok(())
}

#[test]
fn test_failed_run_keeps_previous_changelog() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("CHANGELOG.md", "LINE 0: previous run\n")?;

    let output = test.command().args(["v1.0.0", "v1.1.0"]).output()?;

    assert!(!output.status.success());
    assert_eq!(test.read_file("CHANGELOG.md")?, "LINE 0: previous run\n");
    Ok(())
}

#[test]
fn test_anonymous_mode_is_logged() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["v1", "v2"]).output()?;

    assert!(stderr(&output).contains("GITHUB_API_TOKEN not provided"));
    Ok(())
}

#[test]
fn test_token_is_never_logged() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .env("GITHUB_API_TOKEN", "ghp_do_not_print_me")
        .args(["--verbose", "v1", "v2"])
        .output()?;

    let stderr = stderr(&output);
    assert!(stderr.contains("GITHUB_API_TOKEN provided"));
    assert!(!stderr.contains("ghp_do_not_print_me"), "stderr: {stderr}");
    Ok(())
}
