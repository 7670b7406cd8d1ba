//! Integration tests for the `commit-hint` binary.

mod common;

use std::path::Path;
use std::process::{Command, Output};

use common::TestRepo;

fn run_cli(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_commit-hint"))
        .arg("--cwd")
        .arg(cwd)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run commit-hint")
}

#[test]
fn test_schema_subcommand_prints_descriptor() {
    let output = Command::new(env!("CARGO_BIN_EXE_commit-hint"))
        .arg("schema")
        .output()
        .expect("Failed to run commit-hint");

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("schema output should be JSON");
    assert_eq!(json["name"], "generate_commit_message");
    assert_eq!(json["inputSchema"]["properties"]["maxFiles"]["default"], 10);
}

#[test]
fn test_staged_change_prints_report() {
    let repo = TestRepo::with_readme();
    repo.write("src/tools/search_tool.ts", "export const search = 1;\n");
    repo.stage("src/tools/search_tool.ts");

    let output = run_cli(repo.path(), &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("feat(tools): add search_tool tool"));
}

#[test]
fn test_flags_select_language_and_format() {
    let repo = TestRepo::with_readme();
    repo.write("README.md", "# Changed\n");

    let output = run_cli(repo.path(), &["-u", "--language", "ja", "--format", "simple"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("READMEを更新"));
}

#[test]
fn test_request_json_and_json_output() {
    let repo = TestRepo::with_readme();
    repo.write("README.md", "# Changed\n");

    let output = run_cli(
        repo.path(),
        &["--request", r#"{"includeUnstaged": true, "format": "detailed"}"#, "--json"],
    );

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("--json output should be JSON");
    assert_eq!(json["isError"], false);
    assert_eq!(json["content"][0]["type"], "text");
    let text = json["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("docs: update README\n\nFiles changed: README.md"));
}

#[test]
fn test_clean_tree_exits_successfully() {
    let repo = TestRepo::with_readme();

    let output = run_cli(repo.path(), &[]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Working directory is clean"));
}

#[test]
fn test_non_git_directory_exits_with_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");

    let output = run_cli(dir.path(), &["--json"]);

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("--json output should be JSON");
    assert_eq!(json["isError"], true);
    assert_eq!(
        json["content"][0]["text"],
        "Current directory is not a git repository."
    );
}

#[test]
fn test_invalid_request_json_fails() {
    let repo = TestRepo::with_readme();

    let output = run_cli(repo.path(), &["--request", r#"{"language": "fr"}"#]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to parse --request"));
}

#[test]
fn test_request_conflicts_with_flags() {
    let repo = TestRepo::with_readme();

    let output = run_cli(repo.path(), &["--request", "{}", "--format", "simple"]);

    assert_eq!(output.status.code(), Some(2));
}
