//! Suggestion pipeline: repository checks, diff collection, analysis and
//! message synthesis.
//!
//! Git commands run sequentially and each one gates the next:
//! 1. `git rev-parse --git-dir` - repository presence
//! 2. `git status --porcelain` - anything to commit at all
//! 3. `git diff [--cached|HEAD] --stat` - anything in the requested scope
//! 4. `git diff [--cached|HEAD] --name-status` - input for the classifier

use std::path::Path;

use tracing::debug;

use crate::commit::{
    CommitMessageRequest, CommitMessageResult, analyze_changes, generate_commit_message,
    render_report,
};
use crate::error::{GitError, SuggestError};
use crate::git::commands::{repository_check_args, status_args};
use crate::git::{DiffScope, GitExecutor, NOT_A_REPOSITORY_MARKER, ProcessExecutor};

/// Suggest a commit message for the repository at `workdir`.
///
/// Failures are reported inside the returned result rather than as `Err`,
/// so hosts always receive an envelope.
pub async fn suggest_commit_message(
    workdir: Option<&Path>,
    request: &CommitMessageRequest,
) -> CommitMessageResult {
    let Some(workdir) = workdir else {
        return error_result(SuggestError::NoWorkingDirectory);
    };

    let executor = ProcessExecutor::new(workdir);
    suggest_with_executor(&executor, request).await
}

/// Same as [`suggest_commit_message`] with a caller-supplied executor.
pub async fn suggest_with_executor<E: GitExecutor + ?Sized>(
    executor: &E,
    request: &CommitMessageRequest,
) -> CommitMessageResult {
    match run_pipeline(executor, request).await {
        Ok(result) => result,
        Err(e) => error_result(e),
    }
}

fn error_result(error: SuggestError) -> CommitMessageResult {
    match error {
        SuggestError::Git(e) => {
            CommitMessageResult::error(format!("Error generating commit message: {e}"))
        }
        other => CommitMessageResult::error(other.to_string()),
    }
}

async fn run_pipeline<E: GitExecutor + ?Sized>(
    executor: &E,
    request: &CommitMessageRequest,
) -> Result<CommitMessageResult, SuggestError> {
    let repo_check_args = repository_check_args();
    let repo_check = executor.run(&repo_check_args).await?;
    if repo_check.text.contains(NOT_A_REPOSITORY_MARKER) {
        return Err(SuggestError::NotARepository);
    }
    ensure_success(&repo_check_args, repo_check.exit_code, &repo_check.text)?;

    let status = run_checked(executor, &status_args()).await?;
    if status.trim().is_empty() {
        return Ok(CommitMessageResult::success(
            "No changes to commit. Working directory is clean.",
        ));
    }

    let scope = DiffScope::from_include_unstaged(request.include_unstaged);

    let diff_stat = run_checked(executor, &scope.stat_args()).await?;
    if diff_stat.trim().is_empty() {
        return Ok(CommitMessageResult::success(scope.empty_message()));
    }

    let name_status = run_checked(executor, &scope.name_status_args()).await?;

    let analysis = analyze_changes(&name_status, request.max_files);
    let message = generate_commit_message(&analysis, request.language, request.format);
    debug!("Suggested commit message: {}", message);

    Ok(CommitMessageResult::success(render_report(
        &diff_stat, &message, &analysis,
    )))
}

/// Run a command and treat a non-zero exit as a failure.
async fn run_checked<E: GitExecutor + ?Sized>(
    executor: &E,
    args: &[String],
) -> Result<String, GitError> {
    let output = executor.run(args).await?;
    ensure_success(args, output.exit_code, &output.text)?;
    Ok(output.text)
}

fn ensure_success(args: &[String], exit_code: Option<i32>, text: &str) -> Result<(), GitError> {
    if exit_code == Some(0) {
        return Ok(());
    }

    Err(GitError::CommandFailed {
        command: args.join(" "),
        code: exit_code,
        output: text.trim().to_string(),
    })
}
