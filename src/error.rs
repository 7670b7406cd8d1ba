//! Error types for commit-hint modules using thiserror.

use thiserror::Error;

/// Errors from running the `git` binary.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git not found. Install git and make sure it is on your PATH")]
    NotInstalled,

    #[error("Failed to spawn git process: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("git process timed out after {0} seconds")]
    Timeout(u64),

    #[error("`git {command}` exited with {}: {output}",
            code.map_or("unknown status".to_string(), |c| format!("code {c}")))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        output: String,
    },
}

/// Errors that turn a suggestion run into an error result.
#[derive(Error, Debug)]
pub enum SuggestError {
    #[error("No working directory found. Pass --cwd or run from inside a folder.")]
    NoWorkingDirectory,

    #[error("Current directory is not a git repository.")]
    NotARepository,

    #[error(transparent)]
    Git(#[from] GitError),
}

/// Errors from parsing tool-call arguments.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Invalid request arguments: {0}")]
    InvalidJson(#[source] serde_json::Error),
}
