//! Running the system `git` binary in a working directory.
//!
//! Commands shell out via `tokio::process::Command`, inheriting the user's
//! git config. Each command gets a timeout.

use std::env;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::error::GitError;

/// Default timeout for a single git command.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable to override the default timeout.
const TIMEOUT_ENV_VAR: &str = "COMMIT_HINT_GIT_TIMEOUT";

/// Get the configured timeout duration.
///
/// Reads from COMMIT_HINT_GIT_TIMEOUT if set, otherwise uses the default of
/// 30 seconds. Invalid values log a warning and fall back to the default.
fn get_timeout() -> Duration {
    match env::var(TIMEOUT_ENV_VAR) {
        Ok(v) if !v.is_empty() => match v.parse::<u64>() {
            Ok(secs) => Duration::from_secs(secs),
            Err(_) => {
                warn!(
                    "Invalid {} value '{}', using default {}s",
                    TIMEOUT_ENV_VAR, v, DEFAULT_TIMEOUT_SECS
                );
                Duration::from_secs(DEFAULT_TIMEOUT_SECS)
            }
        },
        _ => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    }
}

/// Combined output of a finished git command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// stdout followed by stderr.
    pub text: String,
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl CommandOutput {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit_code: Some(0),
        }
    }

    pub fn failure(text: impl Into<String>, exit_code: i32) -> Self {
        Self {
            text: text.into(),
            exit_code: Some(exit_code),
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Trait for executing git commands.
///
/// This abstraction allows mocking the git subprocess in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitExecutor: Send + Sync {
    /// Run `git <args>` and capture its output. A non-zero exit is not an
    /// error at this level; only failing to run the process is.
    async fn run(&self, args: &[String]) -> Result<CommandOutput, GitError>;
}

/// Executor that runs the real git binary in a fixed directory.
#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    workdir: PathBuf,
    timeout: Duration,
}

impl ProcessExecutor {
    /// Create an executor using the configured timeout.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self::with_timeout(workdir, get_timeout())
    }

    pub fn with_timeout(workdir: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            workdir: workdir.into(),
            timeout,
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }
}

#[async_trait]
impl GitExecutor for ProcessExecutor {
    async fn run(&self, args: &[String]) -> Result<CommandOutput, GitError> {
        debug!("Running git {} in {}", args.join(" "), self.workdir.display());

        let output = timeout(
            self.timeout,
            Command::new("git")
                .args(args)
                .current_dir(&self.workdir)
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .output(),
        )
        .await
        .map_err(|_| GitError::Timeout(self.timeout.as_secs()))?
        .map_err(GitError::SpawnFailed)?;

        let mut text = String::from_utf8_lossy(&output.stdout).to_string();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(CommandOutput {
            text,
            exit_code: output.status.code(),
        })
    }
}

/// Check that git is installed and on PATH.
///
/// Uses the `which` crate for cross-platform executable detection.
pub fn check_git_installed() -> Result<PathBuf, GitError> {
    which::which("git").map_err(|_| GitError::NotInstalled)
}
