//! Git operations via the system `git` binary.

pub mod commands;
pub mod executor;

pub use commands::{DiffScope, NOT_A_REPOSITORY_MARKER};
pub use executor::{CommandOutput, GitExecutor, ProcessExecutor, check_git_installed};
