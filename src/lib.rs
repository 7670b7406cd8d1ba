//! commit-hint - suggests commit messages from pending git changes.
//!
//! # Overview
//!
//! commit-hint runs `git status` and `git diff --name-status`, classifies the
//! changed paths (tests, docs, config, source; added, removed, updated) and
//! turns that classification into a conventional, simple or detailed commit
//! message in English or Japanese. Diff content is never read.

pub mod commit;
pub mod error;
pub mod git;
pub mod suggest;
pub mod tool;

// Re-export commonly used types
pub use commit::{
    ChangeAnalysis, CommitMessageRequest, CommitMessageResult, Language, MessageFormat,
    PrimaryChangeType, analyze_changes, generate_commit_message,
};
pub use error::{GitError, RequestError, SuggestError};
pub use git::{GitExecutor, ProcessExecutor};
pub use suggest::{suggest_commit_message, suggest_with_executor};
pub use tool::{ToolDescriptor, commit_message_tool};
