//! Heuristic commit message suggestions from name-status listings.

pub mod analysis;
pub mod message;
pub mod report;
pub mod request;

pub use analysis::{
    ChangeAnalysis, ChangeKind, ChangeRecord, FileCategory, PrimaryChangeType, analyze_changes,
};
pub use message::{
    CommitType, Language, MessageFormat, SuggestedMessage, generate_commit_message, synthesize,
};
pub use report::render_report;
pub use request::{CommitMessageRequest, CommitMessageResult, Content, DEFAULT_MAX_FILES};
