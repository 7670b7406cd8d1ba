//! The git invocations used to inspect pending changes.

/// Marker printed by git when the directory is outside any repository.
pub const NOT_A_REPOSITORY_MARKER: &str = "not a git repository";

/// Which changes are inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffScope {
    /// Index against `HEAD` (`--cached`).
    Staged,
    /// Working tree against `HEAD`, staged or not.
    WorkingTree,
}

impl DiffScope {
    pub fn from_include_unstaged(include_unstaged: bool) -> Self {
        if include_unstaged {
            DiffScope::WorkingTree
        } else {
            DiffScope::Staged
        }
    }

    fn diff_args(&self, mode: &str) -> Vec<String> {
        let base: &[&str] = match self {
            DiffScope::Staged => &["diff", "--cached"],
            DiffScope::WorkingTree => &["diff", "HEAD"],
        };
        base.iter()
            .copied()
            .chain(std::iter::once(mode))
            .map(String::from)
            .collect()
    }

    /// `git diff ... --stat`
    pub fn stat_args(&self) -> Vec<String> {
        self.diff_args("--stat")
    }

    /// `git diff ... --name-status`
    pub fn name_status_args(&self) -> Vec<String> {
        self.diff_args("--name-status")
    }

    /// Message reported when the diff for this scope is empty.
    pub fn empty_message(&self) -> &'static str {
        match self {
            DiffScope::Staged => {
                "No staged changes found. Use \"git add\" to stage changes or set includeUnstaged to true."
            }
            DiffScope::WorkingTree => "No changes found in the repository.",
        }
    }
}

/// `git rev-parse --git-dir`
pub fn repository_check_args() -> Vec<String> {
    vec!["rev-parse".to_string(), "--git-dir".to_string()]
}

/// `git status --porcelain`
pub fn status_args() -> Vec<String> {
    vec!["status".to_string(), "--porcelain".to_string()]
}
