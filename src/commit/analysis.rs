//! Change classification from `git diff --name-status` output.
//!
//! Only file paths and one-letter status codes are inspected; diff content
//! never is. The analysis covers at most `max_files` input lines, so for large
//! change sets the counts and flags describe a prefix of the listing rather
//! than the whole change set.

use std::fmt;

use serde::Serialize;
use tracing::debug;

/// Kind of change recorded for a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Modified,
    Added,
    Deleted,
    Renamed,
}

impl ChangeKind {
    /// Map a name-status code to a change kind.
    ///
    /// Only the first character is significant, so rename codes carrying a
    /// similarity score (`R100`, `R087`) resolve to [`ChangeKind::Renamed`].
    pub fn from_status(status: &str) -> Option<Self> {
        match status.chars().next()? {
            'M' => Some(ChangeKind::Modified),
            'A' => Some(ChangeKind::Added),
            'D' => Some(ChangeKind::Deleted),
            'R' => Some(ChangeKind::Renamed),
            _ => None,
        }
    }
}

/// A single `STATUS<TAB>PATH` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord<'a> {
    /// `None` for status codes outside M/A/D/R (copies, type changes, ...).
    pub kind: Option<ChangeKind>,
    /// Everything after the first tab. For renames this is `old<TAB>new`.
    pub path: &'a str,
}

impl<'a> ChangeRecord<'a> {
    /// Parse one line. Returns `None` for lines without a tab or with an empty path.
    pub fn parse(line: &'a str) -> Option<Self> {
        let (status, path) = line.split_once('\t')?;
        if path.is_empty() {
            return None;
        }

        Some(Self {
            kind: ChangeKind::from_status(status),
            path,
        })
    }

    pub fn extension(&self) -> Option<String> {
        extension_of(self.path)
    }
}

/// Lowercased text after the last `.` of a path.
pub fn extension_of(path: &str) -> Option<String> {
    let (_, ext) = path.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}

/// Content category of a changed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    Test,
    Doc,
    Config,
    Source,
}

impl FileCategory {
    /// Evaluation order for [`FileCategory::classify`].
    const PRIORITY: [FileCategory; 4] = [
        FileCategory::Test,
        FileCategory::Doc,
        FileCategory::Config,
        FileCategory::Source,
    ];

    fn matches(self, path: &str, ext: Option<&str>) -> bool {
        match self {
            // Also covers `*.test.ts` / `*.test.js`.
            FileCategory::Test => path.contains("test") || path.contains("spec"),
            FileCategory::Doc => matches!(ext, Some("md" | "txt" | "rst")),
            FileCategory::Config => {
                matches!(ext, Some("json" | "yaml" | "yml" | "toml")) || path.contains("config")
            }
            FileCategory::Source => matches!(
                ext,
                Some("ts" | "js" | "py" | "java" | "cpp" | "c" | "go" | "rs")
            ),
        }
    }

    /// First matching category for a file, if any.
    pub fn classify(path: &str, ext: Option<&str>) -> Option<Self> {
        Self::PRIORITY
            .into_iter()
            .find(|category| category.matches(path, ext))
    }
}

/// Single-label summary of a change set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimaryChangeType {
    Add,
    Remove,
    Update,
    Refactor,
    #[default]
    Mixed,
}

impl PrimaryChangeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimaryChangeType::Add => "add",
            PrimaryChangeType::Remove => "remove",
            PrimaryChangeType::Update => "update",
            PrimaryChangeType::Refactor => "refactor",
            PrimaryChangeType::Mixed => "mixed",
        }
    }

    /// Derive the label from per-kind counts. First match wins; renames only
    /// matter once none of the exclusive add/remove/update cases apply.
    fn from_counts(modified: usize, added: usize, deleted: usize, renamed: usize) -> Self {
        let rules = [
            (added > 0 && modified == 0 && deleted == 0, PrimaryChangeType::Add),
            (deleted > 0 && added == 0 && modified == 0, PrimaryChangeType::Remove),
            (modified > 0 && added == 0 && deleted == 0, PrimaryChangeType::Update),
            (renamed > 0, PrimaryChangeType::Refactor),
        ];

        rules
            .into_iter()
            .find_map(|(hit, change_type)| hit.then_some(change_type))
            .unwrap_or(PrimaryChangeType::Mixed)
    }
}

impl fmt::Display for PrimaryChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured summary of a name-status listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeAnalysis {
    pub modified: Vec<String>,
    pub added: Vec<String>,
    pub deleted: Vec<String>,
    pub renamed: Vec<String>,
    /// Distinct extensions in first-seen order.
    pub file_types: Vec<String>,
    pub has_test_changes: bool,
    pub has_doc_changes: bool,
    pub has_config_changes: bool,
    pub has_source_changes: bool,
    pub primary_change_type: PrimaryChangeType,
}

impl ChangeAnalysis {
    pub fn has_file_type(&self, ext: &str) -> bool {
        self.file_types.iter().any(|t| t == ext)
    }

    /// Modified, added and deleted paths, in that order.
    pub fn changed_paths(&self) -> impl Iterator<Item = &str> {
        self.modified
            .iter()
            .chain(&self.added)
            .chain(&self.deleted)
            .map(String::as_str)
    }

    pub fn changed_count(&self) -> usize {
        self.modified.len() + self.added.len() + self.deleted.len()
    }

    fn record(&mut self, record: &ChangeRecord<'_>) {
        let path = record.path.to_string();
        match record.kind {
            Some(ChangeKind::Modified) => self.modified.push(path),
            Some(ChangeKind::Added) => self.added.push(path),
            Some(ChangeKind::Deleted) => self.deleted.push(path),
            Some(ChangeKind::Renamed) => self.renamed.push(path),
            None => {}
        }

        let ext = record.extension();
        if let Some(ext) = &ext {
            if !self.has_file_type(ext) {
                self.file_types.push(ext.clone());
            }
        }

        match FileCategory::classify(record.path, ext.as_deref()) {
            Some(FileCategory::Test) => self.has_test_changes = true,
            Some(FileCategory::Doc) => self.has_doc_changes = true,
            Some(FileCategory::Config) => self.has_config_changes = true,
            Some(FileCategory::Source) => self.has_source_changes = true,
            None => {}
        }
    }
}

/// Classify a `git diff --name-status` listing.
///
/// Only the first `max_files` lines are considered. Malformed lines are
/// skipped silently; empty input yields an empty analysis labelled `mixed`.
pub fn analyze_changes(name_status: &str, max_files: usize) -> ChangeAnalysis {
    let mut analysis = ChangeAnalysis::default();

    for record in name_status
        .trim()
        .lines()
        .take(max_files)
        .filter_map(ChangeRecord::parse)
    {
        analysis.record(&record);
    }

    analysis.primary_change_type = PrimaryChangeType::from_counts(
        analysis.modified.len(),
        analysis.added.len(),
        analysis.deleted.len(),
        analysis.renamed.len(),
    );

    debug!(
        "Analyzed changes: {} modified, {} added, {} deleted, {} renamed, primary={}",
        analysis.modified.len(),
        analysis.added.len(),
        analysis.deleted.len(),
        analysis.renamed.len(),
        analysis.primary_change_type
    );

    analysis
}
