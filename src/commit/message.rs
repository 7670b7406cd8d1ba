//! Rule-based commit message synthesis from a [`ChangeAnalysis`].

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::commit::analysis::{ChangeAnalysis, PrimaryChangeType};

/// Number of paths listed by the detailed format.
const DETAILED_FILE_PREVIEW: usize = 5;

/// Path substrings that select a scope, checked in order.
const SCOPE_MARKERS: [(&str, &str); 3] = [
    ("tool", "tools"),
    ("extension", "extension"),
    ("relay", "relay"),
];

/// Language of the generated description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ja,
    #[default]
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ja => "ja",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output style of the commit message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MessageFormat {
    /// `type(scope): description`
    #[default]
    Conventional,
    /// Capitalized description only.
    Simple,
    /// Conventional header followed by a list of changed files.
    Detailed,
}

impl MessageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageFormat::Conventional => "conventional",
            MessageFormat::Simple => "simple",
            MessageFormat::Detailed => "detailed",
        }
    }
}

impl fmt::Display for MessageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conventional commit types this generator can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Refactor,
    Test,
    Chore,
}

impl CommitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Refactor => "refactor",
            CommitType::Test => "test",
            CommitType::Chore => "chore",
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generic descriptions paired with a commit type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phrase {
    UpdateTests,
    UpdateDocs,
    UpdateConfig,
    AddFeature,
    RemoveFeature,
    RefactorCode,
    ImproveFunctionality,
    MultipleChanges,
}

impl Phrase {
    fn text(self, language: Language) -> &'static str {
        match (self, language) {
            (Phrase::UpdateTests, Language::En) => "add/update tests",
            (Phrase::UpdateTests, Language::Ja) => "テストを追加・更新",
            (Phrase::UpdateDocs, Language::En) => "update documentation",
            (Phrase::UpdateDocs, Language::Ja) => "ドキュメントを更新",
            (Phrase::UpdateConfig, Language::En) => "update configuration",
            (Phrase::UpdateConfig, Language::Ja) => "設定ファイルを更新",
            (Phrase::AddFeature, Language::En) => "add new feature",
            (Phrase::AddFeature, Language::Ja) => "新機能を追加",
            (Phrase::RemoveFeature, Language::En) => "remove feature",
            (Phrase::RemoveFeature, Language::Ja) => "機能を削除",
            (Phrase::RefactorCode, Language::En) => "refactor code",
            (Phrase::RefactorCode, Language::Ja) => "コードをリファクタリング",
            (Phrase::ImproveFunctionality, Language::En) => "improve functionality",
            (Phrase::ImproveFunctionality, Language::Ja) => "機能を改善",
            (Phrase::MultipleChanges, Language::En) => "implement multiple changes",
            (Phrase::MultipleChanges, Language::Ja) => "複数の変更を実装",
        }
    }
}

/// The parts of a suggested commit message before formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestedMessage {
    pub commit_type: CommitType,
    pub scope: Option<&'static str>,
    pub description: String,
}

impl SuggestedMessage {
    /// `type(scope): description`, or `type: description` without a scope.
    pub fn header(&self) -> String {
        match self.scope {
            Some(scope) => format!("{}({}): {}", self.commit_type, scope, self.description),
            None => format!("{}: {}", self.commit_type, self.description),
        }
    }

    /// Format the message. `analysis` supplies the file list for the detailed format.
    pub fn render(
        &self,
        format: MessageFormat,
        analysis: &ChangeAnalysis,
        language: Language,
    ) -> String {
        match format {
            MessageFormat::Conventional => self.header(),
            MessageFormat::Simple => capitalize_first(&self.description),
            MessageFormat::Detailed => {
                let files = analysis
                    .changed_paths()
                    .take(DETAILED_FILE_PREVIEW)
                    .collect::<Vec<_>>()
                    .join(", ");
                let more = if analysis.changed_count() > DETAILED_FILE_PREVIEW {
                    match language {
                        Language::En => " and more",
                        Language::Ja => " など",
                    }
                } else {
                    ""
                };
                format!("{}\n\nFiles changed: {}{}", self.header(), files, more)
            }
        }
    }
}

/// Derive type, scope and description for an analysis.
pub fn synthesize(analysis: &ChangeAnalysis, language: Language) -> SuggestedMessage {
    let (commit_type, phrase) = select_type(analysis);
    let description = refine_description(analysis, language)
        .unwrap_or_else(|| phrase.text(language).to_string());

    SuggestedMessage {
        commit_type,
        scope: infer_scope(analysis),
        description,
    }
}

/// Generate a formatted commit message for an analysis.
pub fn generate_commit_message(
    analysis: &ChangeAnalysis,
    language: Language,
    format: MessageFormat,
) -> String {
    synthesize(analysis, language).render(format, analysis, language)
}

/// Content categories take precedence over the primary change type.
fn select_type(analysis: &ChangeAnalysis) -> (CommitType, Phrase) {
    let category_rules = [
        (
            analysis.has_test_changes && !analysis.has_source_changes,
            CommitType::Test,
            Phrase::UpdateTests,
        ),
        (
            analysis.has_doc_changes && !analysis.has_source_changes && !analysis.has_test_changes,
            CommitType::Docs,
            Phrase::UpdateDocs,
        ),
        (
            analysis.has_config_changes && !analysis.has_source_changes,
            CommitType::Chore,
            Phrase::UpdateConfig,
        ),
    ];

    if let Some((_, commit_type, phrase)) = category_rules.into_iter().find(|(hit, _, _)| *hit) {
        return (commit_type, phrase);
    }

    match analysis.primary_change_type {
        PrimaryChangeType::Add => (CommitType::Feat, Phrase::AddFeature),
        PrimaryChangeType::Remove => (CommitType::Feat, Phrase::RemoveFeature),
        PrimaryChangeType::Refactor => (CommitType::Refactor, Phrase::RefactorCode),
        PrimaryChangeType::Update => (CommitType::Fix, Phrase::ImproveFunctionality),
        PrimaryChangeType::Mixed => (CommitType::Feat, Phrase::MultipleChanges),
    }
}

/// Scope is only inferred for changes touching TypeScript or JavaScript files.
fn infer_scope(analysis: &ChangeAnalysis) -> Option<&'static str> {
    if !analysis.has_file_type("ts") && !analysis.has_file_type("js") {
        return None;
    }

    SCOPE_MARKERS
        .iter()
        .find(|(marker, _)| {
            analysis
                .modified
                .iter()
                .chain(&analysis.added)
                .any(|path| path.contains(marker))
        })
        .map(|(_, scope)| *scope)
}

/// Name the file when exactly one file was modified or exactly one was added.
///
/// The add/update verb follows the primary change type only, so it can
/// disagree with the commit type chosen by [`select_type`].
fn refine_description(analysis: &ChangeAnalysis, language: Language) -> Option<String> {
    if analysis.modified.len() != 1 && analysis.added.len() != 1 {
        return None;
    }

    let path = analysis.modified.first().or(analysis.added.first())?;
    let stem = file_stem(path);
    let adding = analysis.primary_change_type == PrimaryChangeType::Add;

    let description = match language {
        Language::En => {
            let verb = if adding { "add" } else { "update" };
            if stem.contains("tool") {
                format!("{verb} {stem} tool")
            } else if stem == "README" {
                "update README".to_string()
            } else {
                format!("{verb} {stem}")
            }
        }
        Language::Ja => {
            let verb = if adding { "追加" } else { "更新" };
            if stem.contains("tool") {
                format!("{stem}ツールを{verb}")
            } else if stem == "README" {
                "READMEを更新".to_string()
            } else {
                format!("{stem}を{verb}")
            }
        }
    };

    Some(description)
}

/// File name without directories and without its last extension.
fn file_stem(path: &str) -> &str {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rsplit_once('.') {
        Some((stem, ext)) if !ext.is_empty() => stem,
        _ => name,
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
