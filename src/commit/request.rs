//! Request and result envelopes exchanged with the host.

use serde::{Deserialize, Serialize};

use crate::commit::message::{Language, MessageFormat};
use crate::error::RequestError;

/// Default number of name-status lines analyzed.
pub const DEFAULT_MAX_FILES: usize = 10;

fn default_max_files() -> usize {
    DEFAULT_MAX_FILES
}

/// Options for a commit message suggestion. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CommitMessageRequest {
    /// Analyze `HEAD` against the working tree instead of the index only.
    #[serde(default)]
    pub include_unstaged: bool,
    #[serde(default = "default_max_files")]
    pub max_files: usize,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub format: MessageFormat,
}

impl Default for CommitMessageRequest {
    fn default() -> Self {
        Self {
            include_unstaged: false,
            max_files: DEFAULT_MAX_FILES,
            language: Language::default(),
            format: MessageFormat::default(),
        }
    }
}

impl CommitMessageRequest {
    /// Parse tool-call arguments. An empty string or `null` yields the defaults.
    pub fn from_json(arguments: &str) -> Result<Self, RequestError> {
        let trimmed = arguments.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(Self::default());
        }
        serde_json::from_str(trimmed).map_err(RequestError::InvalidJson)
    }
}

/// A block of result content. Only text is produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    Text { text: String },
}

/// Outcome of a suggestion run as reported to the host.
///
/// No-op outcomes (clean tree, nothing staged) are successes with
/// explanatory text; only real failures set `is_error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitMessageResult {
    pub content: Vec<Content>,
    pub is_error: bool,
}

impl CommitMessageResult {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::Text { text: text.into() }],
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::Text { text: text.into() }],
            is_error: true,
        }
    }

    /// Text of the first content block.
    pub fn text(&self) -> &str {
        match self.content.first() {
            Some(Content::Text { text }) => text,
            None => "",
        }
    }
}
