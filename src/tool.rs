//! Static tool descriptor advertised to hosts.

use serde::Serialize;
use serde_json::{Value, json};

use crate::commit::request::DEFAULT_MAX_FILES;

pub const TOOL_NAME: &str = "generate_commit_message";

const TOOL_DESCRIPTION: &str = "Generate commit messages based on Git changes in the current repository.
This tool analyzes staged changes (or all changes if includeUnstaged is true) and suggests
appropriate commit messages following conventional commit format or other specified formats.

Features:
- Analyzes file changes and types to suggest appropriate commit types
- Supports multiple commit message formats (conventional, simple, detailed)
- Multi-language support (English and Japanese)
- Categorizes changes by type (feat, fix, docs, test, chore, etc.)
- Provides change summary and statistics";

/// Name, description and JSON-schema input of a tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

/// Descriptor for the commit message tool.
pub fn commit_message_tool() -> ToolDescriptor {
    ToolDescriptor {
        name: TOOL_NAME,
        description: TOOL_DESCRIPTION,
        input_schema: json!({
            "type": "object",
            "properties": {
                "includeUnstaged": {
                    "type": "boolean",
                    "default": false,
                    "description": "Include unstaged changes in the analysis"
                },
                "maxFiles": {
                    "type": "number",
                    "default": DEFAULT_MAX_FILES,
                    "description": format!("Maximum number of files to analyze (default: {DEFAULT_MAX_FILES})")
                },
                "language": {
                    "type": "string",
                    "enum": ["ja", "en"],
                    "default": "en",
                    "description": "Language for the commit message (ja: Japanese, en: English)"
                },
                "format": {
                    "type": "string",
                    "enum": ["conventional", "simple", "detailed"],
                    "default": "conventional",
                    "description": "Commit message format style"
                }
            },
            "additionalProperties": false,
            "$schema": "http://json-schema.org/draft-07/schema#"
        }),
    }
}
