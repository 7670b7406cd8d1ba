//! commit-hint - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commit_hint::commit::DEFAULT_MAX_FILES;
use commit_hint::git::check_git_installed;
use commit_hint::{
    CommitMessageRequest, Language, MessageFormat, commit_message_tool, suggest_commit_message,
};

/// Suggest a commit message for pending git changes.
#[derive(Parser, Debug)]
#[command(name = "commit-hint")]
#[command(about = "Suggest a commit message for pending git changes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Repository working directory (defaults to the current directory)
    #[arg(short = 'C', long, value_name = "DIR")]
    cwd: Option<PathBuf>,

    /// Analyze all changes against HEAD instead of staged changes only
    #[arg(short = 'u', long)]
    include_unstaged: bool,

    /// Maximum number of changed files to analyze
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_FILES)]
    max_files: usize,

    /// Language of the commit message
    #[arg(short, long, value_enum, default_value_t = Language::En)]
    language: Language,

    /// Commit message format
    #[arg(short, long, value_enum, default_value_t = MessageFormat::Conventional)]
    format: MessageFormat,

    /// Tool-call arguments as JSON, e.g. '{"format":"detailed"}' (replaces the flags above)
    #[arg(
        long,
        value_name = "JSON",
        conflicts_with_all = ["include_unstaged", "max_files", "language", "format"]
    )]
    request: Option<String>,

    /// Print the result envelope as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the tool descriptor (name, description, input schema) as JSON
    Schema,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(Command::Schema) = cli.command {
        let descriptor = serde_json::to_string_pretty(&commit_message_tool())
            .context("Failed to serialize tool descriptor")?;
        println!("{descriptor}");
        return Ok(());
    }

    check_git_installed().context("git is required")?;

    let request = match cli.request.as_deref() {
        Some(arguments) => {
            CommitMessageRequest::from_json(arguments).context("Failed to parse --request")?
        }
        None => CommitMessageRequest {
            include_unstaged: cli.include_unstaged,
            max_files: cli.max_files,
            language: cli.language,
            format: cli.format,
        },
    };

    let workdir = cli.cwd.or_else(|| std::env::current_dir().ok());
    let result = suggest_commit_message(workdir.as_deref(), &request).await;

    if cli.json {
        let envelope =
            serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
        println!("{envelope}");
    } else if result.is_error {
        eprintln!("{}", result.text());
    } else {
        println!("{}", result.text());
    }

    if result.is_error {
        std::process::exit(1);
    }

    Ok(())
}

/// Log to stderr. `--verbose` wins over `RUST_LOG`; the default level is `warn`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("commit_hint=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
