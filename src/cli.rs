//! CLI interface for the interview coach

use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "interview-coach")]
#[command(about = "Rule-based mock interview coach")]
#[command(long_about = "Analyze job descriptions, run mock interviews and score answers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Where the job description comes from.
#[derive(Args, Debug, Clone)]
#[group(required = false, multiple = false)]
pub struct JobSource {
    /// Path to job description file (TXT, MD)
    #[arg(short, long)]
    pub job: Option<PathBuf>,

    /// Job description text
    #[arg(short, long)]
    pub text: Option<String>,
}

impl JobSource {
    pub fn is_empty(&self) -> bool {
        self.job.is_none() && self.text.is_none()
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a job description and list its skills and technologies
    AnalyzeJob {
        #[command(flatten)]
        source: JobSource,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Print the opening question for a job description
    Question {
        #[command(flatten)]
        source: JobSource,
    },

    /// Score a single answer
    Score {
        /// Interview question
        #[arg(short, long)]
        question: String,

        /// Candidate answer
        #[arg(short, long)]
        answer: String,

        #[command(flatten)]
        source: JobSource,
    },

    /// Run an interactive mock interview
    Interview {
        #[command(flatten)]
        source: JobSource,

        /// Number of questions (defaults to the configured value)
        #[arg(short = 'n', long)]
        questions: Option<usize>,

        /// Report format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save the report to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Print improvement suggestions for a text
    Suggest {
        /// Text to analyze
        #[arg(short, long)]
        text: String,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("job.MD"), &["txt", "md"]).is_ok());
        assert!(validate_file_extension(Path::new("job.pdf"), &["txt", "md"]).is_err());
        assert!(validate_file_extension(Path::new("job"), &["txt", "md"]).is_err());
    }

    #[test]
    fn test_job_source_is_exclusive() {
        let parsed = Cli::try_parse_from([
            "interview-coach",
            "question",
            "--job",
            "a.txt",
            "--text",
            "x",
        ]);
        assert!(parsed.is_err());

        let cli =
            Cli::try_parse_from(["interview-coach", "question", "--text", "Poste Python"]).unwrap();
        match cli.command {
            Commands::Question { source } => {
                assert_eq!(source.text.as_deref(), Some("Poste Python"));
                assert!(!source.is_empty());
            }
            _ => panic!("expected question command"),
        }
    }
}
