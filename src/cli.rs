//! CLI interface for the intern screener

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Extensions accepted for candidate and job records
pub const RECORD_EXTENSIONS: &[&str] = &["json", "toml"];

#[derive(Parser)]
#[command(name = "intern-screener")]
#[command(about = "Score internship candidates against job requirements")]
#[command(long_about = "Explainable candidate/job matching: weighted per-dimension scores, a green/yellow/red zone and gap feedback")]
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

#[derive(Subcommand)]
pub enum Commands {
    /// Score a candidate against a job
    Score(MatchArgs),

    /// Score a candidate and list gaps with recommendations
    Gaps(MatchArgs),

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct MatchArgs {
    /// Candidate profile (JSON or TOML)
    #[arg(short = 'p', long)]
    pub candidate: PathBuf,

    /// Job requirement profile (JSON or TOML)
    #[arg(short, long)]
    pub job: PathBuf,

    /// Output format: console, json, markdown, html
    #[arg(short, long)]
    pub output: Option<String>,

    /// Save output to file; without a path, a name is derived from the candidate file
    #[arg(short, long, num_args = 0..=1, value_name = "PATH")]
    pub save: Option<Option<PathBuf>>,

    /// Exact skill matching only
    #[arg(long)]
    pub no_embeddings: bool,

    /// Embedding model to use (HuggingFace repo ID or local path)
    #[arg(short, long)]
    pub embedding: Option<String>,

    /// Include per-dimension rationale
    #[arg(short, long)]
    pub detailed: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        "html" => Ok(crate::config::OutputFormat::Html),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown, html", format)),
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
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("a.JSON"), RECORD_EXTENSIONS).is_ok());
        assert!(validate_file_extension(Path::new("a.toml"), RECORD_EXTENSIONS).is_ok());
        assert!(validate_file_extension(Path::new("a.pdf"), RECORD_EXTENSIONS).is_err());
        assert!(validate_file_extension(Path::new("noext"), RECORD_EXTENSIONS).is_err());
    }

    #[test]
    fn test_score_command_parses() {
        let cli = Cli::try_parse_from([
            "intern-screener",
            "-v",
            "score",
            "--candidate",
            "cand.json",
            "-j",
            "job.toml",
            "--no-embeddings",
            "-o",
            "json",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Score(args) => {
                assert_eq!(args.candidate, PathBuf::from("cand.json"));
                assert_eq!(args.job, PathBuf::from("job.toml"));
                assert!(args.no_embeddings);
                assert_eq!(args.output.as_deref(), Some("json"));
            }
            _ => panic!("expected score command"),
        }
    }

    #[test]
    fn test_save_flag_with_and_without_path() {
        let parse = |extra: &[&str]| {
            let mut argv = vec!["intern-screener", "gaps", "-p", "cand.json", "-j", "job.toml"];
            argv.extend_from_slice(extra);
            match Cli::try_parse_from(argv).unwrap().command {
                Commands::Gaps(args) => args.save,
                _ => panic!("expected gaps command"),
            }
        };

        assert_eq!(parse(&[]), None);
        assert_eq!(parse(&["--save"]), Some(None));
        assert_eq!(parse(&["-s", "out/report.md"]), Some(Some(PathBuf::from("out/report.md"))));
    }
}
