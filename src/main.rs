//! Intern screener: explainable candidate/job matching from the command line

use clap::Parser;
use intern_screener::cli::{self, Cli, Commands, ConfigAction, MatchArgs, RECORD_EXTENSIONS};
use intern_screener::config::Config;
use intern_screener::input::ProfileLoader;
use intern_screener::output::{
    save_report_to_file, suggest_filename, ReportGenerator, ReportMetadata, ScreeningReport,
};
use intern_screener::processing::embeddings::load_embedder;
use intern_screener::{GapAnalyzer, MatchingEngine, Result, ScreenerError};
use log::{error, info};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config.as_deref()).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<&Path>) -> Result<()> {
    match command {
        Commands::Score(args) => run_match(args, false, &config).await,
        Commands::Gaps(args) => run_match(args, true, &config).await,
        Commands::Config { action } => run_config(action, &config, config_path),
    }
}

async fn run_match(args: MatchArgs, with_gaps: bool, config: &Config) -> Result<()> {
    cli::validate_file_extension(&args.candidate, RECORD_EXTENSIONS)
        .map_err(|e| ScreenerError::UnsupportedFormat(format!("Candidate file: {}", e)))?;
    cli::validate_file_extension(&args.job, RECORD_EXTENSIONS)
        .map_err(|e| ScreenerError::UnsupportedFormat(format!("Job file: {}", e)))?;

    let output_format = match &args.output {
        Some(format) => cli::parse_output_format(format).map_err(ScreenerError::InvalidInput)?,
        None => config.output.format,
    };

    let mut loader = ProfileLoader::new();
    let candidate = loader.load_candidate(&args.candidate).await?;
    let requirement = loader.load_requirement(&args.job).await?;

    let engine = build_engine(config, &args)?;
    let analyzer = GapAnalyzer::new(engine, config.scoring.gap_thresholds);

    let result = analyzer.engine().score(&candidate, &requirement);
    let gaps = if with_gaps {
        Some(analyzer.report(&result, &candidate, &requirement))
    } else {
        None
    };

    let metadata = ReportMetadata::new(
        &args.candidate.to_string_lossy(),
        &args.job.to_string_lossy(),
        &requirement.title,
        analyzer.engine().embedding_model(),
    );
    let report = ScreeningReport::new(result, gaps, metadata);

    // No ANSI codes in saved files
    let use_colors = config.output.color_output && args.save.is_none();
    let detailed = args.detailed || config.output.detailed;
    let generator = ReportGenerator::with_options(use_colors, detailed, true, true, true);
    let content = generator.generate_report(&report, &output_format)?;

    let save_path = args.save.as_ref().map(|path| match path {
        Some(path) => path.clone(),
        None => PathBuf::from(suggest_filename(&output_format, &args.candidate.to_string_lossy(), true)),
    });

    match &save_path {
        Some(path) => {
            save_report_to_file(&content, path)?;
            info!("Report saved to {}", path.display());
            println!("💾 Report saved to {}", path.display());
        }
        None => println!("{}", content),
    }

    Ok(())
}

fn build_engine(config: &Config, args: &MatchArgs) -> Result<MatchingEngine> {
    let mut models = config.models.clone();
    if let Some(model) = &args.embedding {
        models.embedding_model = model.clone();
    }
    if args.no_embeddings {
        models.enable_embeddings = false;
    }

    let engine_config = config.engine_config();
    match load_embedder(&models) {
        Some(embedder) => MatchingEngine::with_embedder(engine_config, embedder),
        None => MatchingEngine::new(engine_config),
    }
}

fn run_config(action: Option<ConfigAction>, config: &Config, config_path: Option<&Path>) -> Result<()> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::default_path);

    match action.unwrap_or(ConfigAction::Show) {
        ConfigAction::Show => {
            println!("⚙️  Current Configuration ({})\n", path.display());
            let content = toml::to_string_pretty(config)
                .map_err(|e| ScreenerError::Configuration(format!("Failed to serialize config: {}", e)))?;
            println!("{}", content);
        }

        ConfigAction::Reset => {
            println!("🔄 Resetting configuration to defaults...");
            Config::default().save_to(&path)?;
            println!("✅ Configuration reset successfully!");
        }

        ConfigAction::Path => {
            println!("{}", path.display());
        }
    }

    Ok(())
}
