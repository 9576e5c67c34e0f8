//! Interview coach: rule-based mock interview CLI

use anyhow::{bail, Context};
use clap::Parser;
use interview_coach::cli::{self, Cli, Commands, ConfigAction, JobSource};
use interview_coach::config::{Config, OutputFormat};
use interview_coach::input::InputManager;
use interview_coach::output::formatter::{
    save_report_to_file, suggest_filename, truncate_graphemes,
};
use interview_coach::output::{InterviewReport, ReportGenerator};
use interview_coach::processing::answer_scorer::MAX_NOTE;
use interview_coach::{
    analyze_answer, generate_interview_question, rate_answer, semantic_analysis, InterviewConductor,
    JobAnalyzer,
};
use log::{error, info};
use std::path::{Path, PathBuf};
use std::process;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> anyhow::Result<()> {
    match command {
        Commands::AnalyzeJob { source, output } => {
            let format = cli::parse_output_format(&output).map_err(anyhow::Error::msg)?;
            let job_description = load_job_description(&source).await?;
            let analysis = JobAnalyzer::shared().analyze(&job_description);

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
                OutputFormat::Console | OutputFormat::Markdown => {
                    println!("💼 Job description analysis");
                    println!("Type: {}", analysis.job_type);
                    println!("Level: {}", analysis.level);
                    println!("Skills: {}", join_or_none(&analysis.skills));
                    println!("Technologies: {}", join_or_none(&analysis.technologies));
                }
            }
        }

        Commands::Question { source } => {
            let job_description = load_job_description(&source).await?;
            println!("❓ {}", generate_interview_question(&job_description));
        }

        Commands::Score { question, answer, source } => {
            let analysis = analyze_answer(&answer, &question);

            println!("📝 Note: {}/{}", analysis.note, MAX_NOTE);
            for feedback in &analysis.feedbacks {
                println!("  • {}", feedback);
            }
            if !analysis.weak_points.is_empty() {
                println!("🎯 Weak points: {}", analysis.weak_points.join(", "));
            }

            if !source.is_empty() {
                let job_description = load_job_description(&source).await?;
                let rating = rate_answer(&answer, &question, &job_description);
                println!("⭐ Rating against the job description: {}/{}", rating, MAX_NOTE);
            }
        }

        Commands::Interview { source, questions, output, save } => {
            let format = match output {
                Some(output) => cli::parse_output_format(&output).map_err(anyhow::Error::msg)?,
                None => config.output.format,
            };
            let questions = questions.unwrap_or(config.interview.questions_per_session);
            if questions == 0 {
                bail!("An interview needs at least one question");
            }

            let job_description = load_job_description(&source).await?;
            run_interview(&config, &job_description, questions, format, save).await?;
        }

        Commands::Suggest { text } => {
            println!("💡 Suggestions for: {}", truncate_graphemes(&text, 80));
            for suggestion in semantic_analysis(&text) {
                println!("  • {}", suggestion);
            }
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config)
                    .context("Failed to serialize configuration")?;
                println!("⚙️  Configuration ({})", config_path.display());
                println!("{}", content);
            }
            ConfigAction::Reset => {
                Config::default()
                    .save_to(config_path)
                    .context("Failed to reset configuration")?;
                println!("✅ Configuration reset to defaults: {}", config_path.display());
            }
            ConfigAction::Path => println!("{}", config_path.display()),
        },
    }

    Ok(())
}

async fn load_job_description(source: &JobSource) -> anyhow::Result<String> {
    if let Some(text) = &source.text {
        return Ok(text.clone());
    }

    let Some(path) = &source.job else {
        bail!("Provide a job description with --job <file> or --text <description>");
    };
    cli::validate_file_extension(path, &["txt", "md"])
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("Job description file: {}", path.display()))?;

    InputManager::new()
        .load_job_description(path)
        .await
        .with_context(|| format!("Failed to read job description {}", path.display()))
}

async fn run_interview(
    config: &Config,
    job_description: &str,
    questions: usize,
    format: OutputFormat,
    save: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut conductor = InterviewConductor::new();
    let conversation_id = conductor.start_conversation(job_description);
    info!("Running a {}-question interview", questions);

    println!(
        "🎤 Mock interview ({} questions). Answer on one line; send EOF to stop early.",
        questions
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    for index in 1..=questions {
        let question = conductor.get_next_question(&conversation_id)?;
        println!("\n❓ {}/{} {}", index, questions, question);

        let Some(answer) = lines.next_line().await.context("Failed to read answer")? else {
            println!("\n⏹  Interview stopped");
            break;
        };

        let feedbacks = conductor.add_answer(&conversation_id, answer.trim())?;
        let note = conductor
            .get_conversation_history(&conversation_id)?
            .last()
            .and_then(|exchange| exchange.note)
            .unwrap_or(0);
        println!("📝 Note: {}/{}", note, MAX_NOTE);
        for feedback in &feedbacks {
            println!("  • {}", feedback);
        }
    }

    let report = InterviewReport::from_conversation(conductor.conversation(&conversation_id)?);
    let generator = ReportGenerator::with_options(
        config.output.color_output,
        config.output.detailed,
        true,
        true,
    );
    let content = generator.generate_report(&report, format)?;
    println!("{}", content);

    let save_path = match save {
        Some(path) => Some(path),
        None if config.interview.save_transcripts => {
            config.ensure_transcripts_dir()?;
            let file_name = suggest_filename(format, &conversation_id, true);
            Some(config.interview.transcripts_dir.join(file_name))
        }
        None => None,
    };
    if let Some(path) = save_path {
        let file_content = if format == OutputFormat::Console {
            ReportGenerator::with_options(false, config.output.detailed, true, true)
                .generate_report(&report, format)?
        } else {
            content
        };
        save_report_to_file(&file_content, &path)?;
        println!("💾 Report saved to {}", path.display());
    }

    Ok(())
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}
