//! Visit Summarizer command-line harness
//!
//! Reads a contact's note history as JSON, runs the summarization engine and
//! prints the narrative, the notes needing review or a JSON report.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::{self, EnvFilter};
use visit_summarizer_core::{NarrativeStyle, SummarizerBuilder, SummarizerConfig, VisitHistory};

#[derive(Parser)]
#[command(name = "visit-summarizer")]
#[command(about = "Summarize field-visit notes into a next-step recommendation", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON history file: {"notes": [...], "dates": [...]} (stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Narrative style: concise, detailed, action-oriented or balanced
    #[arg(short, long, default_value = "action-oriented")]
    style: NarrativeStyle,

    /// TOML configuration file
    #[arg(short, long, env = "VISIT_SUMMARIZER_CONFIG")]
    config: Option<PathBuf>,

    /// Seed for phrase selection, for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Reference time for recency weighting (RFC 3339, defaults to now)
    #[arg(long)]
    now: Option<DateTime<Utc>>,

    /// Also list the notes that need human review
    #[arg(long)]
    review: bool,

    /// Print a JSON report instead of plain text
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

fn read_history(input: Option<&PathBuf>) -> Result<VisitHistory> {
    let json = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read history from stdin")?;
            buffer
        }
    };

    Ok(VisitHistory::from_json_str(&json)?)
}

fn load_config(path: Option<&PathBuf>) -> Result<SummarizerConfig> {
    match path {
        Some(path) => SummarizerConfig::from_file(path)
            .with_context(|| format!("Invalid configuration in {}", path.display())),
        None => Ok(SummarizerConfig::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    // RUST_LOG wins over --log-level when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "visit_summarizer={0},visit_summarizer_core={0}",
            level.as_str().to_lowercase()
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    debug!("visit-summarizer v{} starting", env!("CARGO_PKG_VERSION"));

    let config = load_config(cli.config.as_ref())?;
    let history = read_history(cli.input.as_ref())?;
    debug!("Loaded {} notes", history.notes.len());

    let mut builder = SummarizerBuilder::new().with_config(config);
    if let Some(now) = cli.now {
        builder = builder.with_now(now);
    }
    let summarizer = builder.build(&history.notes, history.dates());

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if cli.json {
        let report = summarizer.report_with(cli.style, &mut rng);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let narrative = match cli.style {
        NarrativeStyle::ActionOriented => summarizer.generate_action_oriented_narrative_with(&mut rng),
        style => summarizer.generate_narrative_with(style, &mut rng),
    };
    println!("{}", narrative);

    if cli.review {
        let notes = summarizer.notes_to_review();
        println!();
        if notes.is_empty() {
            println!("Notas para revisar: ninguna");
        } else {
            println!("Notas para revisar:");
            for note in notes {
                println!("  - {}", note);
            }
        }
    }

    Ok(())
}
