#![deny(missing_docs)]
//! Clearance command-line interface.
//!
//! Assembles a submission snapshot from a JSON file or inline flags, runs the
//! copyright risk analysis, and renders the report.

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use clearance_core::{
    AnalysisReport, REFERENCE_LINKS, StdFileSystem, Submission, analyze, load_submission,
    render_json, render_markdown, render_text,
};
use std::fmt::Write;
use std::path::PathBuf;
use std::time::Duration;
use utoipa::OpenApi;

pub(crate) type CliResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Parser)]
#[command(name = "clearance", version, about = "Clearance CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(&["file", "title"])
))]
struct SubmissionArgs {
    /// Submission JSON file to analyze.
    #[arg(short, long)]
    file: Option<PathBuf>,
    /// Video title (inline submission mode).
    #[arg(long)]
    title: Option<String>,
    /// Video description.
    #[arg(long, default_value = "")]
    description: String,
    /// Comma-separated tags.
    #[arg(long, default_value = "")]
    tags: String,
    /// The video contains music.
    #[arg(long)]
    uses_music: bool,
    /// Where the music came from (e.g. original, royalty-free, commercial).
    #[arg(long, default_value = "")]
    music_source: String,
    /// The video contains third-party footage.
    #[arg(long)]
    uses_footage: bool,
    /// Where the footage came from (e.g. original, stock, movie).
    #[arg(long, default_value = "")]
    footage_source: String,
    /// The video contains text from external sources.
    #[arg(long)]
    has_text: bool,
    /// Where the text came from (e.g. original, book, article).
    #[arg(long, default_value = "")]
    text_source: String,
    /// Path to a custom thumbnail. Only presence matters; never read.
    #[arg(long)]
    thumbnail: Option<PathBuf>,
}

#[derive(Args, Clone)]
struct OutputArgs {
    /// Output format for report data.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write the report to a file instead of stdout.
    #[arg(long = "report-output")]
    report_output: Option<PathBuf>,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
enum OutputFormat {
    Text,
    Json,
    Markdown,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a submission for copyright risk.
    Check {
        #[command(flatten)]
        submission: SubmissionArgs,
        #[command(flatten)]
        report: OutputArgs,
        /// Pause this many seconds before analyzing, simulating a slow
        /// backend. The result is identical either way.
        #[arg(long, default_value_t = 0)]
        simulate_delay: u64,
    },
    /// Write a blank submission JSON to fill in.
    Template {
        /// Destination file; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print reference links for copyright and licensing questions.
    Resources,
    /// Print OpenAPI schemas for the submission and report types.
    Schema,
}

#[cfg(not(test))]
#[tokio::main]
async fn main() -> CliResult<()> {
    log_builder().init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            submission,
            report,
            simulate_delay,
        } => run_check(submission, report, simulate_delay).await?,
        Commands::Template { output } => run_template(output).await?,
        Commands::Resources => print!("{}", render_resources()),
        Commands::Schema => println!("{}", ApiDoc::openapi().to_pretty_json()?),
    }

    Ok(())
}

#[cfg(test)]
fn main() {}

/// Logger builder honoring `RUST_LOG`, defaulting to `info`.
fn log_builder() -> env_logger::Builder {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
}

/// Schema export for the submission and report data model.
#[derive(OpenApi)]
#[openapi(components(schemas(
    Submission,
    AnalysisReport,
    clearance_core::RiskLevel,
    clearance_core::Dimension,
    clearance_core::DimensionVerdict,
    clearance_core::DimensionAnalysis,
    clearance_core::Issue,
    clearance_core::Recommendation,
)))]
struct ApiDoc;

async fn run_check(args: SubmissionArgs, report: OutputArgs, simulate_delay: u64) -> CliResult<()> {
    let submission = resolve_submission(&args)?;
    log::info!("analyzing submission titled {:?}", submission.title);

    if simulate_delay > 0 {
        tokio::time::sleep(Duration::from_secs(simulate_delay)).await;
    }

    // The engine is synchronous and pure; run it off the async executor the
    // way a real backend would schedule blocking work.
    let analysis = tokio::task::spawn_blocking(move || analyze(&submission)).await?;
    log::info!(
        "analysis complete: overall risk {}, {} issue(s)",
        analysis.overall_risk.label(),
        analysis.issues.len()
    );

    emit_report(&analysis, &report).await
}

async fn run_template(output: Option<PathBuf>) -> CliResult<()> {
    let template = serde_json::to_string_pretty(&Submission::default())?;
    match output {
        Some(path) => {
            tokio::fs::write(&path, template).await?;
            log::info!("wrote submission template to {}", path.display());
        }
        None => println!("{template}"),
    }
    Ok(())
}

fn resolve_submission(args: &SubmissionArgs) -> CliResult<Submission> {
    let submission = if let Some(file) = &args.file {
        load_submission(&StdFileSystem::new(), file)?
    } else {
        submission_from_flags(args)
    };

    // The engine tolerates an empty title, but analysis is meaningless
    // without one; refuse here, at the caller boundary.
    if submission.title.trim().is_empty() {
        return Err("submission title must not be empty".into());
    }

    Ok(submission)
}

fn submission_from_flags(args: &SubmissionArgs) -> Submission {
    Submission {
        title: args.title.clone().unwrap_or_default(),
        description: args.description.clone(),
        tags: args.tags.clone(),
        uses_music: args.uses_music,
        music_source: args.music_source.clone(),
        uses_footage: args.uses_footage,
        footage_source: args.footage_source.clone(),
        has_text: args.has_text,
        text_source: args.text_source.clone(),
        video_file: None,
        audio_file: None,
        thumbnail_file: args.thumbnail.clone(),
    }
}

async fn emit_report(analysis: &AnalysisReport, output: &OutputArgs) -> CliResult<()> {
    let contents = match output.format {
        OutputFormat::Text => render_text(analysis),
        OutputFormat::Markdown => render_markdown(analysis),
        OutputFormat::Json => render_json(analysis)?,
    };

    if let Some(path) = &output.report_output {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, contents).await?;
        log::info!("wrote report to {}", path.display());
    } else {
        print!("{contents}");
    }
    Ok(())
}

fn render_resources() -> String {
    let mut output = String::new();
    for link in REFERENCE_LINKS {
        let _ = writeln!(output, "{}", link.title);
        let _ = writeln!(output, "  {}", link.blurb);
        let _ = writeln!(output, "  {}", link.url);
    }
    output
}
