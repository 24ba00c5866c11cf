use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use dotenvy::dotenv;
use serde::Serialize;
use tracing::error;

use rm_cli::error::CliError;
use rm_cli::input::{self, CandidateOverrides};
use rm_cli::{pdf, render};
use rm_core::extraction::extract_skills_by_category;
use rm_core::matching::{MatchingConfig, ScoringEngine};
use rm_core::report::MatchReport;

#[derive(Debug, Parser)]
#[command(name = "rm-cli", about = "Score a candidate resume against a job description", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score a candidate against a job description
    Score(ScoreArgs),
    /// Extract skills from a resume PDF or plain text file
    Extract(ExtractArgs),
}

#[derive(Debug, Args)]
struct ScoreArgs {
    /// Job description JSON file
    #[arg(long, env = "RM_JOB_FILE")]
    job: PathBuf,

    /// Candidate profile JSON file
    #[arg(long, conflicts_with = "pdf")]
    resume: Option<PathBuf>,

    /// Candidate resume PDF (skills are auto-extracted)
    #[arg(long)]
    pdf: Option<PathBuf>,

    /// Candidate name (PDF input; default is the first line of the text)
    #[arg(long, requires = "pdf")]
    name: Option<String>,

    /// Candidate skills as a comma-separated list (overrides PDF auto-detection)
    #[arg(long, requires = "pdf")]
    skills: Option<String>,

    /// Candidate experience years (PDF input)
    #[arg(long, requires = "pdf")]
    experience_years: Option<f64>,

    /// Candidate qualification, e.g. "bachelor's degree" (PDF input)
    #[arg(long, requires = "pdf")]
    qualification: Option<String>,

    /// Emit a JSON report instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct ExtractArgs {
    /// Resume PDF file
    #[arg(long, conflicts_with = "text")]
    pdf: Option<PathBuf>,

    /// Plain text file
    #[arg(long)]
    text: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct CategoryHits<'a> {
    category: &'a str,
    skills: &'a [String],
}

fn main() -> ExitCode {
    dotenv().ok();
    rm_core::logging::init_tracing_subscriber("rm-cli");
    rm_core::logging::install_tracing_panic_hook("rm-cli");

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Score(args) => run_score(args),
        Commands::Extract(args) => run_extract(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_score(args: ScoreArgs) -> Result<(), CliError> {
    let job = input::load_job(&args.job)?;

    let (candidate, detected) = match (&args.resume, &args.pdf) {
        (Some(path), _) => (input::load_candidate(path)?, None),
        (None, Some(path)) => {
            let overrides = CandidateOverrides {
                name: args.name.clone(),
                skills: args.skills.as_deref().map(input::parse_skill_list),
                experience_years: args.experience_years,
                qualification: args.qualification.clone(),
            };
            let (candidate, detected) = input::candidate_from_pdf(path, &overrides);
            (candidate, Some(detected))
        }
        (None, None) => {
            return Err(CliError::InvalidInput(
                "either --resume or --pdf is required".to_string(),
            ))
        }
    };

    let score =
        ScoringEngine::new(MatchingConfig::default()).calculate_match_score(&candidate, &job);

    let mut report = MatchReport::from_match_score(&candidate, &job, &score);
    if let Some(detected) = detected {
        report = report.with_detected_skills(detected);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render::render_report(&report));
    }
    Ok(())
}

fn run_extract(args: ExtractArgs) -> Result<(), CliError> {
    let text = match (&args.text, &args.pdf) {
        (Some(path), _) => {
            std::fs::read_to_string(path).map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            })?
        }
        (None, Some(path)) => pdf::extract_text(path),
        (None, None) => {
            return Err(CliError::InvalidInput(
                "either --pdf or --text is required".to_string(),
            ))
        }
    };

    let grouped = extract_skills_by_category(&text);

    if args.json {
        let rows: Vec<CategoryHits<'_>> = grouped
            .iter()
            .map(|(category, skills)| CategoryHits {
                category: *category,
                skills: skills.as_slice(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", render::render_extraction(&grouped));
    }
    Ok(())
}
