use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod classifier;
mod features;
mod feedback;
mod lexicon;
mod models;
mod report;
mod responses;
mod scoring;
mod transcript;

use models::{ObjectionCategory, TurnSender};

#[derive(Parser)]
#[command(name = "objection-coach")]
#[command(about = "Heuristic objection detection and coaching feedback for sales responses", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify an utterance into an objection category
    Detect {
        #[arg(long)]
        text: String,
        #[arg(long)]
        json: bool,
    },
    /// Generate an Acknowledge-Reframe-Engage response for a category
    Respond {
        #[arg(long)]
        category: ObjectionCategory,
        #[arg(long, default_value = "general")]
        industry: String,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
    },
    /// Score one rep response and produce full coaching feedback
    Analyze {
        #[arg(long)]
        text: String,
        /// Objection category being handled; detected from the text when omitted
        #[arg(long)]
        category: Option<ObjectionCategory>,
        /// Prior-turn transcript (CSV with sender,text header, or JSON array)
        #[arg(long)]
        transcript: Option<PathBuf>,
        /// 1-based response index; derived from the transcript when omitted
        #[arg(long)]
        response_number: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Generate a markdown coaching report for a whole session transcript
    Report {
        #[arg(long)]
        transcript: PathBuf,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Detect { text, json } => {
            let result = classifier::detect(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!(
                    "Category: {} (confidence {:.2})",
                    result.category, result.confidence
                );
                if !result.matched_keywords.is_empty() {
                    println!("Matched: {}", result.matched_keywords.join(", "));
                }
            }
        }
        Commands::Respond {
            category,
            industry,
            seed,
            json,
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let parts = responses::generate_response(&mut rng, category, &industry);
            if json {
                println!("{}", serde_json::to_string_pretty(&parts)?);
            } else {
                println!("{}", parts.formatted());
            }
        }
        Commands::Analyze {
            text,
            category,
            transcript,
            response_number,
            json,
        } => {
            let history = match transcript {
                Some(path) => transcript::load(&path)?,
                None => Vec::new(),
            };
            let response_number = response_number.unwrap_or_else(|| {
                history.iter().filter(|t| t.sender == TurnSender::Rep).count() + 1
            });
            // The objection being handled lives in the prospect's last turn;
            // fall back to the rep's own text without a transcript.
            let category = category.unwrap_or_else(|| {
                let source = history
                    .iter()
                    .rev()
                    .find(|t| t.sender == TurnSender::Prospect)
                    .map(|t| t.text.as_str())
                    .unwrap_or(&text);
                classifier::detect(source).category
            });

            let report = feedback::build_feedback(&text, category, &history, response_number);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_feedback(&report);
            }
        }
        Commands::Report { transcript, out } => {
            let turns = transcript::load(&transcript)?;
            let rendered = report::build_report(&turns, Utc::now().date_naive());
            std::fs::write(&out, rendered)
                .with_context(|| format!("failed to write report to {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}

fn print_feedback(report: &models::FeedbackReport) {
    let analysis = &report.response_analysis;
    println!("Overall score: {}", report.overall_score);
    println!(
        "Tone {} | Clarity {} | Objection handling {}",
        analysis.tone.rating, analysis.clarity.rating, analysis.objection_handling.rating
    );
    println!("{}", report.session_progression.confidence_progression);

    for strength in report.strengths.iter() {
        println!("Strength ({}): {}", strength.category, strength.description);
    }
    for improvement in report.improvements.iter() {
        println!(
            "Improve ({}): {} {}",
            improvement.category, improvement.description, improvement.specific_suggestion
        );
    }
    for missed in report.missed_opportunities.iter() {
        println!("Missed: {} {}", missed.description, missed.better_approach);
    }
    for tip in report.coaching_tips.immediate.iter() {
        println!("Tip now: {tip}");
    }
    for tip in report.coaching_tips.long_term.iter() {
        println!("Tip long-term: {tip}");
    }
    println!("Ideal response: {}", report.ideal_response.text);
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .compact()
        .init();
}
