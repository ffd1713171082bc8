//! Analyze command — text statistics for a file or stdin.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use aimpact_core::{AnalysisResult, ReadabilityBand, Sentiment, metrics};

use super::{read_input_file, read_input_stdin};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze. Reads stdin when omitted or `-`.
    pub file: Option<Utf8PathBuf>,

    /// Minimum acceptable readability score (0–100).
    #[arg(long)]
    pub min_readability: Option<f64>,
}

/// Analyze a file (or stdin) and print its statistics.
#[instrument(name = "cmd_analyze", skip_all, fields(file = ?args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config_min_readability: Option<f64>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = ?args.file, min_readability = ?args.min_readability, "executing analyze command");

    let (label, content) = match args.file {
        Some(ref path) if path.as_str() != "-" => {
            (path.to_string(), read_input_file(path, max_input_bytes)?)
        }
        _ => ("<stdin>".to_string(), read_input_stdin(max_input_bytes)?),
    };

    let min_readability = args.min_readability.or(config_min_readability);
    let report = metrics::analyze(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&label, &report);
    }

    if let Some(min) = min_readability
        && report.readability_score < min
    {
        bail!(
            "{label} readability {:.0} is below minimum {min:.0}. Shorten sentences.",
            report.readability_score,
        );
    }

    Ok(())
}

/// Print a human-readable report.
pub fn print_report(label: &str, report: &AnalysisResult) {
    println!("{}", label.bold());
    println!(
        "\n  {} {} words, {} characters, {} sentences, {} paragraphs",
        "Counts:".cyan(),
        report.word_count,
        report.character_count,
        report.sentence_count,
        report.paragraph_count,
    );
    println!("  {} {}m", "Read time:".cyan(), report.reading_time);
    println!(
        "  {} {}",
        "Sentiment:".cyan(),
        sentiment_colored(report.sentiment)
    );
    println!(
        "  {} {}/100 ({})",
        "Readability:".cyan(),
        readability_colored(report.readability_score),
        report.readability_band(),
    );
    if !report.key_words.is_empty() {
        println!(
            "  {} {}",
            "Key words:".cyan(),
            report.key_words.join(", ")
        );
    }
}

fn sentiment_colored(sentiment: Sentiment) -> String {
    match sentiment {
        Sentiment::Positive => sentiment.green().to_string(),
        Sentiment::Negative => sentiment.red().to_string(),
        Sentiment::Neutral => sentiment.dimmed().to_string(),
    }
}

fn readability_colored(score: f64) -> String {
    let rounded = format!("{score:.0}");
    match ReadabilityBand::from_score(score) {
        ReadabilityBand::Good => rounded.green().to_string(),
        ReadabilityBand::Fair => rounded.yellow().to_string(),
        ReadabilityBand::Poor => rounded.red().to_string(),
    }
}
