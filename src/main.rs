use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::{ColoredString, Colorize};

use carbon::config::{Config, SegmenterBackend};
use carbon::segment::jieba::JiebaSegmenter;
use carbon::segment::whitespace::WhitespaceSegmenter;
use carbon::segment::Tokenizer;
use carbon::{io, pipeline};

/// Carbon: carbon-copy screening for document pairs.
///
/// Scores how much of a candidate document is lexically lifted from an
/// original, writing a 0.00-1.00 similarity score to the answer file.
#[derive(Parser)]
#[command(name = "carbon", version, about)]
struct Cli {
    /// Path to the original document
    original: PathBuf,

    /// Path to the candidate (suspected copy) document
    candidate: PathBuf,

    /// Path the two-decimal similarity score is written to
    output: PathBuf,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("carbon=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let tokenizer = build_tokenizer(&config);

    let original = io::read_document(&cli.original)?;
    let candidate = io::read_document(&cli.candidate)?;

    let score = pipeline::compare(&original, &candidate, &tokenizer);
    let formatted = pipeline::format_score(score);
    io::write_score(&cli.output, &formatted)?;

    println!("Similarity: {}", colorize_score(score, &formatted));

    Ok(())
}

fn build_tokenizer(config: &Config) -> Tokenizer {
    match config.segmenter_backend {
        SegmenterBackend::Jieba => Tokenizer::new(Box::new(JiebaSegmenter::default())),
        SegmenterBackend::Whitespace => Tokenizer::new(Box::new(WhitespaceSegmenter)),
    }
}

/// Color the score by how much copying it suggests.
fn colorize_score(score: f64, formatted: &str) -> ColoredString {
    if score >= 0.8 {
        formatted.red().bold()
    } else if score >= 0.5 {
        formatted.yellow()
    } else {
        formatted.green()
    }
}
