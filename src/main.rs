//! sememe-sim
//!
//! Command line front end for the word similarity engine.
//!
//! - `sememe-sim word 牛 猪 --explain`: similarity of two words
//! - `sememe-sim primitive 雇用 争斗`: distance and similarity of two sememes
//! - `sememe-sim stats`: dictionary counts

use std::path::PathBuf;
use std::process::ExitCode;
use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};
use sememe_similarity::scoring::explanation::SenseComparison;
use sememe_similarity::{Config, Lexicon, Result};

#[derive(Parser)]
#[command(name = "sememe-sim")]
#[command(version)]
#[command(about = "Word similarity over a sememe hierarchy")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON config file; flags below override it
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Glossary file (word senses)
    #[arg(long, global = true)]
    glossary: Option<PathBuf>,

    /// Sememe hierarchy file
    #[arg(long, global = true)]
    hierarchy: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Similarity of two words
    Word {
        word1: String,
        word2: String,
        /// Show the winning sense pair and its layer scores
        #[arg(long)]
        explain: bool,
    },
    /// Distance and similarity of two sememes
    Primitive { primitive1: String, primitive2: String },
    /// Dictionary statistics as JSON
    Stats,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "sememe-sim failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    if let Some(path) = cli.glossary {
        config.glossary_path = path;
    }
    if let Some(path) = cli.hierarchy {
        config.hierarchy_path = path;
    }

    let lexicon = Lexicon::open(&config)?;

    match cli.command {
        Some(Commands::Word { word1, word2, explain: false }) => {
            println!("{}", lexicon.similarity_of_words(&word1, &word2));
        }
        Some(Commands::Word { word1, word2, explain: true }) => {
            let explanation = lexicon.explain_words(&word1, &word2)?;
            println!("{} / {}: {}", word1, word2, explanation.score());
            println!(
                "  best senses: #{} / #{} of {} pairs",
                explanation.sense1, explanation.sense2, explanation.pairs_scored
            );
            match explanation.best.comparison {
                SenseComparison::Content(layers) => {
                    println!("  first primitive:     {:.4}", layers.first);
                    println!("  other primitives:    {:.4}", layers.others);
                    println!("  relational:          {:.4}", layers.relational);
                    println!("  relation symbols:    {:.4}", layers.symbols);
                }
                SenseComparison::Structural => println!("  structural words compared"),
                SenseComparison::Incomparable => println!("  function word vs content word"),
            }
        }
        Some(Commands::Primitive { primitive1, primitive2 }) => {
            println!(
                "distance {}  similarity {}",
                lexicon.distance_of_primitives(&primitive1, &primitive2),
                lexicon.similarity_of_primitives(&primitive1, &primitive2)
            );
        }
        Some(Commands::Stats) => {
            println!("{}", serde_json::to_string_pretty(lexicon.stats())?);
        }
        None => {
            println!("中国 / 联合国: {}", lexicon.similarity_of_words("中国", "联合国"));
        }
    }

    Ok(())
}
