use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use studypack::config::Config;
use studypack::output::terminal;
use studypack::source;
use studypack::Pipeline;

/// Studypack: study material from document text.
///
/// Builds an extractive summary, fill-in-the-blank quiz questions, and
/// definition flashcards from extracted text, using simple word-frequency
/// heuristics and no language model.
#[derive(Parser)]
#[command(name = "studypack", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a summary, quiz, and flashcards from a text file
    Generate {
        /// Extracted text, pages separated by form feeds
        path: PathBuf,

        /// Print the study pack as JSON instead of a terminal report
        #[arg(long)]
        json: bool,

        /// Seed the quiz shuffling for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the ranked keyword vocabulary of a text file
    Keywords {
        /// Extracted text, pages separated by form feeds
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging on stderr so JSON on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("studypack=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Generate { path, json, seed } => {
            let text = source::load_text(&path, &config.limits)?;
            source::ensure_sufficient(&text, &config.limits)?;

            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };

            info!(path = %path.display(), seed, "Generating study pack");
            let pipeline = Pipeline::new(config.pipeline);
            let pack = pipeline.run(&text, &mut rng);

            if json {
                let out = serde_json::to_string_pretty(&pack)
                    .context("Failed to serialize study pack")?;
                println!("{out}");
            } else {
                terminal::display_study_pack(&pack);
            }
        }

        Commands::Keywords { path } => {
            let text = source::load_text(&path, &config.limits)?;
            let pipeline = Pipeline::new(config.pipeline);
            let doc = pipeline.analyze(&text);
            terminal::display_vocabulary(doc.vocabulary());
        }
    }

    Ok(())
}
