//! Niihau - Main entrypoint.
//!
//! Command-line front end for the prefix index. Each invocation loads the
//! configured snapshot into a fresh index, runs one command, and writes the
//! snapshot back when the command mutates the index.

use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use niihau_lib::config::{ConfigLoader, LogConfig, NiihauConfig, ENV_PREFIX};
use niihau_lib::data_structures::PrefixIndex;
use niihau_lib::error::{
    report_error, set_error_reporter, ErrorContext, NiihauError, NiihauResult,
    TracingErrorReporter,
};
use niihau_lib::snapshot;
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Niihau.
#[derive(Parser, Debug)]
#[clap(name = "niihau", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Snapshot to use instead of the configured one
    #[clap(short, long, value_parser)]
    snapshot: Option<PathBuf>,

    /// Print results as JSON
    #[clap(long)]
    json: bool,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print the best completions for a prefix
    Complete {
        /// Prefix to complete (empty ranks the whole index)
        #[clap(default_value = "")]
        prefix: String,

        /// Maximum number of completions
        #[clap(short, value_parser)]
        k: Option<usize>,
    },

    /// Check whether a word is stored
    Contains {
        /// Word to look up
        word: String,
    },

    /// Print word count, height, and node count
    Stats,

    /// Insert or update a word and save the snapshot
    Insert {
        /// Word to insert
        word: String,

        /// Score to store with the word
        #[clap(allow_hyphen_values = true)]
        score: f64,
    },

    /// Remove a word and save the snapshot
    Remove {
        /// Word to remove
        word: String,
    },

    /// Write a synthetic word list snapshot
    GenWordlist {
        /// Output path (defaults to the configured snapshot)
        #[clap(short, long, value_parser)]
        output: Option<PathBuf>,

        /// Number of words to generate
        #[clap(long)]
        count: Option<usize>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr so
/// command output on stdout stays clean.
fn init_logging(log: &LogConfig) -> NiihauResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| NiihauError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Loads the snapshot at `path` into a fresh index.
fn load_index(path: &Path) -> NiihauResult<PrefixIndex> {
    let index = snapshot::load_index(path)?;
    info!(path = %path.display(), words = index.len(), "index loaded");
    Ok(index)
}

/// Writes `index` back to `path`.
fn save_index(path: &Path, index: &PrefixIndex) -> NiihauResult<()> {
    let rows = snapshot::save_index(path, index)?;
    info!(path = %path.display(), rows, "index saved");
    Ok(())
}

/// Runs one command against a loaded configuration.
fn run(args: Args, config: NiihauConfig) -> NiihauResult<()> {
    let snapshot_path = args.snapshot.unwrap_or_else(|| config.snapshot.path.clone());

    match args.command {
        Command::Complete { prefix, k } => {
            let index = load_index(&snapshot_path)?;
            let limit = config.index.effective_limit(k);
            let completions = index.complete_scored(&prefix, limit);

            if args.json {
                println!("{}", serde_json::to_string_pretty(&completions)?);
            } else {
                for completion in &completions {
                    println!("{}\t{}", completion.word, completion.score);
                }
            }
        }
        Command::Contains { word } => {
            let index = load_index(&snapshot_path)?;
            let found = index.contains(&word);

            if args.json {
                let answer = json!({
                    "word": word.to_lowercase(),
                    "contains": found,
                    "score": index.score(&word),
                });
                println!("{answer}");
            } else {
                println!("{found}");
            }
        }
        Command::Stats => {
            let index = load_index(&snapshot_path)?;
            let stats = index.stats();

            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("words:  {}", stats.word_count);
                println!("height: {}", stats.height);
                println!("nodes:  {}", stats.node_count);
            }
        }
        Command::Insert { word, score } => {
            let mut index = if snapshot_path.exists() {
                load_index(&snapshot_path)?
            } else {
                PrefixIndex::new()
            };
            index.insert(&word, score);
            save_index(&snapshot_path, &index)?;
        }
        Command::Remove { word } => {
            let mut index = load_index(&snapshot_path)?;
            let removed = index.remove(&word);
            if removed {
                save_index(&snapshot_path, &index)?;
            } else {
                info!(word = %word, "word not stored, snapshot left unchanged");
            }
            println!("{removed}");
        }
        Command::GenWordlist { output, count } => {
            let output = output.unwrap_or(snapshot_path);
            let count = count.unwrap_or(config.snapshot.wordlist_size);
            let rows = snapshot::save_snapshot(&output, snapshot::synthetic_wordlist(count))?;
            info!(path = %output.display(), rows, "word list written");
        }
        Command::Validate => {
            info!("Configuration validated successfully");
        }
        Command::GenConfig { output } => {
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&NiihauConfig::default())
                .map_err(|e| NiihauError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
        }
    }

    Ok(())
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    // Logging needs the configuration, so a config error is reported after
    // falling back to default logging.
    let loaded = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load();
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    if let Err(e) = init_logging(&log_config) {
        eprintln!("{e}");
    }

    set_error_reporter(Arc::new(TracingErrorReporter));

    let command = format!("{:?}", args.command);

    let result = loaded
        .map_err(NiihauError::from)
        .and_then(|config| run(args, config));

    if let Err(error) = result {
        report_error(&ErrorContext::new(error, "niihau").with_details(command));
        process::exit(1);
    }
}
