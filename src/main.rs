//! Wordrack - CLI
//!
//! Rack word finder with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use wordrack::{
    commands::{FindConfig, deal_racks, run_benchmark, run_find, run_simple},
    config::Config,
    engine::{QueryEngine, RefineFilter, Session, Variant},
    output::{formatters::to_json, print_benchmark_result, print_find_result},
    wordlists::{DEFAULT_WORDS, loader::{load_from_file, words_from_slice}},
};

#[derive(Parser)]
#[command(
    name = "wordrack",
    about = "Find every dictionary word that can be spelled from a rack of letter tiles",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Engine variant: plain, wildcard, scored, full (default)
    #[arg(long, global = true)]
    variant: Option<Variant>,

    /// Word list file, one word per line (default: embedded dictionary)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Config file (default: platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Scan the dictionary on all cores
    #[arg(long, global = true)]
    parallel: bool,

    /// Increase log verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode with a 4x4 letter grid (default)
    Play,

    /// Simple CLI mode (line-based session without TUI)
    Simple,

    /// Query a single rack
    Find {
        /// Rack letters; `*`, `?` or `_` for a blank
        letters: String,

        /// Required letter at a 1-based position, e.g. `1=C` (repeatable)
        #[arg(short, long = "constraint")]
        constraints: Vec<String>,

        /// Keep only words starting with this text
        #[arg(long)]
        starts_with: Option<String>,

        /// Keep only words ending with this text
        #[arg(long)]
        ends_with: Option<String>,

        /// Keep only words containing this text
        #[arg(long)]
        contains: Option<String>,

        /// Maximum number of words to show
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Benchmark queries on random racks
    Benchmark {
        /// Number of random racks to query
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,

        /// Tiles per rack (default: config value, 16)
        #[arg(short, long)]
        rack_size: Option<usize>,

        /// Seed for reproducible racks
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Effective settings after merging the config file with command-line flags
struct Settings {
    engine: QueryEngine,
    wordlist: Option<PathBuf>,
    limit: Option<usize>,
    rack_size: usize,
}

impl Settings {
    fn resolve(cli: &Cli, config: Config) -> Self {
        let variant = cli.variant.unwrap_or(config.variant);
        Self {
            engine: QueryEngine::from_variant(variant).with_parallel(cli.parallel || config.parallel),
            wordlist: cli.wordlist.clone().or(config.wordlist),
            limit: config.limit,
            rack_size: config.rack_size,
        }
    }
}

/// Log level used when `RUST_LOG` is not set
const fn default_log_level(verbose: u8) -> &'static str {
    if verbose == 0 { "warn" } else { "debug" }
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the dictionary named by the settings
fn load_dictionary(wordlist: Option<&PathBuf>) -> Result<Vec<String>> {
    match wordlist {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to load word list {}", path.display())),
        None => Ok(words_from_slice(DEFAULT_WORDS)),
    }
}

/// Interactive front ends keep running on an empty dictionary
fn load_dictionary_or_empty(wordlist: Option<&PathBuf>) -> Vec<String> {
    load_dictionary(wordlist).unwrap_or_else(|e| {
        eprintln!("{} {e:#}", "⚠".yellow());
        Vec::new()
    })
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // The TUI owns the terminal, so it never gets a log subscriber
    let command = cli.command.take().unwrap_or(Commands::Play);
    if !matches!(command, Commands::Play) {
        init_logging(cli.verbose);
    }

    let config = Config::load(cli.config.as_deref()).context("failed to load config")?;
    let settings = Settings::resolve(&cli, config);
    info!(
        capabilities = ?settings.engine.capabilities(),
        parallel = settings.engine.is_parallel(),
        "engine configured"
    );

    match command {
        Commands::Play => run_play_command(&settings),
        Commands::Simple => run_simple_command(&settings),
        Commands::Find {
            letters,
            constraints,
            starts_with,
            ends_with,
            contains,
            limit,
            json,
        } => {
            let mut filter = RefineFilter::new();
            filter.set_starts_with(starts_with.as_deref().unwrap_or_default());
            filter.set_ends_with(ends_with.as_deref().unwrap_or_default());
            filter.set_contains(contains.as_deref().unwrap_or_default());

            let config = FindConfig {
                rack: letters,
                constraints,
                filter,
                limit: limit.or(settings.limit),
            };
            run_find_command(config, json, &settings)
        }
        Commands::Benchmark {
            count,
            rack_size,
            seed,
        } => run_benchmark_command(count, rack_size.unwrap_or(settings.rack_size), seed, &settings),
    }
}

fn run_find_command(config: FindConfig, json: bool, settings: &Settings) -> Result<()> {
    let dictionary = load_dictionary(settings.wordlist.as_ref())?;
    let result = run_find(config, &settings.engine, &dictionary)?;

    if json {
        println!("{}", to_json(&result.view())?);
    } else {
        print_find_result(&result);
    }
    Ok(())
}

fn run_benchmark_command(
    count: usize,
    rack_size: usize,
    seed: Option<u64>,
    settings: &Settings,
) -> Result<()> {
    let dictionary = load_dictionary(settings.wordlist.as_ref())?;
    if dictionary.is_empty() {
        warn!("benchmarking against an empty dictionary");
    }

    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let racks = deal_racks(&mut rng, count, rack_size);

    println!(
        "Running benchmark on {count} random racks of {rack_size} tiles ({} words)...",
        dictionary.len()
    );
    let result = run_benchmark(&settings.engine, &dictionary, &racks, true);
    print_benchmark_result(&result);
    Ok(())
}

fn run_simple_command(settings: &Settings) -> Result<()> {
    let dictionary = load_dictionary_or_empty(settings.wordlist.as_ref());
    run_simple(Session::new(settings.engine), &dictionary, settings.rack_size)
        .map_err(|e| anyhow::anyhow!(e))
}

fn run_play_command(settings: &Settings) -> Result<()> {
    use wordrack::interactive::{App, run_tui};

    let dictionary = Arc::new(load_dictionary_or_empty(settings.wordlist.as_ref()));
    let app = App::new(Session::new(settings.engine), dictionary);
    run_tui(app)
}
