//! wordtab CLI entry point.
//!
//! Loads the word list into every configured table instance, checks one
//! password and prints the verdict followed by per-instance comparison counts.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use wordtab_check::{load_word_list, CheckerConfig, LoggingConfig, StrengthChecker, TableSet};

/// Check a password against a dictionary held in instrumented hash tables
#[derive(Debug, Parser)]
#[command(name = "wordtab", version, about)]
struct Cli {
    /// Password to check
    password: String,

    /// Word list, one word per line
    #[arg(short, long)]
    wordlist: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Buckets per separate chaining table
    #[arg(long)]
    chaining_capacity: Option<usize>,

    /// Slots per linear probing table
    #[arg(long)]
    probing_capacity: Option<usize>,

    /// Minimum password length
    #[arg(long)]
    min_length: Option<usize>,
}

impl Cli {
    /// Flags take precedence over file and environment settings
    fn apply(&self, config: &mut CheckerConfig) {
        if let Some(path) = &self.wordlist {
            config.wordlist.path = path.clone();
        }
        if let Some(capacity) = self.chaining_capacity {
            config.tables.chaining_capacity = capacity;
        }
        if let Some(capacity) = self.probing_capacity {
            config.tables.probing_capacity = capacity;
        }
        if let Some(min_length) = self.min_length {
            config.checker.min_length = min_length;
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match load_configuration(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.logging);

    if let Err(e) = run(&cli.password, &config) {
        tracing::error!("check failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment, then apply CLI flags
fn load_configuration(cli: &Cli) -> anyhow::Result<CheckerConfig> {
    resolve_config(cli, None)
}

/// Layer flags over file and `env` (process environment when `None`),
/// validating only the final result
fn resolve_config(
    cli: &Cli,
    env: Option<config::Map<String, String>>,
) -> anyhow::Result<CheckerConfig> {
    let mut config = CheckerConfig::load_from(cli.config.as_deref(), env)?;
    cli.apply(&mut config);
    config.validate()?;
    Ok(config)
}

/// Initialize tracing/logging on stderr
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

fn run(password: &str, config: &CheckerConfig) -> anyhow::Result<()> {
    let words = load_word_list(&config.wordlist.path)?;

    let mut tables = TableSet::new(&config.tables)?;
    let load = tables
        .populate(&words)
        .with_context(|| format!("loading {}", config.wordlist.path.display()))?;
    tracing::info!(words = load.words, digest = %load.digest, "dictionary loaded");

    let checker = StrengthChecker::new(&tables, &config.checker);
    let assessment = checker.check(password)?;

    println!("{}\n", assessment.verdict);
    print!("{}", assessment.report);

    Ok(())
}
