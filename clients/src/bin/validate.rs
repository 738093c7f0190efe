//! `lexicon-validate` — Loads a dictionary tree and runs the conformance
//! suite against it.
//!
//! **Usage:**
//! ```text
//! lexicon-validate [-v | -vv] <path/to/dictionary.yaml>
//! ```
//!
//! Exits non-zero if the dictionary fails to load or any conformance check
//! fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use lexicon_dictionary::Dictionary;
use tracing_subscriber::EnvFilter;

/// Validate a property dictionary.
#[derive(Parser)]
#[command(
    name = "lexicon-validate",
    version,
    about = "Validate a property dictionary tree"
)]
struct Args {
    /// Path to the dictionary.yaml at the root of a dictionary tree.
    path: PathBuf,

    /// Increase log verbosity (-v: info, -vv: debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let dictionary = match Dictionary::load(&args.path) {
        Ok(dictionary) => dictionary,
        Err(err) => {
            eprintln!("error: {:#}", anyhow::Error::new(err));
            process::exit(1);
        }
    };

    let report = lexicon_conformance::run_all(&dictionary);

    println!("{} {} ({} checks)", dictionary.id, dictionary.version, report.results.len());
    for result in &report.results {
        println!("  {} {}: {}", result.severity.tag(), result.validator, result.message);
    }

    let failed = report.failure_count();
    let warned = report.warning_count();
    if !report.all_passed() {
        eprintln!("{failed} failure(s), {warned} warning(s): dictionary does not conform");
        process::exit(1);
    }
    if warned > 0 {
        println!("conforms with {warned} warning(s)");
    } else {
        println!("conforms");
    }
    Ok(())
}
