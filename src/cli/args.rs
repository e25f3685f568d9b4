//! CLI argument definitions.

use crate::constants::{DEFAULT_SAMPLE, env};
use clap::Parser;
use std::path::PathBuf;

/// Resolve DNN sample preprocessing parameters from a model catalog.
///
/// The first argument selects a catalog entry whose fields become the
/// defaults of the preprocessing options.
#[derive(Debug, Clone, Parser)]
#[command(name = "dnn-preproc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Model catalog (default: ./models.yml, then the config directory).
    #[arg(long, env = env::ZOO)]
    pub zoo: Option<PathBuf>,

    /// Sample tag selecting which catalog entries may be used as alias.
    #[arg(long, default_value = DEFAULT_SAMPLE, env = env::SAMPLE)]
    pub sample: String,

    /// Extra directory to search for model, config and class files.
    ///
    /// Searched before the samples data directories; may be repeated, and
    /// the last one given is searched first.
    #[arg(long = "search-path", value_name = "DIR")]
    pub search_path: Vec<PathBuf>,

    /// Print the resolved parameters as JSON.
    #[arg(long)]
    pub json: bool,

    /// Suppress informational logging.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            zoo: None,
            sample: DEFAULT_SAMPLE.to_string(),
            search_path: Vec::new(),
            json: false,
            quiet: false,
            verbose: 0,
        }
    }
}
