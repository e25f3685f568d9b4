//! dnn-preproc - preprocessing arguments for DNN sample programs.
//!
//! Default preprocessing parameters (mean, scale, input size, channel
//! order) live in a model catalog keyed by alias. This crate merges them
//! with explicit command-line options and resolves the model, config and
//! class-name files across the usual data locations.

#![warn(missing_docs)]

pub mod catalog;
pub mod cli;
pub mod constants;
pub mod error;
pub mod output;
pub mod search;

use catalog::{Catalog, default_catalog_path, load_catalog};
use clap::{CommandFactory, FromArgMatches};
use cli::{Cli, PreprocParams, add_lenient_preproc_args, add_preproc_args};
use constants::CATALOG_FILE_NAME;
use output::{ResolvedSample, render_json, render_text};
use search::{FileFinder, SamplesSearch};
use std::path::PathBuf;
use tracing::debug;

pub use error::{Error, Result};

/// Main entry point for the dnn-preproc CLI.
pub fn run() -> Result<()> {
    let argv: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    run_with_args(&argv)
}

/// Run the CLI on an explicit command line, program name included.
#[allow(clippy::print_stdout)]
pub fn run_with_args(argv: &[String]) -> Result<()> {
    // The catalog and sample tag decide which options get registered, so
    // they are read before the real parse.
    let early = parse_early(argv);
    init_logging(early.verbose, early.quiet);

    let zoo = early.zoo.clone().unwrap_or_else(|| {
        default_catalog_path().unwrap_or_else(|_| PathBuf::from(CATALOG_FILE_NAME))
    });
    let catalog = load_catalog(&zoo)?;

    if argv.len() <= 1 {
        cli::help::print_smart_help(catalog.as_ref(), &early.sample);
        return Ok(());
    }

    let (cli, params) = parse_preproc(argv, catalog.as_ref(), &early.sample)?;
    let params = resolve_files(params, &file_finder(&cli.search_path))?;

    let resolved = ResolvedSample {
        catalog: catalog.as_ref().map(|c| c.path().to_path_buf()),
        sample: cli.sample,
        params,
    };

    if cli.json {
        println!("{}", render_json(&resolved)?);
    } else {
        print!("{}", render_text(&resolved));
    }
    Ok(())
}

/// Read the global options, skipping everything else.
fn parse_early(argv: &[String]) -> Cli {
    add_lenient_preproc_args(Cli::command())
        .ignore_errors(true)
        .try_get_matches_from(argv)
        .ok()
        .and_then(|matches| Cli::from_arg_matches(&matches).ok())
        .unwrap_or_default()
}

/// Parse the full command line with catalog-backed defaults.
pub fn parse_preproc(
    argv: &[String],
    catalog: Option<&Catalog>,
    sample: &str,
) -> Result<(Cli, PreprocParams)> {
    let cmd = add_preproc_args(Cli::command(), argv, catalog, sample)?;
    let matches = cmd.try_get_matches_from(argv)?;
    let cli = Cli::from_arg_matches(&matches)?;
    Ok((cli, PreprocParams::from_matches(&matches)))
}

/// File finder for the environment plus the `--search-path` directories.
fn file_finder(search_paths: &[PathBuf]) -> FileFinder {
    let samples = search_paths
        .iter()
        .fold(SamplesSearch::from_env(), |samples, dir| samples.with_search_path(dir));
    FileFinder::from_env().with_samples(samples)
}

/// Replace file parameters with the paths they resolve to.
pub fn resolve_files(mut params: PreprocParams, finder: &FileFinder) -> Result<PreprocParams> {
    for slot in [&mut params.model, &mut params.config, &mut params.classes] {
        if let Some(name) = slot.as_deref() {
            let path = finder.find(name)?;
            debug!("{name} resolved to {}", path.display());
            *slot = Some(path.to_string_lossy().into_owned());
        }
    }
    Ok(params)
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    // stdout carries results only.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
