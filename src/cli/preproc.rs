//! The standard preprocessing option set shared by DNN samples.

use crate::catalog::{Catalog, Number};
use crate::cli::options::{DefaultValue, OptionSpec, ValueKind, add_argument};
use crate::constants::{ALIAS_ARG, preproc};
use crate::error::Result;
use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgMatches, Command};
use serde::Serialize;
use tracing::debug;

const ALIAS_HELP: &str =
    "Alias name of model to extract preprocessing parameters from models.yml file.";

/// Options every DNN sample accepts, in registration order.
#[must_use]
pub fn preproc_options() -> Vec<OptionSpec> {
    vec![
        OptionSpec::new(
            "model",
            "Path to a binary file of trained model weights (.caffemodel, .pb, .t7, .weights, .bin)",
        )
        .required(),
        OptionSpec::new(
            "config",
            "Path to network configuration file (.prototxt, .pbtxt, .cfg, .xml)",
        ),
        OptionSpec::new(
            "mean",
            "Preprocess input image by subtracting mean values (BGR order).",
        )
        .kind(ValueKind::Float)
        .one_or_more()
        .default_value(DefaultValue::List(
            preproc::DEFAULT_MEAN.iter().copied().map(Number::Int).collect(),
        )),
        OptionSpec::new(
            "scale",
            "Preprocess input image by multiplying by scale factor.",
        )
        .kind(ValueKind::Float)
        .default_value(DefaultValue::Real(preproc::DEFAULT_SCALE)),
        OptionSpec::new("width", "Resize input image to specific width.").kind(ValueKind::Int),
        OptionSpec::new("height", "Resize input image to specific height.").kind(ValueKind::Int),
        OptionSpec::new("rgb", "Indicate model uses RGB input instead of BGR.").store_true(),
        OptionSpec::new(
            "classes",
            "Optional path to text file with class names for object detection.",
        ),
    ]
}

/// Register the alias selector and the preprocessing options on `cmd`.
///
/// The alias may name any catalog entry tagged with `sample`.
pub fn add_preproc_args(
    cmd: Command,
    argv: &[String],
    catalog: Option<&Catalog>,
    sample: &str,
) -> Result<Command> {
    let aliases = catalog.map_or_else(Vec::new, |c| c.aliases_for_sample(sample));
    debug!("Aliases for sample '{sample}': {aliases:?}");

    let mut cmd = cmd.arg(
        Arg::new(ALIAS_ARG)
            .index(1)
            .required(false)
            .help(ALIAS_HELP)
            .value_parser(PossibleValuesParser::new(aliases)),
    );

    for spec in preproc_options() {
        cmd = add_argument(cmd, argv, catalog, &spec)?;
    }
    Ok(cmd)
}

/// Register the preprocessing options without defaults or checks.
///
/// Used for a first pass over the command line that only needs to skip
/// past these options.
#[must_use]
pub fn add_lenient_preproc_args(cmd: Command) -> Command {
    preproc_options()
        .iter()
        .fold(cmd.arg(Arg::new(ALIAS_ARG).index(1)), |cmd, spec| {
            cmd.arg(spec.to_lenient_arg())
        })
}

/// Preprocessing parameters after merging catalog and command line.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PreprocParams {
    /// Selected catalog entry.
    pub alias: Option<String>,
    /// Model weights.
    pub model: Option<String>,
    /// Network configuration.
    pub config: Option<String>,
    /// Per-channel mean.
    pub mean: Vec<f64>,
    /// Scale factor.
    pub scale: Option<f64>,
    /// Input width.
    pub width: Option<i64>,
    /// Input height.
    pub height: Option<i64>,
    /// Whether the model expects RGB input.
    pub rgb: bool,
    /// Class names file.
    pub classes: Option<String>,
}

impl PreprocParams {
    /// Extract the parameters from parsed matches.
    ///
    /// Options that were never registered read as absent.
    #[must_use]
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            alias: string(matches, ALIAS_ARG),
            model: string(matches, "model"),
            config: string(matches, "config"),
            mean: matches
                .try_get_many::<f64>("mean")
                .ok()
                .flatten()
                .map(|values| values.copied().collect())
                .unwrap_or_default(),
            scale: matches.try_get_one::<f64>("scale").ok().flatten().copied(),
            width: matches.try_get_one::<i64>("width").ok().flatten().copied(),
            height: matches.try_get_one::<i64>("height").ok().flatten().copied(),
            rgb: matches
                .try_get_one::<bool>("rgb")
                .ok()
                .flatten()
                .copied()
                .unwrap_or(false),
            classes: string(matches, "classes"),
        }
    }
}

fn string(matches: &ArgMatches, id: &str) -> Option<String> {
    matches.try_get_one::<String>(id).ok().flatten().cloned()
}
