//! CLI argument parsing and catalog-backed option registration.

mod args;
pub mod help;
pub mod options;
pub mod preproc;

pub use args::Cli;
pub use options::{
    Action, Arity, DefaultValue, OptionSpec, Resolved, ValueKind, add_argument, resolve_default,
};
pub use preproc::{PreprocParams, add_lenient_preproc_args, add_preproc_args, preproc_options};
