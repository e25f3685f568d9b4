//! Locating model, configuration and data files.

mod finder;
mod samples;

pub use finder::{FileFinder, find_file};
pub use samples::SamplesSearch;
