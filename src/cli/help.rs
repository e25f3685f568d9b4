//! Help message display for CLI.

#![allow(clippy::print_stdout)]

use crate::catalog::Catalog;
use crate::constants::CATALOG_FILE_NAME;

/// Print help message based on catalog state.
pub fn print_smart_help(catalog: Option<&Catalog>, sample: &str) {
    match catalog {
        Some(catalog) => print!("{}", catalog_help(catalog, sample)),
        None => print!("{}", first_time_help()),
    }
}

/// Guidance shown when no catalog could be found.
#[must_use]
pub fn first_time_help() -> String {
    format!(
        "No model catalog found.\n\
         \n\
         Place a {CATALOG_FILE_NAME} in the current directory, pass --zoo <PATH>,\n\
         or give every parameter explicitly:\n\
         \n\
         \x20  dnn-preproc --model net.onnx --width 224 --height 224 --scale 0.0039\n\
         \n\
         Run 'dnn-preproc -h' for all options.\n"
    )
}

/// Usage reminder listing the aliases available for `sample`.
#[must_use]
pub fn catalog_help(catalog: &Catalog, sample: &str) -> String {
    let aliases = catalog.aliases_for_sample(sample);
    let mut out = String::from("Usage: dnn-preproc [ALIAS] [OPTIONS]\n\n");

    if aliases.is_empty() {
        out.push_str(&format!(
            "No models in {} are tagged for sample '{sample}'.\n",
            catalog.path().display()
        ));
        if !catalog.is_empty() {
            let all: Vec<&str> = catalog.aliases().collect();
            out.push_str(&format!(
                "The catalog has {} entries: {}\n",
                catalog.len(),
                all.join(", ")
            ));
        }
    } else {
        out.push_str(&format!(
            "Models for sample '{sample}' in {}:\n",
            catalog.path().display()
        ));
        for alias in &aliases {
            out.push_str(&format!("  {alias}\n"));
        }
        out.push_str(&format!("\nExample: dnn-preproc {} --json\n", aliases[0]));
    }

    out.push_str("\nRun 'dnn-preproc -h' for all options.\n");
    out
}
