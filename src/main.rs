//! dnn-preproc CLI entry point.

#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

use dnn_preproc::Error;

fn main() {
    match dnn_preproc::run() {
        Ok(()) => {}
        Err(Error::Cli(e)) => e.exit(),
        // Sample programs report bad catalog values and missing files on
        // stdout and still exit with status 0.
        Err(e) if e.exit_code() == 0 => {
            println!("{e}");
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("error: {e}");
            if let Some(source) = std::error::Error::source(&e) {
                eprintln!("  caused by: {source}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
