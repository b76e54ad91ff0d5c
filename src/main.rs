//! string-analyzer CLI entry point
//!
//! Parses arguments, runs the selected command, prints any error to
//! stderr and exits non-zero on failure.

use string_analyzer::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
