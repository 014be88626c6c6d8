//! Parlia command line.
//!
//! Usage:
//!   parlia layout parties.csv --width 1000 --height 500 --pretty
//!   parlia svg parties.csv --output parliament.svg
//!   parlia harness --verbose

#![forbid(unsafe_code)]

fn main() {
    if let Err(error) = parlia_cli::run_from_env() {
        eprintln!("{error}");
        std::process::exit(error.exit_code());
    }
}
