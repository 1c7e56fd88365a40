//! Binary entrypoint for the `fieldops` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match fieldops::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
