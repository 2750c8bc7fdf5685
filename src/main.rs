//! Binary entrypoint for the `orq` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match orq::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
