//! Binary entrypoint for the `routerbits` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    routerbits::logging::init();

    // Recording and replay are selected in commands::dispatch via env vars.
    match routerbits::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
