//! Core library entry for the `routerbits` CLI.
//!
//! The heart of the crate is [`store::RouterBitStore`], an ordered,
//! observable collection of [`model::RouterBit`] records. Identifiers come
//! from the [`ports::IdGenerator`] port, which can be live, recorded, or
//! replayed from a cassette.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod context;
pub mod logging;
pub mod model;
pub mod ports;
pub mod session;
pub mod store;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_executes_id() {
        let result = run(["routerbits", "id"]);
        assert!(result.is_ok());
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["routerbits", "unknown"]);
        assert!(result.is_err());
    }
}
