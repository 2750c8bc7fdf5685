//! Core library entry for the `orq` CLI.
//!
//! `orq` sends a single chat-completion request to OpenRouter and prints
//! the first choice's content. The remote service sits behind the
//! [`llm::CompletionClient`] capability so tests can substitute it.

pub mod cli;
pub mod commands;
pub mod config;
pub mod llm;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// Loads a `.env` file from the working directory when one exists, then
/// parses arguments and performs the single completion request.
///
/// # Errors
///
/// Returns an error string when argument parsing fails, the credential is
/// missing from the environment, or the completion call fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    dotenvy::dotenv().ok();

    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help and --version arrive as Err from clap but are not failures.
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };

    commands::ask::run(&cli)
}
