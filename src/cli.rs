//! CLI argument definitions.

use clap::Parser;

/// Prompt sent when none is given on the command line.
pub const DEFAULT_PROMPT: &str = "What is the meaning of life?";

/// Model the request is routed to unless `--model` overrides it.
pub const DEFAULT_MODEL: &str = "openai/gpt-4o";

/// Top-level CLI parser for `orq`.
#[derive(Debug, Parser)]
#[command(name = "orq", version, about = "Send a prompt to an OpenRouter model and print the reply")]
pub struct Cli {
    /// Prompt to send. Defaults to a connectivity smoke-test question.
    #[arg(default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// Model identifier to route the request to.
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Optional system message placed before the user prompt.
    #[arg(short, long)]
    pub system: Option<String>,
}
