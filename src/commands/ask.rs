//! The single `orq` command: send one completion request and print the reply.

use crate::cli::Cli;
use crate::config::Config;
use crate::llm::openrouter::OpenRouterClient;
use crate::llm::{ChatMessage, ChatRequest, CompletionClient, LlmError};

/// Execute the completion request described by the CLI arguments.
///
/// # Errors
///
/// Returns an error string when configuration is missing, the runtime cannot
/// be built, or the completion call fails.
pub fn run(cli: &Cli) -> Result<(), String> {
    let config = Config::from_env()?;
    let client = OpenRouterClient::new(&config);
    let request = build_request(cli);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to start async runtime: {e}"))?;

    let content =
        runtime.block_on(first_completion(&client, &request)).map_err(|e| e.to_string())?;

    println!("{content}");
    Ok(())
}

/// Builds the request from the CLI arguments: an optional system message
/// followed by one user message, never streamed.
fn build_request(cli: &Cli) -> ChatRequest {
    let mut messages = Vec::with_capacity(2);
    if let Some(system) = &cli.system {
        messages.push(ChatMessage::system(system.clone()));
    }
    messages.push(ChatMessage::user(cli.prompt.clone()));

    ChatRequest { model: cli.model.clone(), messages, stream: false }
}

/// Performs one completion call and extracts the first choice's content.
///
/// # Errors
///
/// Propagates the client's error, or returns [`LlmError::NoCompletion`] when
/// the service answered with zero choices.
pub async fn first_completion(
    client: &dyn CompletionClient,
    request: &ChatRequest,
) -> Result<String, LlmError> {
    let completion = client.complete(request).await?;
    let choice = completion.choices.into_iter().next().ok_or(LlmError::NoCompletion)?;
    Ok(choice.message.content)
}
