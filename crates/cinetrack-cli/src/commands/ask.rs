use color_eyre::Result;
use tracing::debug;
use watchlist_sources::AssistantClient;

use crate::commands;
use crate::output::Output;
use crate::render;

pub async fn run_ask(message: &str, output: &Output) -> Result<()> {
    let message = message.trim();
    if message.is_empty() {
        output.error("Please enter a message for the assistant");
        return Ok(());
    }

    let config = commands::load_config()?;
    let assistant = config
        .require_assistant()
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    let client = AssistantClient::new(assistant.api_key.clone(), assistant.model.clone());

    let spinner = render::maybe_spinner(output, "Thinking...");
    let result = client.ask(message).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    match result {
        Ok(reply) => output.println(reply),
        Err(e) => {
            debug!("Assistant request failed: {}", e);
            output.error("The assistant is having connection issues. Please try again.");
        }
    }

    Ok(())
}
