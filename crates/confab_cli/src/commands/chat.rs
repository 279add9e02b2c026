//! Interactive chat session and one-shot prompting.

use std::io::{self, BufRead};
use std::sync::Arc;

use anyhow::{Result, anyhow};

use confab_core::ChatSession;
use confab_llm::{
    Generator, LlamaCppConfig, LlamaCppGenerator, OllamaConfig, OllamaGenerator, generate_reply,
};

use crate::config::{BackendKind, ChatConfig};
use crate::output;

pub async fn handle(
    backend: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    prompt: Option<String>,
) -> Result<()> {
    let mut config = ChatConfig::from_env();
    if let Some(backend) = backend {
        let kind = backend
            .parse::<BackendKind>()
            .map_err(|_| anyhow!("unknown backend '{}' (expected one of: {})", backend, known()))?;
        config = config.with_backend(kind);
    }
    if let Some(model) = model {
        config = config.with_model(model);
    }
    if let Some(url) = base_url {
        config = config.with_base_url(url);
    }

    let generator = build_generator(&config);

    if let Some(message) = prompt {
        // One-shot mode: single empty-history turn, then exit.
        run_turn(generator.as_ref(), &ChatSession::new(), &message).await;
        return Ok(());
    }

    repl(generator.as_ref(), &config).await
}

/// Read-eval-print loop over stdin lines.
async fn repl(generator: &dyn Generator, config: &ChatConfig) -> Result<()> {
    output::header(&format!("confab — {} via {}", config.model, config.backend));
    output::dim("Type /reset to clear history, /history to review it, /quit to leave.");

    let mut session = ChatSession::new();
    let stdin = io::stdin();

    loop {
        output::input_marker();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "/quit" | "/exit" => break,
            "/reset" => {
                session.reset();
                output::success("History cleared.");
            }
            "/history" => print_history(&session),
            _ => {
                if let Some(reply) = run_turn(generator, &session, input).await {
                    session.record_exchange(input, reply);
                }
            }
        }
    }

    output::dim("Bye.");
    Ok(())
}

/// Run one generation turn and print the outcome as the assistant line.
///
/// Returns the reply on success so the caller can record the exchange.
/// On failure an apologetic line carrying the error text is printed
/// instead and nothing is recorded, leaving the history untouched.
async fn run_turn(
    generator: &dyn Generator,
    session: &ChatSession,
    message: &str,
) -> Option<String> {
    let spinner = output::spinner("Generating...");
    match generate_reply(generator, session.history(), message).await {
        Ok(reply) => {
            spinner.finish_and_clear();
            output::speaker_line("Assistant", &reply);
            Some(reply)
        }
        Err(e) => {
            spinner.finish_and_clear();
            output::speaker_line("Assistant", &format!("Sorry, something went wrong: {e}"));
            None
        }
    }
}

fn print_history(session: &ChatSession) {
    if session.is_empty() {
        output::dim("No messages yet.");
        return;
    }
    for message in session.history() {
        output::speaker_line(message.role.label(), &message.content);
    }
}

fn build_generator(config: &ChatConfig) -> Arc<dyn Generator> {
    match config.backend {
        BackendKind::Ollama => {
            let backend_config = match &config.base_url {
                Some(url) => OllamaConfig::new(&config.model).with_base_url(url),
                None => OllamaConfig::from_env(&config.model),
            };
            Arc::new(OllamaGenerator::new(backend_config))
        }
        BackendKind::LlamaCpp => {
            let backend_config = match &config.base_url {
                Some(url) => LlamaCppConfig::new().with_base_url(url),
                None => LlamaCppConfig::new(),
            };
            Arc::new(LlamaCppGenerator::new(backend_config))
        }
    }
}

fn known() -> String {
    BackendKind::ALL
        .iter()
        .map(|kind| kind.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
