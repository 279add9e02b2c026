//! One-turn generation orchestration: history in, extracted reply out.

use std::time::Instant;

use tracing::{debug, error, info};

use confab_core::Message;

use crate::error::{Error, Result};
use crate::extract::extract_reply;
use crate::generator::Generator;
use crate::params::SamplingParams;
use crate::prompt::build_prompt;

/// Produce the assistant's reply for one chat turn.
///
/// Builds the flat prompt from `history` plus `user_message`, makes a
/// single call on `generator` with the fixed [`SamplingParams::chat_turn`]
/// knobs, and extracts the newest assistant turn from the first
/// candidate. Backend failures propagate unchanged — no retry and no
/// timeout beyond what the transport itself imposes — and the caller's
/// history is never touched from here.
pub async fn generate_reply(
    generator: &dyn Generator,
    history: &[Message],
    user_message: &str,
) -> Result<String> {
    let prompt = build_prompt(history, user_message);
    let params = SamplingParams::chat_turn();
    debug!(
        backend = generator.id(),
        history_len = history.len(),
        prompt_chars = prompt.len(),
        "running generation"
    );

    let start = Instant::now();
    let generations = match generator.generate(&prompt, &params).await {
        Ok(generations) => generations,
        Err(e) => {
            error!(backend = generator.id(), "generation failed: {}", e);
            return Err(e);
        }
    };
    let raw = generations.into_iter().next().ok_or(Error::NoOutput)?;

    let reply = extract_reply(&raw.text);
    info!(
        backend = generator.id(),
        duration_ms = start.elapsed().as_millis() as u64,
        raw_chars = raw.text.len(),
        reply_chars = reply.len(),
        "generation finished"
    );

    Ok(reply)
}
