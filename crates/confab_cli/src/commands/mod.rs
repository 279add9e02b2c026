//! Command dispatch.

pub mod backends;
pub mod chat;

use crate::cli::{Cli, Command};
use anyhow::Result;

pub async fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Chat {
            backend,
            model,
            base_url,
            prompt,
        } => chat::handle(backend, model, base_url, prompt).await,
        Command::Backends { action } => backends::handle(action).await,
    }
}
