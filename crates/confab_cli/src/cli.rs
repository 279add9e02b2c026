//! CLI argument definitions using clap derive macros.

use clap::{Parser, Subcommand, ValueEnum};

/// Minimal terminal chat over a locally hosted text-generation model
#[derive(Parser)]
#[command(name = "confab", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start an interactive chat session
    Chat {
        /// Backend to use (ollama, llamacpp). Uses CONFAB_BACKEND env if not set.
        #[arg(long)]
        backend: Option<String>,
        /// Model to run (e.g. llama3.2). Uses CONFAB_MODEL env if not set.
        #[arg(long)]
        model: Option<String>,
        /// Backend server base URL (e.g. http://localhost:11434)
        #[arg(long)]
        base_url: Option<String>,
        /// Send one message, print the reply, and exit
        #[arg(short, long)]
        prompt: Option<String>,
    },
    /// Inspect and test generation backends
    Backends {
        #[command(subcommand)]
        action: BackendsAction,
    },
}

#[derive(Subcommand)]
pub enum BackendsAction {
    /// List known backends
    List,
    /// Test backend connectivity
    Test {
        /// Backend ID (ollama, llamacpp)
        backend: String,
    },
}
