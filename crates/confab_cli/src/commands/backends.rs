//! Backend inspection commands.

use anyhow::{Result, anyhow};

use confab_llm::{
    GeneratorRegistry, LlamaCppConfig, LlamaCppGenerator, OllamaConfig, OllamaGenerator,
};

use crate::cli::BackendsAction;
use crate::config::{BackendKind, ChatConfig};
use crate::output;

pub async fn handle(action: BackendsAction) -> Result<()> {
    match action {
        BackendsAction::List => list().await,
        BackendsAction::Test { backend } => test(&backend).await,
    }
}

/// Build the registry of shipped backends with their effective endpoints.
fn build_registry(config: &ChatConfig) -> (GeneratorRegistry, Vec<(String, String)>) {
    let ollama_config = match &config.base_url {
        Some(url) => OllamaConfig::new(&config.model).with_base_url(url),
        None => OllamaConfig::from_env(&config.model),
    };
    let llamacpp_config = match &config.base_url {
        Some(url) => LlamaCppConfig::new().with_base_url(url),
        None => LlamaCppConfig::new(),
    };

    let endpoints = vec![
        (
            BackendKind::Ollama.as_str().to_string(),
            ollama_config.base_url.clone(),
        ),
        (
            BackendKind::LlamaCpp.as_str().to_string(),
            llamacpp_config.base_url.clone(),
        ),
    ];

    let registry = GeneratorRegistry::new()
        .register(
            BackendKind::Ollama.as_str(),
            OllamaGenerator::new(ollama_config),
        )
        .register(
            BackendKind::LlamaCpp.as_str(),
            LlamaCppGenerator::new(llamacpp_config),
        );

    (registry, endpoints)
}

async fn list() -> Result<()> {
    output::header("Generation backends");

    let config = ChatConfig::from_env();
    let (_, endpoints) = build_registry(&config);

    let mut table = output::table();
    output::table_header(&mut table, "Backend", "Endpoint");
    for (id, endpoint) in &endpoints {
        output::table_row(&mut table, id, endpoint);
    }

    let items: Vec<(&str, &str)> = endpoints
        .iter()
        .map(|(id, endpoint)| (id.as_str(), endpoint.as_str()))
        .collect();
    output::table_print(&table, &items);
    Ok(())
}

async fn test(backend_id: &str) -> Result<()> {
    let config = ChatConfig::from_env();
    let (registry, _) = build_registry(&config);
    let generator = registry.get(backend_id)?;

    let spinner = output::spinner(&format!("Testing backend '{backend_id}'..."));
    match generator.ping().await {
        Ok(()) => {
            output::spinner_success(&spinner, &format!("Backend '{backend_id}' is reachable"));
            Ok(())
        }
        Err(e) => {
            output::spinner_error(&spinner, &format!("Backend '{backend_id}' test failed"));
            Err(anyhow!("Backend test failed: {}", e))
        }
    }
}
