use async_trait::async_trait;

use crate::error::Error;
use crate::generator::{Generation, Generator, GeneratorRegistry};
use crate::params::SamplingParams;

/// Mock generator for testing
struct MockGenerator {
    id: &'static str,
}

#[async_trait]
impl Generator for MockGenerator {
    fn id(&self) -> &str {
        self.id
    }

    async fn generate(
        &self,
        _prompt: &str,
        _params: &SamplingParams,
    ) -> crate::error::Result<Vec<Generation>> {
        Ok(vec![Generation::new("mock")])
    }

    async fn ping(&self) -> crate::error::Result<()> {
        Ok(())
    }
}

#[test]
fn test_register_and_get() {
    let registry = GeneratorRegistry::new().register("test", MockGenerator { id: "test" });

    let generator = registry.get("test");
    assert!(generator.is_ok());
    assert_eq!(generator.unwrap().id(), "test");
}

#[test]
fn test_unknown_generator() {
    let registry = GeneratorRegistry::new();
    let result = registry.get("nonexistent");
    assert!(matches!(result, Err(Error::UnknownGenerator(id)) if id == "nonexistent"));
}

#[test]
fn test_list_generators() {
    let registry = GeneratorRegistry::new()
        .register("alpha", MockGenerator { id: "alpha" })
        .register("beta", MockGenerator { id: "beta" });

    let mut ids = registry.list();
    ids.sort();
    assert_eq!(ids, vec!["alpha", "beta"]);
}

#[tokio::test]
async fn test_registry_generator_is_callable() {
    let registry = GeneratorRegistry::new().register("mock", MockGenerator { id: "mock" });

    let generator = registry.get("mock").unwrap();
    let generations = generator
        .generate("prompt", &SamplingParams::chat_turn())
        .await
        .unwrap();
    assert_eq!(generations[0].text, "mock");
}
