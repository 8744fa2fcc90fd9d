use super::*;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::constants;
use crate::corpus::CorpusClient;
use crate::error::ToolError;
use super::corpus_query::CorpusQueryTool;

/// Test tool that records how often it executes.
struct CountingTool {
    calls: Arc<AtomicUsize>,
}

#[async_trait::async_trait]
impl Tool for CountingTool {
    fn name(&self) -> &str {
        "echo"
    }

    fn description(&self) -> &str {
        "Echoes the input back."
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": { "text": { "type": "string" } },
            "required": ["text"]
        })
    }

    async fn execute(&self, input: Value) -> Result<String, ToolError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(input["text"].as_str().unwrap_or_default().to_string())
    }
}

/// Registry with one counting tool; returns the registry and its counter.
fn counting_registry() -> (ToolRegistry, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(CountingTool {
        calls: Arc::clone(&calls),
    }));
    (registry, calls)
}

/// Corpus tool wired to an address nothing listens on. Any test that
/// actually reaches the network through it would fail loudly.
fn offline_corpus_tool() -> CorpusQueryTool {
    CorpusQueryTool::new(CorpusClient::new(
        "http://127.0.0.1:9",
        "test-key",
        "test-corpus",
        constants::CORPUS_MAX_CHUNKS,
    ))
}

#[tokio::test]
async fn registry_declares_corpus_tool() {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(offline_corpus_tool()));
    assert_eq!(registry.len(), 1);
    assert!(!registry.is_empty());

    let defs = registry.definitions();
    assert_eq!(defs.len(), 1);
    assert_eq!(defs[0].kind, "function");
    assert_eq!(defs[0].function.name, constants::CORPUS_TOOL_NAME);
    assert_eq!(defs[0].function.parameters["required"], json!(["query"]));
}

#[tokio::test]
async fn unknown_tool_fails_before_anything_else() {
    let (registry, calls) = counting_registry();
    // Arguments are not even valid JSON: the name check must come first.
    let err = registry.invoke("nonexistent_tool", "{not json").await.unwrap_err();
    assert!(matches!(err, ToolError::UnknownTool(name) if name == "nonexistent_tool"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn invalid_json_arguments_are_malformed() {
    let (registry, calls) = counting_registry();
    let err = registry.invoke("echo", "{not json").await.unwrap_err();
    assert!(matches!(err, ToolError::MalformedArguments(_)));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn non_object_arguments_are_malformed() {
    let (registry, calls) = counting_registry();
    let err = registry.invoke("echo", "\"just a string\"").await.unwrap_err();
    assert!(matches!(err, ToolError::MalformedArguments(_)));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn invoke_dispatches_by_name() {
    let (registry, calls) = counting_registry();
    let output = registry
        .invoke("echo", "{\"text\":\"hello\"}")
        .await
        .unwrap();
    assert_eq!(output, "hello");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn corpus_query_requires_query_field() {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(offline_corpus_tool()));
    // Well-formed object, wrong field: rejected before any network call
    // (the corpus client points at a dead address).
    let err = registry
        .invoke(constants::CORPUS_TOOL_NAME, "{\"q\":\"hello\"}")
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::MalformedArguments(_)));
}
