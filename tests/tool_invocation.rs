//! Tool invocation integration tests
//!
//! Drives the tool adapter the way a host runtime would, with a mock
//! generation endpoint and real artifact stores.

use std::sync::Arc;

use agent_genie::agents::AgentRegistry;
use agent_genie::artifact::{ArtifactScope, FileArtifactStore, InMemoryArtifactStore};
use agent_genie::genai::{
    Candidate, Content, FinishReason, GenAiError, GenerateContentResponse, MockContentGenerator, Part,
};
use agent_genie::tools::{ImageSettings, ToolAdapter, ToolCall, ToolContext};
use serde_json::json;
use tempfile::TempDir;

fn scope() -> ArtifactScope {
    ArtifactScope::new("agent_genie", "tester", "session-1")
}

fn stop_with_parts(parts: Vec<Part>) -> GenerateContentResponse {
    GenerateContentResponse {
        candidates: vec![Candidate {
            finish_reason: Some(FinishReason::stop()),
            content: Some(Content {
                role: Some("model".to_string()),
                parts,
            }),
        }],
    }
}

fn map_call(blueprint: &str) -> ToolCall {
    ToolCall::new("call_map", "generate_agent_map", json!({ "agent_blueprint": blueprint }))
}

#[tokio::test]
async fn test_static_tools_are_idempotent() {
    let adapter = ToolAdapter::new(Arc::new(MockContentGenerator::new()), ImageSettings::default());
    let ctx = ToolContext::new(scope(), Arc::new(InMemoryArtifactStore::new()));

    let mut lookups = Vec::new();
    for industry in ["healthcare", "logistics", "x"] {
        let call = ToolCall::new("c", "lookup_industry_context", json!({ "industry": industry }));
        let mut value = adapter.invoke(&call, &ctx).await.to_value();
        assert_eq!(value["industry"], industry);
        value.as_object_mut().unwrap().remove("industry");
        lookups.push(value);
    }
    assert!(lookups.windows(2).all(|w| w[0] == w[1]));

    let a = adapter
        .invoke(&ToolCall::new("c", "estimate_agent_cost", json!({ "agent_description": "" })), &ctx)
        .await;
    let b = adapter
        .invoke(
            &ToolCall::new("c", "estimate_agent_cost", json!({ "agent_description": "fleet router" })),
            &ctx,
        )
        .await;
    assert_eq!(a.to_value(), b.to_value());
    assert_eq!(a.to_value()["cost_tier"], "Medium");
}

#[tokio::test]
async fn test_zero_candidates_reports_unknown_stop() {
    let mock = MockContentGenerator::new().with_response(GenerateContentResponse::default());
    let store = Arc::new(InMemoryArtifactStore::new());
    let adapter = ToolAdapter::new(Arc::new(mock), ImageSettings::default());
    let ctx = ToolContext::new(scope(), store.clone());

    let result = adapter.invoke(&map_call("blueprint"), &ctx).await;

    assert_eq!(result.to_value(), json!({ "status": "failed", "detail": "Stopped: Unknown" }));
    assert_eq!(store.save_count().await, 0);
}

#[tokio::test]
async fn test_safety_stop_reports_reason() {
    let mock = MockContentGenerator::new().with_response(GenerateContentResponse {
        candidates: vec![Candidate {
            finish_reason: Some(FinishReason::new("SAFETY")),
            content: None,
        }],
    });
    let store = Arc::new(InMemoryArtifactStore::new());
    let adapter = ToolAdapter::new(Arc::new(mock), ImageSettings::default());
    let ctx = ToolContext::new(scope(), store.clone());

    let result = adapter.invoke(&map_call("blueprint"), &ctx).await;

    assert_eq!(result.to_value(), json!({ "status": "failed", "detail": "Stopped: SAFETY" }));
    assert_eq!(store.save_count().await, 0);
}

#[tokio::test]
async fn test_inline_image_saved_once() {
    let mock = MockContentGenerator::new().with_response(stop_with_parts(vec![
        Part::text("Here is your diagram"),
        Part::inline("image/png", vec![0x89, b'P', b'N', b'G', 1, 2, 3]),
    ]));
    let store = Arc::new(InMemoryArtifactStore::new());
    let adapter = ToolAdapter::new(Arc::new(mock), ImageSettings::default());
    let ctx = ToolContext::new(scope(), store.clone());

    let result = adapter.invoke(&map_call("Claims triage agent"), &ctx).await;

    assert_eq!(
        result.to_value(),
        json!({ "status": "success", "detail": "Agent map generated", "filename": "agent_map.png" })
    );
    assert_eq!(store.save_count().await, 1);
    let saved = store.load(&scope(), "agent_map.png").await.unwrap();
    assert_eq!(saved.bytes, vec![0x89, b'P', b'N', b'G', 1, 2, 3]);
    assert_eq!(saved.mime_type, "image/png");
}

#[tokio::test]
async fn test_normal_stop_without_image() {
    let mock = MockContentGenerator::new().with_response(stop_with_parts(vec![Part::text("I can only describe it")]));
    let store = Arc::new(InMemoryArtifactStore::new());
    let adapter = ToolAdapter::new(Arc::new(mock), ImageSettings::default());
    let ctx = ToolContext::new(scope(), store.clone());

    let result = adapter.invoke(&map_call("blueprint"), &ctx).await;

    assert_eq!(result.to_value(), json!({ "status": "failed", "detail": "No image returned" }));
    assert_eq!(store.save_count().await, 0);
}

#[tokio::test]
async fn test_endpoint_fault_is_absorbed() {
    let mock = MockContentGenerator::new().with_error(GenAiError::Api {
        status: 500,
        message: "internal".to_string(),
    });
    let adapter = ToolAdapter::new(Arc::new(mock), ImageSettings::default());
    let ctx = ToolContext::new(scope(), Arc::new(InMemoryArtifactStore::new()));

    let result = adapter.invoke(&map_call("blueprint"), &ctx).await;

    assert!(result.is_error());
    assert_eq!(result.to_value(), json!({ "status": "failed", "error": "API error 500: internal" }));
}

#[tokio::test]
async fn test_file_store_persists_generated_map() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(FileArtifactStore::new(temp_dir.path()));
    let mock = MockContentGenerator::new()
        .with_response(stop_with_parts(vec![Part::inline("image/png", vec![1, 2, 3])]))
        .with_response(stop_with_parts(vec![Part::inline("image/png", vec![4, 5, 6])]));
    let adapter = ToolAdapter::new(Arc::new(mock), ImageSettings::default());
    let ctx = ToolContext::new(scope(), store.clone());

    assert!(!adapter.invoke(&map_call("first"), &ctx).await.is_error());
    assert!(!adapter.invoke(&map_call("second"), &ctx).await.is_error());

    assert_eq!(store.list_versions(&scope(), "agent_map.png").await.unwrap(), vec![0, 1]);
    let (latest, meta) = store.load(&scope(), "agent_map.png", 1).await.unwrap();
    assert_eq!(latest.bytes, vec![4, 5, 6]);
    assert_eq!(meta.mime_type, "image/png");
}

#[tokio::test]
async fn test_save_failure_is_absorbed() {
    let temp_dir = TempDir::new().unwrap();
    // A file where the store expects its root directory
    let root = temp_dir.path().join("not-a-dir");
    std::fs::write(&root, "occupied").unwrap();

    let store = Arc::new(FileArtifactStore::new(&root));
    let mock = MockContentGenerator::new().with_response(stop_with_parts(vec![Part::inline("image/png", vec![1])]));
    let adapter = ToolAdapter::new(Arc::new(mock), ImageSettings::default());
    let ctx = ToolContext::new(scope(), store);

    let result = adapter.invoke(&map_call("blueprint"), &ctx).await;

    let value = result.to_value();
    assert_eq!(value["status"], "failed");
    assert!(value["error"].as_str().unwrap().starts_with("Artifact error"));
}

#[tokio::test]
async fn test_grounded_agent_tools_match_adapter() {
    let registry = AgentRegistry::builtin();
    let adapter = ToolAdapter::new(Arc::new(MockContentGenerator::new()), ImageSettings::default());

    let agent = registry.get("grounded").unwrap();
    let defs = adapter.definitions_for(&agent.tool_names());

    assert_eq!(defs.len(), agent.tools.len());
    for def in defs {
        assert!(adapter.has_tool(&def.name));
        assert_eq!(def.input_schema["type"], "object");
    }
}
