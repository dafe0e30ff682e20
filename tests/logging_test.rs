//! Log output of an invocation.

mod support;

use tracing_test::traced_test;

use bedrock_genai::BedrockConfig;
use bedrock_genai::models;
use bedrock_genai::GenerateRequest;

use support::{StubTransport, claude_output, generator};

#[tokio::test]
#[traced_test]
async fn invocation_logs_model_without_prompt_text() {
    let transport = StubTransport::new();
    transport.push_json(200, claude_output("ok"));
    let generator = generator(transport);

    generator
        .generate(GenerateRequest::new("top secret prompt").with_model(models::CLAUDE_V2))
        .await
        .unwrap();

    assert!(logs_contain("generation completed"));
    assert!(logs_contain("anthropic.claude-v2"));
    assert!(!logs_contain("top secret prompt"));
    assert!(!logs_contain("test-key"));
}

#[tokio::test]
#[traced_test]
async fn failed_invocation_is_logged_as_warning() {
    let transport = StubTransport::new();
    transport.push_json(503, serde_json::json!({ "message": "service unavailable" }));
    let generator = generator(transport);

    assert!(generator.generate_text("x").await.is_err());
    assert!(logs_contain("bedrock invocation failed"));
    assert!(logs_contain("503"));
}

#[test]
#[traced_test]
fn blank_model_id_is_ignored_with_warning() {
    let config = BedrockConfig::new().with_model_id("  ");
    assert_eq!(config.model_id, models::DEFAULT_MODEL);
    assert!(logs_contain("blank model id ignored"));
}
