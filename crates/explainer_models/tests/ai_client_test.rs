mod test_utils;

use explainer_core::{AuthFailurePolicy, CompletionRequest, CompletionResponse, RequestKind};
use explainer_error::{ErrorCategory, ProviderErrorKind};
use explainer_models::{AiClient, MockResponseGenerator};
use serde_json::json;
use std::time::Duration;
use test_utils::{ScriptedDriver, Step, calls};

fn script_request(topic: &str) -> CompletionRequest {
    CompletionRequest::json("narration script writer", format!("Topic: {topic}"))
        .with_kind(RequestKind::Script)
}

fn unauthorized() -> ProviderErrorKind {
    ProviderErrorKind::from_status(401, "Incorrect API key provided")
}

#[tokio::test]
async fn valid_json_reply_is_parsed() -> anyhow::Result<()> {
    let client = AiClient::new(ScriptedDriver::replying(r#"{"scenes": []}"#));
    let value = client.generate_json(&script_request("DNS")).await?;
    assert_eq!(value, json!({"scenes": []}));
    Ok(())
}

#[tokio::test]
async fn auth_failure_falls_back_to_mock_data() -> anyhow::Result<()> {
    let driver = ScriptedDriver::failing(unauthorized());
    let counter = driver.call_counter();
    let client = AiClient::new(driver);
    let request = script_request("Photosynthesis");

    let value = client.generate_json(&request).await?;

    assert_eq!(value, MockResponseGenerator::new().respond(&request));
    assert_eq!(calls(&counter), 1);
    Ok(())
}

#[tokio::test]
async fn missing_credential_falls_back_to_mock_data() -> anyhow::Result<()> {
    let client = AiClient::new(ScriptedDriver::failing(ProviderErrorKind::MissingCredential));
    let value = client.generate_json(&script_request("DNS")).await?;
    assert_eq!(value["scenes"].as_array().map(Vec::len), Some(3));
    Ok(())
}

#[test]
fn settings_policy_reaches_the_client() {
    use explainer_core::{ApiCredential, ProviderSettings};

    let mut settings = ProviderSettings::default();
    let client = AiClient::from_settings(&settings, ApiCredential::Unconfigured);
    assert_eq!(client.policy(), AuthFailurePolicy::FallbackToMock);

    settings.on_auth_failure = AuthFailurePolicy::Propagate;
    let client = AiClient::from_settings(&settings, ApiCredential::Unconfigured);
    assert_eq!(client.policy(), AuthFailurePolicy::Propagate);
}

#[tokio::test]
async fn auth_failure_propagates_when_configured() {
    let client = AiClient::new(ScriptedDriver::failing(unauthorized()))
        .with_auth_failure_policy(AuthFailurePolicy::Propagate);

    let err = client
        .generate_json(&script_request("DNS"))
        .await
        .expect_err("auth failure should surface");
    assert_eq!(err.category(), ErrorCategory::AuthenticationFailed);
}

#[tokio::test]
async fn server_error_is_provider_request_failure() {
    let client = AiClient::new(ScriptedDriver::failing(ProviderErrorKind::from_status(
        503,
        "Service Unavailable",
    )));
    let err = client.generate_json(&script_request("DNS")).await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::ProviderRequest);
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn non_json_reply_is_malformed() {
    let client = AiClient::new(ScriptedDriver::replying("not json"));
    let err = client.generate_json(&script_request("DNS")).await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::MalformedResponse);
}

#[tokio::test]
async fn missing_and_empty_content_are_response_empty() {
    let client = AiClient::new(ScriptedDriver::new(vec![
        Step::Empty,
        Step::Reply(String::new()),
    ]));

    for _ in 0..2 {
        let err = client.generate_json(&script_request("DNS")).await.unwrap_err();
        assert_eq!(err.category(), ErrorCategory::ResponseEmpty);
    }
}

#[tokio::test]
async fn slow_provider_times_out() {
    let client = AiClient::new(ScriptedDriver::new(vec![Step::Hang]))
        .with_timeout(Some(Duration::from_millis(20)));

    let err = client.generate_json(&script_request("DNS")).await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::ProviderRequest);
    assert!(err.to_string().contains("timed out"));
}

#[tokio::test]
async fn forced_mock_never_calls_driver() -> anyhow::Result<()> {
    let driver = ScriptedDriver::new(vec![]);
    let counter = driver.call_counter();
    let client = AiClient::new(driver).with_forced_mock(true);

    let value = client.generate_json(&script_request("Photosynthesis")).await?;

    assert_eq!(value["scenes"][0]["explanation"], "Definition of Photosynthesis");
    assert_eq!(calls(&counter), 0);
    assert!(client.is_offline());
    Ok(())
}

#[test]
fn parse_content_accepts_nested_json() -> anyhow::Result<()> {
    let value = AiClient::parse_content(CompletionResponse::text(r#"{"blueprint":[{"a":1}]}"#))?;
    assert_eq!(value["blueprint"][0]["a"], 1);
    Ok(())
}
