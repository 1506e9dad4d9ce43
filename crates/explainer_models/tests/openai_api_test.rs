use explainer_core::{ApiCredential, CompletionRequest, ProviderSettings, RequestKind};
use explainer_interface::CompletionDriver;
use explainer_models::{AiClient, OpenAiClient};

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_openai_json_completion() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let settings = ProviderSettings {
        model: "gpt-4o-mini".to_string(),
        ..ProviderSettings::default()
    };
    let client = AiClient::from_settings(&settings, ApiCredential::from_env("OPENAI_API_KEY"));

    let request = CompletionRequest::json(
        "Reply with a JSON object containing one key named \"ok\" set to true.",
        "Go.",
    )
    .with_kind(RequestKind::Script);

    let value = client.generate_json(&request).await?;
    println!("Response: {value}");
    assert!(value.is_object());

    Ok(())
}

#[tokio::test]
async fn test_openai_without_key_reports_missing_credential() {
    let client = OpenAiClient::new(ApiCredential::Unconfigured, "gpt-4-turbo-preview");
    let request = CompletionRequest::json("system", "user");

    let err = client.complete(&request).await.unwrap_err();
    assert!(err.kind.is_authentication_failure());
}
