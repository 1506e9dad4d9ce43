//! Test utilities for pipeline tests.

use async_trait::async_trait;
use explainer_core::{CompletionRequest, CompletionResponse, ExplainerConfig};
use explainer_error::{ProviderError, ProviderErrorKind, ProviderResult};
use explainer_interface::CompletionDriver;
use explainer_models::AiClient;
use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;

/// Driver that replies with queued texts in order, then fails.
pub struct ScriptedDriver {
    replies: Mutex<VecDeque<String>>,
}

impl ScriptedDriver {
    pub fn new(replies: &[&str]) -> Self {
        Self {
            replies: Mutex::new(replies.iter().map(|r| r.to_string()).collect()),
        }
    }
}

#[async_trait]
impl CompletionDriver for ScriptedDriver {
    async fn complete(&self, _req: &CompletionRequest) -> ProviderResult<CompletionResponse> {
        match self.replies.lock().expect("replies lock poisoned").pop_front() {
            Some(text) => Ok(CompletionResponse::text(text)),
            None => Err(ProviderError::new(ProviderErrorKind::from_status(
                500,
                "no scripted reply left",
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-model"
    }
}

/// Client that never touches the network.
#[allow(dead_code)]
pub fn offline_client() -> AiClient {
    AiClient::new(ScriptedDriver::new(&[])).with_forced_mock(true)
}

/// Default configuration writing into `dir`.
#[allow(dead_code)]
pub fn config_in(dir: &Path) -> ExplainerConfig {
    let mut config = ExplainerConfig::default();
    config.output.directory = dir.to_path_buf();
    config
}
