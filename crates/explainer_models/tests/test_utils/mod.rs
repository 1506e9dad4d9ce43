//! Test utilities for Explainer model tests.
//!
//! [`ScriptedDriver`] replays a fixed sequence of outcomes and counts the
//! calls it receives.

use async_trait::async_trait;
use explainer_core::{CompletionRequest, CompletionResponse};
use explainer_error::{ProviderError, ProviderErrorKind, ProviderResult};
use explainer_interface::CompletionDriver;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One scripted driver outcome.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum Step {
    /// Reply with this text
    Reply(String),
    /// Reply with no content
    Empty,
    /// Fail with this error kind
    Fail(ProviderErrorKind),
    /// Never answer
    Hang,
}

/// Driver that replays scripted steps in order.
pub struct ScriptedDriver {
    steps: Mutex<VecDeque<Step>>,
    calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl ScriptedDriver {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: Mutex::new(steps.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(vec![Step::Reply(text.to_string())])
    }

    pub fn failing(kind: ProviderErrorKind) -> Self {
        Self::new(vec![Step::Fail(kind)])
    }

    /// Shared call counter that outlives the driver being moved into a client.
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl CompletionDriver for ScriptedDriver {
    async fn complete(&self, _req: &CompletionRequest) -> ProviderResult<CompletionResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let step = self
            .steps
            .lock()
            .expect("steps lock poisoned")
            .pop_front()
            .expect("scripted driver ran out of steps");

        match step {
            Step::Reply(text) => Ok(CompletionResponse::text(text)),
            Step::Empty => Ok(CompletionResponse::empty()),
            Step::Fail(kind) => Err(ProviderError::new(kind)),
            Step::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(CompletionResponse::empty())
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-model"
    }
}

/// Number of calls recorded so far.
#[allow(dead_code)]
pub fn calls(counter: &Arc<AtomicUsize>) -> usize {
    counter.load(Ordering::SeqCst)
}
