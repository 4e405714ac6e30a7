use std::collections::VecDeque;
use std::sync::Mutex;

use super::LlmClient;
use crate::model::LlmResponse;
use async_trait::async_trait;

/// Offline client for dry runs and tests.
///
/// Precedence per call: next scripted response, then the fixed response,
/// then `"ok"`.
#[derive(Debug, Default)]
pub struct FakeClient {
    fixed_response: Option<String>,
    script: Mutex<VecDeque<String>>,
}

impl FakeClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.fixed_response = Some(response.into());
        self
    }

    /// Responses returned one per call, in order.
    pub fn with_script<I, S>(self, responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Ok(mut script) = self.script.lock() {
            script.extend(responses.into_iter().map(Into::into));
        }
        self
    }
}

#[async_trait]
impl LlmClient for FakeClient {
    async fn generate(&self, _prompt: &str, model: &str) -> anyhow::Result<LlmResponse> {
        let scripted = match self.script.lock() {
            Ok(mut script) => script.pop_front(),
            Err(_) => None,
        };
        let text = scripted
            .or_else(|| self.fixed_response.clone())
            .unwrap_or_else(|| "ok".to_string());

        Ok(LlmResponse {
            text,
            provider: "fake".to_string(),
            model: model.to_string(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}
