pub mod fake;
pub mod openai;

use crate::model::LlmResponse;
use async_trait::async_trait;

/// Text-generation backend. The harness is provider-agnostic as long as
/// this contract holds.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(&self, prompt: &str, model: &str) -> anyhow::Result<LlmResponse>;
    fn provider_name(&self) -> &'static str;
}
