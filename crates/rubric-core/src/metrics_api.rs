use crate::model::{DatasetRow, LlmResponse, TaskKind};
use async_trait::async_trait;

/// Normalized metric result: pass/fail state, a score in [0, 1], and a
/// details payload for diagnosis.
#[derive(Debug, Clone)]
pub struct MetricOutcome {
    pub passed: bool,
    pub score: f64,
    pub details: serde_json::Value,
}

impl MetricOutcome {
    pub fn pass(score: f64, details: serde_json::Value) -> Self {
        Self {
            passed: true,
            score,
            details,
        }
    }

    pub fn fail(score: f64, details: serde_json::Value) -> Self {
        Self {
            passed: false,
            score,
            details,
        }
    }
}

/// A scorer for one task type. The runner dispatches each row to the
/// metric whose `task()` matches the row; a row with no matching metric
/// aborts the run.
#[async_trait]
pub trait Metric: Send + Sync {
    fn name(&self) -> &'static str;
    fn task(&self) -> TaskKind;
    async fn evaluate(&self, row: &DatasetRow, resp: &LlmResponse)
        -> anyhow::Result<MetricOutcome>;
}
