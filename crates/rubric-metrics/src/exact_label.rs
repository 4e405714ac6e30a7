use async_trait::async_trait;
use rubric_core::errors::HarnessError;
use rubric_core::metrics_api::{Metric, MetricOutcome};
use rubric_core::model::{DatasetRow, Expected, LlmResponse, TaskKind};

/// Score a case-insensitive exact label match.
///
/// Both sides are trimmed and lowercased; the normalized strings land in
/// the details for diagnosis. Any string input is accepted.
pub fn exact_label(pred: &str, expected_label: &str) -> MetricOutcome {
    let p = pred.trim().to_lowercase();
    let e = expected_label.trim().to_lowercase();
    let passed = p == e;
    let details = serde_json::json!({ "pred": p, "expected": e });
    if passed {
        MetricOutcome::pass(1.0, details)
    } else {
        MetricOutcome::fail(0.0, details)
    }
}

pub struct ExactLabelMetric;

#[async_trait]
impl Metric for ExactLabelMetric {
    fn name(&self) -> &'static str {
        "exact_label"
    }

    fn task(&self) -> TaskKind {
        TaskKind::Label
    }

    async fn evaluate(
        &self,
        row: &DatasetRow,
        resp: &LlmResponse,
    ) -> anyhow::Result<MetricOutcome> {
        let Expected::Label { label } = &row.expected else {
            return Err(HarnessError::ExpectedShape {
                row_id: row.id.clone(),
                task: row.task.to_string(),
            }
            .into());
        };
        Ok(exact_label(&resp.text, label))
    }
}
