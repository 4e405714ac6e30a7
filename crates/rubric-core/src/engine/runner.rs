use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::dataset::load_dataset;
use crate::errors::HarnessError;
use crate::metrics_api::Metric;
use crate::model::{DatasetRow, EvalResult, RunSummary};
use crate::prompts::{render, PromptStore};
use crate::providers::llm::LlmClient;

/// Sequential evaluation pipeline: one generation call and one metric per
/// row, strictly in dataset order. No batching, retries, or timeouts;
/// provider failures propagate and abort the run.
pub struct Runner {
    pub client: Arc<dyn LlmClient>,
    pub prompts: PromptStore,
    pub metrics: Vec<Arc<dyn Metric>>,
}

impl Runner {
    pub fn new(
        client: Arc<dyn LlmClient>,
        prompts: PromptStore,
        metrics: Vec<Arc<dyn Metric>>,
    ) -> Self {
        Self {
            client,
            prompts,
            metrics,
        }
    }

    pub async fn run_eval(&self, dataset_path: &Path, model: &str) -> anyhow::Result<RunSummary> {
        let rows = load_dataset(dataset_path)?;
        info!(
            dataset = %dataset_path.display(),
            model,
            rows = rows.len(),
            provider = self.client.provider_name(),
            "starting eval run"
        );

        let mut results = Vec::with_capacity(rows.len());
        for row in &rows {
            let result = self.evaluate_row(row, model).await?;
            debug!(
                row_id = %result.row_id,
                passed = result.passed,
                score = result.score,
                "row evaluated"
            );
            results.push(result);
        }

        let summary = RunSummary::from_results(
            dataset_path.display().to_string(),
            model.to_string(),
            results,
        );
        info!(
            passed = summary.passed,
            total = summary.total,
            pass_rate = summary.pass_rate,
            "run complete"
        );
        Ok(summary)
    }

    async fn evaluate_row(&self, row: &DatasetRow, model: &str) -> anyhow::Result<EvalResult> {
        let metric = self.metric_for(row)?;
        let template = self.prompts.template_for(row.task)?;
        let prompt = render(template, &row.input);

        let resp = self.client.generate(&prompt, model).await?;
        let outcome = metric.evaluate(row, &resp).await?;

        Ok(EvalResult {
            row_id: row.id.clone(),
            task: row.task,
            passed: outcome.passed,
            score: outcome.score,
            details: outcome.details,
        })
    }

    fn metric_for(&self, row: &DatasetRow) -> Result<&Arc<dyn Metric>, HarnessError> {
        self.metrics
            .iter()
            .find(|m| m.task() == row.task)
            .ok_or_else(|| HarnessError::UnsupportedTask {
                row_id: row.id.clone(),
                task: row.task.to_string(),
            })
    }
}
