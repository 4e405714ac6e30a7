use std::sync::Arc;

use rubric_core::metrics_api::Metric;
use rubric_core::model::TaskKind;

mod exact_label;
mod json_schema;

pub use exact_label::{exact_label, ExactLabelMetric};
pub use json_schema::{json_schema_match, JsonSchemaMetric};

/// One metric per supported task type.
pub fn default_metrics() -> Vec<Arc<dyn Metric>> {
    vec![Arc::new(ExactLabelMetric), Arc::new(JsonSchemaMetric)]
}

/// Convenience lookup used by tests and embedders.
pub fn metric_for_task(task: TaskKind) -> Arc<dyn Metric> {
    match task {
        TaskKind::Label => Arc::new(ExactLabelMetric),
        TaskKind::Json => Arc::new(JsonSchemaMetric),
    }
}
