use async_trait::async_trait;
use rubric_core::errors::HarnessError;
use rubric_core::metrics_api::{Metric, MetricOutcome};
use rubric_core::model::{DatasetRow, Expected, LlmResponse, TaskKind};
use serde_json::json;

// Only the head of the prediction feeds the near-JSON distance heuristic;
// details carry a slightly longer raw snippet.
const NEAR_JSON_PROBE_CHARS: usize = 200;
const RAW_SNIPPET_CHARS: usize = 400;
const MAX_SCHEMA_ERRORS: usize = 5;

/// Parse model output as JSON and validate it against a 2020-12 schema.
///
/// Unparseable output fails with a small partial-credit score; parseable
/// but non-conforming output fails with score 0.0 and the first schema
/// errors, ordered by instance path. A schema that does not compile is a
/// configuration error, not a row outcome.
pub fn json_schema_match(
    pred: &str,
    schema: &serde_json::Value,
) -> anyhow::Result<MetricOutcome> {
    let raw = pred.trim();

    let obj: serde_json::Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => return Ok(near_json_outcome(raw, &e)),
    };

    let validator = jsonschema::options()
        .with_draft(jsonschema::Draft::Draft202012)
        .build(schema)
        .map_err(|e| HarnessError::SchemaCompile {
            detail: e.to_string(),
        })?;

    // Lexicographic over path segments; the sort is stable so validator
    // ordering breaks ties.
    let mut errors: Vec<(Vec<String>, String)> = validator
        .iter_errors(&obj)
        .map(|e| (pointer_segments(&e.instance_path().to_string()), e.to_string()))
        .collect();
    errors.sort_by(|a, b| a.0.cmp(&b.0));

    if errors.is_empty() {
        return Ok(MetricOutcome::pass(1.0, json!({ "obj": obj })));
    }

    let messages: Vec<&str> = errors
        .iter()
        .take(MAX_SCHEMA_ERRORS)
        .map(|(_, msg)| msg.as_str())
        .collect();
    Ok(MetricOutcome::fail(
        0.0,
        json!({
            "error": "schema_failed",
            "schema_errors": messages,
            "obj": obj,
        }),
    ))
}

/// Small partial credit for failing-but-close output: a bounded function
/// of the edit distance between the head of the text and `"{}"`.
fn near_json_outcome(raw: &str, err: &serde_json::Error) -> MetricOutcome {
    let probe: String = raw.chars().take(NEAR_JSON_PROBE_CHARS).collect();
    let dist = strsim::levenshtein(&probe, "{}");
    let score = (0.2 - (dist as f64 / 1000.0).min(0.2)).max(0.0);

    let snippet: String = raw.chars().take(RAW_SNIPPET_CHARS).collect();
    MetricOutcome::fail(
        score,
        json!({
            "error": "invalid_json",
            "exception": err.to_string(),
            "raw": snippet,
        }),
    )
}

/// Decode a JSON pointer into its segment list ("" -> [], "/a/b" -> [a, b]).
fn pointer_segments(pointer: &str) -> Vec<String> {
    if pointer.is_empty() {
        return Vec::new();
    }
    pointer
        .split('/')
        .skip(1)
        .map(|s| s.replace("~1", "/").replace("~0", "~"))
        .collect()
}

pub struct JsonSchemaMetric;

#[async_trait]
impl Metric for JsonSchemaMetric {
    fn name(&self) -> &'static str {
        "json_schema"
    }

    fn task(&self) -> TaskKind {
        TaskKind::Json
    }

    async fn evaluate(
        &self,
        row: &DatasetRow,
        resp: &LlmResponse,
    ) -> anyhow::Result<MetricOutcome> {
        let Expected::JsonSchema { schema } = &row.expected else {
            return Err(HarnessError::ExpectedShape {
                row_id: row.id.clone(),
                task: row.task.to_string(),
            }
            .into());
        };
        json_schema_match(&resp.text, schema)
    }
}
