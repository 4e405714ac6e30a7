use std::fmt;

use serde::{Deserialize, Serialize};

/// Discriminator selecting which metric and prompt template apply to a row.
///
/// Unknown task strings are rejected at dataset deserialization, which
/// aborts the run before any row is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Label,
    Json,
}

impl TaskKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskKind::Label => "label",
            TaskKind::Json => "json",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-row expectation, keyed by the row's task type.
///
/// The variants carry distinct field names, so untagged deserialization is
/// unambiguous: `{"label": ...}` vs `{"schema": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expected {
    Label { label: String },
    JsonSchema { schema: serde_json::Value },
}

/// One dataset example: one input, one expected outcome, one task type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetRow {
    pub id: String,
    pub task: TaskKind,
    pub input: String,
    pub expected: Expected,
}

/// Normalized provider output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmResponse {
    pub text: String,
    pub provider: String,
    pub model: String,
}

/// Row-level evaluation outcome. Produced once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalResult {
    pub row_id: String,
    pub task: TaskKind,
    pub passed: bool,
    pub score: f64,
    pub details: serde_json::Value,
}

/// Aggregate summary for a single dataset evaluation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub dataset_path: String,
    pub model: String,
    pub total: usize,
    pub passed: usize,
    pub pass_rate: f64,
    pub avg_score: f64,
    pub generated_at: String,
    pub results: Vec<EvalResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl RunSummary {
    /// Aggregate row results, preserving their order.
    ///
    /// Both `pass_rate` and `avg_score` are an explicit 0.0 for an empty
    /// result set.
    pub fn from_results(dataset_path: String, model: String, results: Vec<EvalResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        let pass_rate = if total == 0 {
            0.0
        } else {
            passed as f64 / total as f64
        };
        let avg_score = if total == 0 {
            0.0
        } else {
            results.iter().map(|r| r.score).sum::<f64>() / total as f64
        };

        Self {
            dataset_path,
            model,
            total,
            passed,
            pass_rate,
            avg_score,
            generated_at: chrono::Utc::now().to_rfc3339(),
            results,
            notes: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(id: &str, passed: bool, score: f64) -> EvalResult {
        EvalResult {
            row_id: id.to_string(),
            task: TaskKind::Label,
            passed,
            score,
            details: serde_json::json!({}),
        }
    }

    #[test]
    fn summary_invariants_hold() {
        let summary = RunSummary::from_results(
            "data/suite.jsonl".into(),
            "m".into(),
            vec![
                result("a", true, 1.0),
                result("b", false, 0.0),
                result("c", true, 1.0),
                result("d", false, 0.2),
            ],
        );
        assert_eq!(summary.total, 4);
        assert_eq!(summary.passed, 2);
        assert!((summary.pass_rate - 0.5).abs() < 1e-12);
        assert!((summary.avg_score - 0.55).abs() < 1e-12);
        assert_eq!(summary.results[0].row_id, "a");
        assert_eq!(summary.results[3].row_id, "d");
    }

    #[test]
    fn empty_run_defaults_to_zero() {
        let summary = RunSummary::from_results("empty.jsonl".into(), "m".into(), vec![]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.passed, 0);
        assert_eq!(summary.pass_rate, 0.0);
        assert_eq!(summary.avg_score, 0.0);
    }

    #[test]
    fn dataset_row_parses_label_and_schema_shapes() {
        let row: DatasetRow = serde_json::from_str(
            r#"{"id":"r1","task":"label","input":"hi","expected":{"label":"greeting"}}"#,
        )
        .unwrap();
        assert_eq!(row.task, TaskKind::Label);
        assert!(matches!(row.expected, Expected::Label { .. }));

        let row: DatasetRow = serde_json::from_str(
            r#"{"id":"r2","task":"json","input":"hi","expected":{"schema":{"type":"object"}}}"#,
        )
        .unwrap();
        assert_eq!(row.task, TaskKind::Json);
        assert!(matches!(row.expected, Expected::JsonSchema { .. }));
    }

    #[test]
    fn unknown_task_is_rejected() {
        let err = serde_json::from_str::<DatasetRow>(
            r#"{"id":"r1","task":"summarize","input":"hi","expected":{"label":"x"}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown variant"));
    }
}
