use thiserror::Error;

/// Fatal harness errors.
///
/// Recoverable scoring outcomes (`invalid_json`, `schema_failed`) are not
/// errors: they are encoded in `MetricOutcome.details` and never abort a
/// run.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("dataset error in {path}: {detail}")]
    Dataset { path: String, detail: String },

    #[error("unsupported task '{task}' for row '{row_id}': no metric registered")]
    UnsupportedTask { row_id: String, task: String },

    #[error("row '{row_id}': expected payload does not match task '{task}'")]
    ExpectedShape { row_id: String, task: String },

    #[error("prompt template error: {detail}")]
    Prompt { detail: String },

    #[error("baseline error in {path}: {detail}")]
    Baseline { path: String, detail: String },

    #[error("dataset key '{key}' missing from baseline")]
    MissingBaselineKey { key: String },

    #[error("invalid schema: {detail}")]
    SchemaCompile { detail: String },
}
