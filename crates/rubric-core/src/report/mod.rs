pub mod ci_summary;
pub mod console;
pub mod json;
pub mod markdown;

/// Format a rate in [0, 1] for operator-facing output, e.g. `92.00%`.
pub fn percent(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}
