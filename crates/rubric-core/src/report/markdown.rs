use crate::model::RunSummary;
use crate::report::percent;
use std::path::Path;

const MAX_FAILURES: usize = 5;
const MAX_DETAILS_CHARS: usize = 300;

/// Per-run human-readable report.
pub fn render_markdown(summary: &RunSummary) -> String {
    let mut md = String::new();
    md.push_str("# Eval Report\n\n");
    md.push_str(&format!("- Dataset: `{}`\n", summary.dataset_path));
    md.push_str(&format!("- Model: `{}`\n", summary.model));
    md.push_str(&format!(
        "- Passed: **{}/{}**\n",
        summary.passed, summary.total
    ));
    md.push_str(&format!("- Pass rate: **{}**\n", percent(summary.pass_rate)));
    md.push_str(&format!("- Avg score: **{:.3}**\n", summary.avg_score));
    md.push_str("\n## Failures\n\n");

    let failures: Vec<_> = summary.results.iter().filter(|r| !r.passed).collect();
    if failures.is_empty() {
        md.push_str("_None_\n");
        return md;
    }

    for r in failures.iter().take(MAX_FAILURES) {
        let details: String = serde_json::to_string(&r.details)
            .unwrap_or_default()
            .chars()
            .take(MAX_DETAILS_CHARS)
            .collect();
        md.push_str(&format!(
            "- `{}` ({}) -> score={:.2} details={}\n",
            r.row_id, r.task, r.score, details
        ));
    }
    if failures.len() > MAX_FAILURES {
        md.push_str(&format!("- ... and {} more\n", failures.len() - MAX_FAILURES));
    }
    md
}

pub fn write_markdown(summary: &RunSummary, out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(out, render_markdown(summary))?;
    Ok(())
}
