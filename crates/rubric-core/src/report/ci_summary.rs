use std::path::Path;

use crate::model::RunSummary;
use crate::report::percent;

const MAX_FAILURES_PER_DATASET: usize = 5;

/// Short dataset label for tables: the file stem of the dataset path.
pub fn dataset_label(summary: &RunSummary) -> String {
    Path::new(&summary.dataset_path)
        .file_stem()
        .and_then(|s| s.to_str())
        .map(ToString::to_string)
        .unwrap_or_else(|| "unknown".to_string())
}

/// Merge several run reports into a single PR-comment Markdown body.
pub fn build_markdown(reports: &[RunSummary]) -> String {
    let mut md = String::new();
    md.push_str("## Eval CI Summary\n\n");
    md.push_str("| Dataset | Passed | Pass Rate | Avg Score |\n");
    md.push_str("|---|---:|---:|---:|\n");

    for report in reports {
        md.push_str(&format!(
            "| `{}` | {}/{} | {} | {:.3} |\n",
            dataset_label(report),
            report.passed,
            report.total,
            percent(report.pass_rate),
            report.avg_score
        ));
    }

    md.push_str("\n### Failures\n");

    let mut any_failure = false;
    for report in reports {
        let failures: Vec<_> = report.results.iter().filter(|r| !r.passed).collect();
        if failures.is_empty() {
            continue;
        }
        any_failure = true;
        md.push_str(&format!("- `{}`\n", dataset_label(report)));
        for failure in failures.iter().take(MAX_FAILURES_PER_DATASET) {
            md.push_str(&format!(
                "  - `{}` ({}) score={:.2}\n",
                failure.row_id, failure.task, failure.score
            ));
        }
    }

    if !any_failure {
        md.push_str("- None\n");
    }
    md
}

pub fn write_summary(reports: &[RunSummary], out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(out, build_markdown(reports))?;
    Ok(())
}
