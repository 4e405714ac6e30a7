use crate::model::RunSummary;
use crate::report::percent;

pub fn print_summary(summary: &RunSummary) {
    let failed = summary.total - summary.passed;
    eprintln!(
        "Results: pass={} fail={} pass_rate={} avg_score={:.3}",
        summary.passed,
        failed,
        percent(summary.pass_rate),
        summary.avg_score
    );
}
