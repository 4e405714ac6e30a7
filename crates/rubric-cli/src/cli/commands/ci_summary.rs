use rubric_core::report::{ci_summary, json};

use super::super::args::CiSummaryArgs;
use crate::exit_codes::SUCCESS;

pub(crate) fn run(args: CiSummaryArgs) -> anyhow::Result<i32> {
    let mut reports = Vec::with_capacity(args.reports.len());
    for path in &args.reports {
        reports.push(json::read_json(path)?);
    }

    ci_summary::write_summary(&reports, &args.out)?;
    eprintln!("Wrote PR comment to {}", args.out.display());
    Ok(SUCCESS)
}
