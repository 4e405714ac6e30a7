use rubric_core::baseline::Baseline;
use rubric_core::gate::evaluate_regression;
use rubric_core::report::{json, percent};

use super::super::args::GateArgs;
use crate::exit_codes::{GATE_FAILED, SUCCESS};

pub(crate) fn run(args: GateArgs) -> anyhow::Result<i32> {
    let report = json::read_json(&args.report_json)?;
    let baseline = Baseline::load(&args.baseline_json)?;
    // missing dataset key is fatal: bubbles up as a config error
    let baseline_pass_rate = baseline.pass_rate_for(&args.dataset_key)?;

    let verdict = evaluate_regression(report.pass_rate, baseline_pass_rate, args.max_drop);
    let allowed = args.max_drop.max(0.0);

    if !verdict.ok {
        eprintln!(
            "FAIL: regression budget exceeded for {}: current={}, baseline={}, drop={}, allowed={}",
            args.dataset_key,
            percent(report.pass_rate),
            percent(baseline_pass_rate),
            percent(verdict.drop),
            percent(allowed)
        );
        return Ok(GATE_FAILED);
    }

    println!(
        "OK: regression gate passed for {}: current={}, baseline={}, drop={}, allowed={}",
        args.dataset_key,
        percent(report.pass_rate),
        percent(baseline_pass_rate),
        percent(verdict.drop),
        percent(allowed)
    );
    Ok(SUCCESS)
}
