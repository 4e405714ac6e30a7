use serde::{Deserialize, Serialize};

/// Outcome of a regression comparison: whether the drop stayed within
/// budget, and the computed drop (negative when the current run improved).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionVerdict {
    pub ok: bool,
    pub drop: f64,
}

/// Compare a current pass rate against a stored baseline.
///
/// `drop = baseline - current`. A negative `max_drop` clamps to 0. The
/// equality boundary passes. Pure and stateless; no rounding beyond what
/// callers choose to display.
pub fn evaluate_regression(
    current_pass_rate: f64,
    baseline_pass_rate: f64,
    max_drop: f64,
) -> RegressionVerdict {
    let drop = baseline_pass_rate - current_pass_rate;
    let allowed_drop = max_drop.max(0.0);
    RegressionVerdict {
        ok: drop <= allowed_drop,
        drop,
    }
}

/// Absolute pass-rate threshold used by `run` for CI gating.
pub fn meets_min_pass_rate(pass_rate: f64, min_pass_rate: f64) -> bool {
    pass_rate >= min_pass_rate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_drop_within_budget_passes() {
        let v = evaluate_regression(0.88, 0.90, 0.03);
        assert!(v.ok);
        assert!((v.drop - 0.02).abs() < 1e-9);
    }

    #[test]
    fn drop_over_budget_fails() {
        let v = evaluate_regression(0.85, 0.90, 0.03);
        assert!(!v.ok);
        assert!((v.drop - 0.05).abs() < 1e-9);
    }

    #[test]
    fn equality_boundary_passes() {
        // 0.75 - 0.5 = 0.25 is exact in binary
        let v = evaluate_regression(0.5, 0.75, 0.25);
        assert!(v.ok);
        assert_eq!(v.drop, 0.25);
    }

    #[test]
    fn improvement_yields_negative_drop_and_passes() {
        let v = evaluate_regression(0.95, 0.90, 0.0);
        assert!(v.ok);
        assert!(v.drop < 0.0);
    }

    #[test]
    fn negative_budget_clamps_to_zero() {
        // clamped budget 0.0: any real drop fails, no drop passes
        assert!(!evaluate_regression(0.80, 0.90, -0.5).ok);
        assert!(evaluate_regression(0.90, 0.90, -0.5).ok);
    }

    #[test]
    fn ok_matches_the_raw_comparison() {
        for (current, baseline, max_drop) in [
            (0.0, 1.0, 0.5),
            (1.0, 0.0, 0.0),
            (0.5, 0.5, 0.0),
            (0.25, 0.75, 0.5),
            (0.3, 0.9, 0.25),
        ] {
            let v = evaluate_regression(current, baseline, max_drop);
            assert_eq!(v.ok, baseline - current <= max_drop.max(0.0));
        }
    }

    #[test]
    fn min_pass_rate_is_inclusive() {
        assert!(meets_min_pass_rate(0.90, 0.90));
        assert!(meets_min_pass_rate(0.95, 0.90));
        assert!(!meets_min_pass_rate(0.89, 0.90));
    }
}
