use crate::config::Config;
use crate::models::{JudgmentFlag, StructuralIssue};

/// Remediation flags for the whole setup. Duplicate tags are kept: a wide
/// stop adds a second stop-loss flag even when structure already raised one.
pub fn judge(
    cfg: &Config,
    leverage: f64,
    stop_loss_pct: f64,
    structural_issues: &[StructuralIssue],
) -> Vec<JudgmentFlag> {
    let mut flags = Vec::new();

    if !structural_issues.is_empty() {
        flags.push(JudgmentFlag::StopLossAdjustment);
    }

    if leverage > cfg.max_leverage {
        flags.push(JudgmentFlag::SizeAdjustment);
    } else if leverage < cfg.min_leverage && stop_loss_pct < cfg.tight_stop_pct {
        // Unreachable while the sizing step clamps leverage into
        // [min, max]; kept so the check survives a clamping-policy change.
        flags.push(JudgmentFlag::SizeAdjustment);
    }

    if stop_loss_pct > cfg.max_stop_loss_pct {
        flags.push(JudgmentFlag::StopLossAdjustment);
    }

    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::default_test_config;

    #[test]
    fn clean_setup_yields_no_flags() {
        let cfg = default_test_config();
        let flags = judge(&cfg, 4.0, 2.0, &[]);
        assert!(flags.is_empty());
    }

    #[test]
    fn structural_issue_flags_stop_loss() {
        let cfg = default_test_config();
        let flags = judge(&cfg, 4.0, 2.0, &[StructuralIssue::StopNotBelowEntry]);
        assert_eq!(flags, vec![JudgmentFlag::StopLossAdjustment]);
    }

    #[test]
    fn over_max_leverage_flags_size() {
        let cfg = default_test_config();
        let flags = judge(&cfg, 151.0, 2.0, &[]);
        assert_eq!(flags, vec![JudgmentFlag::SizeAdjustment]);
    }

    #[test]
    fn under_min_leverage_with_tight_stop_flags_size() {
        let cfg = default_test_config();
        let flags = judge(&cfg, 2.0, 0.5, &[]);
        assert_eq!(flags, vec![JudgmentFlag::SizeAdjustment]);
    }

    #[test]
    fn under_min_leverage_with_normal_stop_passes() {
        let cfg = default_test_config();
        let flags = judge(&cfg, 2.0, 2.0, &[]);
        assert!(flags.is_empty());
    }

    #[test]
    fn wide_stop_flags_stop_loss() {
        let cfg = default_test_config();
        let flags = judge(&cfg, 4.0, 5.5, &[]);
        assert_eq!(flags, vec![JudgmentFlag::StopLossAdjustment]);
    }

    #[test]
    fn boundary_stop_width_passes() {
        let cfg = default_test_config();
        let flags = judge(&cfg, 4.0, 5.0, &[]);
        assert!(flags.is_empty());
    }

    #[test]
    fn stop_loss_flag_can_repeat() {
        // Structural issue and a wide stop each raise the same tag
        let cfg = default_test_config();
        let flags = judge(&cfg, 4.0, 6.0, &[StructuralIssue::StopNotBelowEntry]);
        assert_eq!(
            flags,
            vec![
                JudgmentFlag::StopLossAdjustment,
                JudgmentFlag::StopLossAdjustment,
            ]
        );
    }
}
