mod common;

use perp_calc::core::calculator::calculate;
use perp_calc::models::{Direction, InputError, TradeResults};
use perp_calc::report;

use crate::common::{make_inputs, test_config};

#[test]
fn reference_long_pipeline_to_table_and_alert() {
    // 10k equity, 5% risk, LONG 50000 / stop 49000 / TPs 51000, 52000
    let cfg = test_config();
    let inputs = make_inputs(Direction::Long, 50000.0, 49000.0, &[51000.0, 52000.0]);
    inputs.validate(&cfg).unwrap();

    let results = calculate(&cfg, &inputs);

    // Pipeline numbers
    let quantity = 500.0 / 1039.6;
    assert!((results.stop_loss_pct - 2.0).abs() < 1e-9);
    assert!((results.position_quantity - quantity).abs() < 1e-9);
    assert!((results.position_notional - 50000.0 * quantity).abs() < 1e-6);
    assert!((results.actual_loss_amount - 500.0).abs() < 1e-6);
    assert!((results.required_margin - 6000.0).abs() < 1e-6);
    assert!(
        (results.required_margin * results.position_leverage - results.position_notional).abs()
            < 1e-6
    );
    assert!((results.effective_leverage - results.position_notional / 10000.0).abs() < 1e-12);
    assert_eq!(results.structural_issue_text(), "no issues");
    assert_eq!(results.overall_judgment_text(), "no issues");

    // Table carries every section in order
    let rows = report::results_table(&results);
    let items: Vec<&str> = rows.iter().map(|(item, _)| item.as_str()).collect();
    assert_eq!(items[0], "1. Stop width (%)");
    assert!(items.contains(&"4. TP1 net profit"));
    assert!(items.contains(&"4. TP2 net profit"));
    assert!(items.contains(&"6. Required margin"));
    assert_eq!(rows[0].1, "2.00%");

    // Alert renders the whole setup
    let alert = report::alert_message(&inputs, &results);
    assert_eq!(
        alert,
        format!(
            "📈 LONG SETUP\n\
             • Entry : 50000.00\n\
             • Margin : {:.2}\n\
             • TP1 : 51000.00\n\
             • TP2 : 52000.00\n\
             • SL : 49000.00\n\
             • Leverage : {:.2}x",
            results.required_margin, results.actual_entry_leverage
        )
    );
}

#[test]
fn short_pipeline_flags_inverted_setup() {
    // SHORT with the stop below entry and targets above it: everything the
    // structure check owns should fire, and judgment should ask for a stop
    // adjustment, while the calculation still completes.
    let cfg = test_config();
    let inputs = make_inputs(Direction::Short, 50000.0, 49000.0, &[51000.0, 52000.0]);

    let results = calculate(&cfg, &inputs);

    assert!(results.stop_loss_pct < 0.0);
    assert_eq!(
        results.structural_issue_text(),
        "stop loss at or below entry price / TP1 at or above entry price / TP1 at or above previous target / TP2 at or above entry price / TP2 at or above previous target"
    );
    assert_eq!(results.overall_judgment_text(), "stop-loss adjustment needed");
    // Theoretical ratios degrade to zero on the negative stop width
    for tp in &results.take_profit_results {
        assert!((tp.rr_ratio - 0.0).abs() < 1e-9);
    }
}

#[test]
fn oversized_position_reports_reality_over_the_cap() {
    // A razor-thin stop forces a huge notional; leverage caps at the policy
    // maximum and required margin overshoots the stated preference.
    let cfg = test_config();
    let mut inputs = make_inputs(Direction::Long, 50000.0, 49999.0, &[50100.0]);
    inputs.margin_usage_ratio = 1.0;

    let results = calculate(&cfg, &inputs);

    assert!((results.position_leverage - cfg.max_leverage).abs() < 1e-9);
    assert!(results.required_margin > inputs.total_asset * 0.01);
    assert!(
        (results.required_margin * results.position_leverage - results.position_notional).abs()
            / results.position_notional
            < 1e-9
    );
    // Effective leverage stays the raw asset-relative ratio, decoupled from
    // the capped figure
    assert!((results.effective_leverage - results.position_notional / 10000.0).abs() < 1e-9);
    assert!((results.effective_leverage - results.position_leverage).abs() > 1.0);
    assert_eq!(results.overall_judgment_text(), "no issues");
}

#[test]
fn validation_rejects_what_the_core_would_degrade_on() {
    let cfg = test_config();

    let empty = make_inputs(Direction::Long, 50000.0, 49000.0, &[]);
    assert!(matches!(empty.validate(&cfg), Err(InputError::NoTargets)));

    let mut flat = make_inputs(Direction::Long, 50000.0, 50000.0, &[51000.0]);
    flat.stop_loss = flat.entry_price;
    assert!(matches!(
        flat.validate(&cfg),
        Err(InputError::StopEqualsEntry)
    ));

    let mut no_margin = make_inputs(Direction::Long, 50000.0, 49000.0, &[51000.0]);
    no_margin.margin_usage_ratio = 0.0;
    assert!(matches!(
        no_margin.validate(&cfg),
        Err(InputError::MarginRatioOutOfRange(_))
    ));
}

#[test]
fn results_round_trip_through_json() {
    let cfg = test_config();
    let inputs = make_inputs(Direction::Long, 50000.0, 49000.0, &[51000.0, 52000.0]);
    let results = calculate(&cfg, &inputs);

    let json = serde_json::to_string_pretty(&results).unwrap();
    let parsed: TradeResults = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.take_profit_results.len(), 2);
    assert!((parsed.position_notional - results.position_notional).abs() < 1e-9);
    assert_eq!(parsed.structural_issues, results.structural_issues);
    assert_eq!(parsed.judgments, results.judgments);
    assert_eq!(parsed.structural_issue_text(), "no issues");
}

#[test]
fn ten_targets_flow_through_in_order() {
    let cfg = test_config();
    let tps: Vec<f64> = (1..=10).map(|i| 50000.0 + i as f64 * 500.0).collect();
    let inputs = make_inputs(Direction::Long, 50000.0, 49000.0, &tps);
    inputs.validate(&cfg).unwrap();

    let results = calculate(&cfg, &inputs);

    assert_eq!(results.take_profit_results.len(), 10);
    for (i, tp) in results.take_profit_results.iter().enumerate() {
        assert_eq!(tp.index, i + 1);
    }
    // Ratios rise monotonically with the targets
    for pair in results.take_profit_results.windows(2) {
        assert!(pair[1].rr_ratio > pair[0].rr_ratio);
        assert!(pair[1].profit > pair[0].profit);
    }
    assert!(results.structural_issues.is_empty());

    let alert = report::alert_message(&inputs, &results);
    assert!(alert.contains("• TP10 : 55000.00"));
}
