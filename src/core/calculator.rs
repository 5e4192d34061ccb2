use tracing::debug;

use crate::config::Config;
use crate::core::{judgment, structure};
use crate::models::{Direction, TakeProfitResult, TradeInputs, TradeResults};

pub fn risk_amount(total_asset: f64, risk_ratio: f64) -> f64 {
    total_asset * (risk_ratio / 100.0)
}

/// Stop distance as a signed percent of entry. Negative when the stop sits
/// on the wrong side of the entry; never clamped, so the structure check can
/// flag the setup instead of the math hiding it.
pub fn stop_loss_pct(direction: Direction, entry_price: f64, stop_loss: f64) -> f64 {
    match direction {
        Direction::Long => (entry_price - stop_loss) / entry_price * 100.0,
        Direction::Short => (stop_loss - entry_price) / entry_price * 100.0,
    }
}

fn price_diff(direction: Direction, entry_price: f64, stop_loss: f64) -> f64 {
    match direction {
        Direction::Long => entry_price - stop_loss,
        Direction::Short => stop_loss - entry_price,
    }
}

/// Risk-based sizing. Solves
///   risk = price_diff * qty + (entry + stop) * qty * fee_rate
/// for qty, so a stop-out loses exactly the risk budget with entry and exit
/// taker fees included. Returns (notional, quantity).
pub fn position_size(
    cfg: &Config,
    direction: Direction,
    entry_price: f64,
    stop_loss: f64,
    risk: f64,
) -> (f64, f64) {
    let diff = price_diff(direction, entry_price, stop_loss);
    let fee_per_unit = (entry_price + stop_loss) * cfg.fee_rate;
    let quantity = risk / (diff + fee_per_unit);
    let notional = entry_price * quantity;
    (notional, quantity)
}

/// Loss realized at the stop: price loss plus entry and exit fees.
pub fn actual_loss(
    cfg: &Config,
    direction: Direction,
    entry_price: f64,
    stop_loss: f64,
    notional: f64,
    quantity: f64,
) -> f64 {
    let price_loss = price_diff(direction, entry_price, stop_loss) * quantity;
    let entry_fee = notional * cfg.fee_rate;
    let exit_fee = stop_loss * quantity * cfg.fee_rate;
    price_loss + entry_fee + exit_fee
}

/// Returns (position_leverage, effective_leverage, required_margin).
///
/// The margin preference bounds leverage from below: the position is sized
/// first, then leverage is whatever ratio fits the notional into the
/// preferred margin, clamped into [min_leverage, max_leverage]. When the cap
/// binds, the notional is NOT reduced: required margin overshoots the
/// preference rather than the position silently shrinking.
pub fn leverage(
    cfg: &Config,
    notional: f64,
    total_asset: f64,
    margin_usage_ratio: f64,
) -> (f64, f64, f64) {
    let min_margin = total_asset * (margin_usage_ratio / 100.0);

    let leverage = if notional / min_margin <= cfg.max_leverage {
        (notional / min_margin).max(cfg.min_leverage)
    } else {
        cfg.max_leverage
    };

    let required_margin = notional / leverage;
    let effective_leverage = notional / total_asset;

    (leverage, effective_leverage, required_margin)
}

/// Per-target reward/risk and net profit. The fee-inclusive stop loss is
/// computed once by the caller and shared across all targets.
pub fn take_profit_metrics(
    cfg: &Config,
    inputs: &TradeInputs,
    notional: f64,
    quantity: f64,
    stop_pct: f64,
    loss_with_fee: f64,
) -> Vec<TakeProfitResult> {
    let entry = inputs.entry_price;
    let entry_fee = notional * cfg.fee_rate;

    inputs
        .take_profits
        .iter()
        .enumerate()
        .map(|(i, &tp)| {
            let index = i + 1;

            let profit_pct = match inputs.direction {
                Direction::Long => (tp - entry) / entry * 100.0,
                Direction::Short => (entry - tp) / entry * 100.0,
            };

            // A non-positive stop width makes the ratio indeterminate;
            // report 0 instead of dividing.
            let rr_ratio = if stop_pct > 0.0 {
                profit_pct / stop_pct
            } else {
                0.0
            };

            let gross_profit = match inputs.direction {
                Direction::Long => (tp - entry) * quantity,
                Direction::Short => (entry - tp) * quantity,
            };
            let tp_exit_fee = tp * quantity * cfg.fee_rate;
            let net_profit = gross_profit - entry_fee - tp_exit_fee;

            let actual_rr = if loss_with_fee > 0.0 {
                net_profit / loss_with_fee
            } else {
                0.0
            };

            TakeProfitResult {
                index,
                rr_ratio,
                actual_rr,
                profit: net_profit,
            }
        })
        .collect()
}

/// Runs the full pipeline. Deterministic and total over well-formed inputs;
/// degenerate values (zero margin ratio, stop equal to entry) propagate as
/// non-finite numbers rather than faulting. `TradeInputs::validate` is the
/// caller's guard.
pub fn calculate(cfg: &Config, inputs: &TradeInputs) -> TradeResults {
    let risk = risk_amount(inputs.total_asset, inputs.risk_ratio);

    let stop_pct = stop_loss_pct(inputs.direction, inputs.entry_price, inputs.stop_loss);

    let (notional, quantity) = position_size(
        cfg,
        inputs.direction,
        inputs.entry_price,
        inputs.stop_loss,
        risk,
    );

    let loss_with_fee = actual_loss(
        cfg,
        inputs.direction,
        inputs.entry_price,
        inputs.stop_loss,
        notional,
        quantity,
    );

    let (position_leverage, effective_leverage, required_margin) =
        leverage(cfg, notional, inputs.total_asset, inputs.margin_usage_ratio);

    let take_profit_results =
        take_profit_metrics(cfg, inputs, notional, quantity, stop_pct, loss_with_fee);

    let structural_issues = structure::check(
        inputs.direction,
        inputs.entry_price,
        inputs.stop_loss,
        &inputs.take_profits,
    );

    let judgments = judgment::judge(cfg, position_leverage, stop_pct, &structural_issues);

    debug!(
        "{} sized: risk ${:.2} | qty {:.6} | notional ${:.2} | leverage {:.2}x",
        inputs.direction, risk, quantity, notional, position_leverage
    );

    TradeResults {
        stop_loss_pct: stop_pct,
        stop_loss_price: inputs.stop_loss,
        actual_loss_amount: loss_with_fee,
        position_notional: notional,
        position_quantity: quantity,
        position_leverage,
        effective_leverage,
        take_profit_results,
        structural_issues,
        required_margin,
        judgments,
        actual_entry_notional: notional,
        actual_entry_quantity: quantity,
        actual_entry_leverage: position_leverage,
    }
}
