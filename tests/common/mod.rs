use perp_calc::config::Config;
use perp_calc::models::{Direction, TradeInputs};

/// Fixed policy values, independent of the process environment.
pub fn test_config() -> Config {
    Config {
        total_asset: 10000.0,
        risk_ratio: 5.0,
        margin_usage_ratio: 60.0,
        fee_rate: 0.0004,
        min_leverage: 3.0,
        max_leverage: 150.0,
        max_stop_loss_pct: 5.0,
        tight_stop_pct: 1.0,
        max_take_profits: 10,
        log_level: "INFO".to_string(),
    }
}

pub fn make_inputs(
    direction: Direction,
    entry_price: f64,
    stop_loss: f64,
    take_profits: &[f64],
) -> TradeInputs {
    TradeInputs {
        total_asset: 10000.0,
        risk_ratio: 5.0,
        direction,
        entry_price,
        stop_loss,
        take_profits: take_profits.to_vec(),
        margin_usage_ratio: 60.0,
    }
}
