use crate::config::Config;
use crate::models::{Direction, TradeInputs};

/// Fixed policy values, independent of the process environment.
pub fn default_test_config() -> Config {
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

/// Reference LONG setup: 10k equity, 5% risk, entry 50000, stop 49000.
pub fn long_inputs(take_profits: &[f64]) -> TradeInputs {
    TradeInputs {
        total_asset: 10000.0,
        risk_ratio: 5.0,
        direction: Direction::Long,
        entry_price: 50000.0,
        stop_loss: 49000.0,
        take_profits: take_profits.to_vec(),
        margin_usage_ratio: 60.0,
    }
}

/// Mirror SHORT setup: entry 50000, stop 51000.
pub fn short_inputs(take_profits: &[f64]) -> TradeInputs {
    TradeInputs {
        total_asset: 10000.0,
        risk_ratio: 5.0,
        direction: Direction::Short,
        entry_price: 50000.0,
        stop_loss: 51000.0,
        take_profits: take_profits.to_vec(),
        margin_usage_ratio: 60.0,
    }
}
