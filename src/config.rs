use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Account defaults (used by the CLI when no trade-level override is given)
    pub total_asset: f64,
    pub risk_ratio: f64,
    pub margin_usage_ratio: f64,

    // Fees (as fraction, e.g., 0.0004 = 0.04% round-trip taker)
    pub fee_rate: f64,

    // Leverage policy
    pub min_leverage: f64,
    pub max_leverage: f64,

    // Judgment thresholds (%)
    pub max_stop_loss_pct: f64,
    pub tight_stop_pct: f64,

    // Boundary limit, enforced at input validation, never in the pipeline
    pub max_take_profits: usize,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        Config {
            total_asset: env("TOTAL_ASSET", "10000").parse().unwrap_or(10000.0),
            risk_ratio: env("RISK_RATIO", "5").parse().unwrap_or(5.0),
            margin_usage_ratio: env("MARGIN_USAGE_RATIO", "60")
                .parse()
                .unwrap_or(60.0),
            fee_rate: env("FEE_RATE", "0.0004").parse().unwrap_or(0.0004), // 0.04% taker, entry + exit
            min_leverage: env("MIN_LEVERAGE", "3").parse().unwrap_or(3.0),
            max_leverage: env("MAX_LEVERAGE", "150").parse().unwrap_or(150.0),
            max_stop_loss_pct: env("MAX_STOP_LOSS_PCT", "5").parse().unwrap_or(5.0),
            tight_stop_pct: env("TIGHT_STOP_PCT", "1").parse().unwrap_or(1.0),
            max_take_profits: env("MAX_TAKE_PROFITS", "10").parse().unwrap_or(10),
            log_level: env("LOG_LEVEL", "INFO"),
        }
    }
}
