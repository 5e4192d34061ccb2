use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::config::Config;
use crate::models::Direction;

/// Rendered wherever an issue or judgment list is empty.
pub const NO_ISSUES: &str = "no issues";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeInputs {
    /// Total account equity (USD)
    pub total_asset: f64,
    /// Max risk per trade as a percent of total_asset
    pub risk_ratio: f64,
    pub direction: Direction,
    pub entry_price: f64,
    pub stop_loss: f64,
    /// Take-profit targets in entry order (TP1, TP2, ...)
    pub take_profits: Vec<f64>,
    /// Percent of total_asset permitted as margin collateral
    pub margin_usage_ratio: f64,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("at least one take-profit target is required")]
    NoTargets,
    #[error("too many take-profit targets ({got}, max {max})")]
    TooManyTargets { got: usize, max: usize },
    #[error("{name} must be positive (got {value})")]
    NonPositive { name: String, value: f64 },
    #[error("entry price and stop loss must differ")]
    StopEqualsEntry,
    #[error("risk ratio must be in (0, 100] (got {0})")]
    RiskRatioOutOfRange(f64),
    #[error("margin usage ratio must be in (0, 100] (got {0})")]
    MarginRatioOutOfRange(f64),
}

impl TradeInputs {
    /// Boundary preconditions. The calculation pipeline itself never
    /// validates: skipping this and feeding it degenerate values yields
    /// NaN/infinite fields rather than an error.
    pub fn validate(&self, cfg: &Config) -> Result<(), InputError> {
        if !(self.total_asset > 0.0) {
            return Err(InputError::NonPositive {
                name: "total asset".to_string(),
                value: self.total_asset,
            });
        }
        if !(self.risk_ratio > 0.0 && self.risk_ratio <= 100.0) {
            return Err(InputError::RiskRatioOutOfRange(self.risk_ratio));
        }
        if !(self.margin_usage_ratio > 0.0 && self.margin_usage_ratio <= 100.0) {
            return Err(InputError::MarginRatioOutOfRange(self.margin_usage_ratio));
        }
        if !(self.entry_price > 0.0) {
            return Err(InputError::NonPositive {
                name: "entry price".to_string(),
                value: self.entry_price,
            });
        }
        if !(self.stop_loss > 0.0) {
            return Err(InputError::NonPositive {
                name: "stop loss".to_string(),
                value: self.stop_loss,
            });
        }
        if self.entry_price == self.stop_loss {
            return Err(InputError::StopEqualsEntry);
        }
        if self.take_profits.is_empty() {
            return Err(InputError::NoTargets);
        }
        if self.take_profits.len() > cfg.max_take_profits {
            return Err(InputError::TooManyTargets {
                got: self.take_profits.len(),
                max: cfg.max_take_profits,
            });
        }
        for (i, &tp) in self.take_profits.iter().enumerate() {
            if !(tp > 0.0) {
                return Err(InputError::NonPositive {
                    name: format!("TP{}", i + 1),
                    value: tp,
                });
            }
        }
        Ok(())
    }
}

/// Per-target reward/risk and profit metrics, keyed by 1-based entry order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TakeProfitResult {
    pub index: usize,
    /// Theoretical reward/risk from raw price distances
    pub rr_ratio: f64,
    /// Reward/risk after entry and exit fees on both legs
    pub actual_rr: f64,
    /// Net profit at this target, fees deducted
    pub profit: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructuralIssue {
    StopNotBelowEntry,
    StopNotAboveEntry,
    TargetNotAboveEntry(usize),
    TargetNotBelowEntry(usize),
    TargetNotAbovePrevious(usize),
    TargetNotBelowPrevious(usize),
}

impl fmt::Display for StructuralIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralIssue::StopNotBelowEntry => {
                write!(f, "stop loss at or above entry price")
            }
            StructuralIssue::StopNotAboveEntry => {
                write!(f, "stop loss at or below entry price")
            }
            StructuralIssue::TargetNotAboveEntry(i) => {
                write!(f, "TP{} at or below entry price", i)
            }
            StructuralIssue::TargetNotBelowEntry(i) => {
                write!(f, "TP{} at or above entry price", i)
            }
            StructuralIssue::TargetNotAbovePrevious(i) => {
                write!(f, "TP{} at or below previous target", i)
            }
            StructuralIssue::TargetNotBelowPrevious(i) => {
                write!(f, "TP{} at or above previous target", i)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JudgmentFlag {
    StopLossAdjustment,
    SizeAdjustment,
}

impl fmt::Display for JudgmentFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JudgmentFlag::StopLossAdjustment => write!(f, "stop-loss adjustment needed"),
            JudgmentFlag::SizeAdjustment => write!(f, "size adjustment needed"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeResults {
    // Stop metrics
    pub stop_loss_pct: f64,
    pub stop_loss_price: f64,
    /// Loss at the stop including entry and exit fees
    pub actual_loss_amount: f64,

    // Sizing
    pub position_notional: f64,
    pub position_quantity: f64,

    // Leverage
    pub position_leverage: f64,
    /// Notional relative to total assets, never clamped
    pub effective_leverage: f64,

    // Per-target metrics, ascending index
    pub take_profit_results: Vec<TakeProfitResult>,

    pub structural_issues: Vec<StructuralIssue>,

    pub required_margin: f64,

    /// Remediation flags; duplicates are preserved
    pub judgments: Vec<JudgmentFlag>,

    // Actual entry position. Mirrors the sizing fields today; kept as a
    // separate output contract read independently downstream.
    pub actual_entry_notional: f64,
    pub actual_entry_quantity: f64,
    pub actual_entry_leverage: f64,
}

impl TradeResults {
    pub fn structural_issue_text(&self) -> String {
        join_or_no_issues(&self.structural_issues)
    }

    pub fn overall_judgment_text(&self) -> String {
        join_or_no_issues(&self.judgments)
    }
}

fn join_or_no_issues<T: fmt::Display>(items: &[T]) -> String {
    if items.is_empty() {
        return NO_ISSUES.to_string();
    }
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(" / ")
}
