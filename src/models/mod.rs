pub mod direction;
pub mod trade;

pub use direction::Direction;
pub use trade::{
    InputError, JudgmentFlag, StructuralIssue, TakeProfitResult, TradeInputs, TradeResults,
    NO_ISSUES,
};
