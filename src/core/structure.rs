use crate::models::{Direction, StructuralIssue};

/// Price-geometry validation: the stop must sit on the losing side of the
/// entry, and targets must ladder strictly away from it in entry order.
/// Boundary equality counts as a violation. Purely ordinal: no monetary
/// values are consulted, so it flags setups the sizing steps silently
/// propagate as negative numbers.
pub fn check(
    direction: Direction,
    entry_price: f64,
    stop_loss: f64,
    take_profits: &[f64],
) -> Vec<StructuralIssue> {
    let mut issues = Vec::new();

    match direction {
        Direction::Long => {
            if stop_loss >= entry_price {
                issues.push(StructuralIssue::StopNotBelowEntry);
            }

            let mut prev = entry_price;
            for (i, &tp) in take_profits.iter().enumerate() {
                let index = i + 1;
                if tp <= entry_price {
                    issues.push(StructuralIssue::TargetNotAboveEntry(index));
                }
                if tp <= prev {
                    issues.push(StructuralIssue::TargetNotAbovePrevious(index));
                }
                prev = tp;
            }
        }
        Direction::Short => {
            if stop_loss <= entry_price {
                issues.push(StructuralIssue::StopNotAboveEntry);
            }

            let mut prev = entry_price;
            for (i, &tp) in take_profits.iter().enumerate() {
                let index = i + 1;
                if tp >= entry_price {
                    issues.push(StructuralIssue::TargetNotBelowEntry(index));
                }
                if tp >= prev {
                    issues.push(StructuralIssue::TargetNotBelowPrevious(index));
                }
                prev = tp;
            }
        }
    }

    issues
}
