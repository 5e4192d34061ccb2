use crate::models::{Direction, TradeInputs, TradeResults};

/// `$1,234.56`, with the sign kept inside the currency symbol like `$-12.30`.
pub fn format_currency(value: f64) -> String {
    format!("${}", group_thousands(value, 2))
}

pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

pub fn format_leverage(value: f64) -> String {
    format!("{:.2}x", value)
}

pub fn format_quantity(value: f64) -> String {
    group_thousands(value, 6)
}

/// Fixed-point rendering with thousands separators. Non-finite values pass
/// through std formatting so degenerate pipeline outputs stay visible.
fn group_thousands(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return format!("{:.*}", decimals, value);
    }

    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (pos, ch) in int_part.chars().enumerate() {
        if pos > 0 && (int_part.len() - pos) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Ordered (item, value) rows for the results table. Values are rendered
/// verbatim from the results, no re-derivation here.
pub fn results_table(results: &TradeResults) -> Vec<(String, String)> {
    let mut rows = vec![
        (
            "1. Stop width (%)".to_string(),
            format_percent(results.stop_loss_pct),
        ),
        (
            "1. Stop price".to_string(),
            format_currency(results.stop_loss_price),
        ),
        (
            "1. Loss at stop (fees incl.)".to_string(),
            format_currency(results.actual_loss_amount),
        ),
        (
            "2. Position size (notional)".to_string(),
            format_currency(results.position_notional),
        ),
        (
            "2. Position quantity".to_string(),
            format_quantity(results.position_quantity),
        ),
        (
            "3. Position leverage".to_string(),
            format_leverage(results.position_leverage),
        ),
        (
            "3. Effective leverage".to_string(),
            format_leverage(results.effective_leverage),
        ),
    ];

    for tp in &results.take_profit_results {
        rows.push((
            format!("4. TP{} R/R", tp.index),
            format!("{:.2}", tp.rr_ratio),
        ));
        rows.push((
            format!("4. TP{} actual R/R", tp.index),
            format!("{:.2}", tp.actual_rr),
        ));
        rows.push((
            format!("4. TP{} net profit", tp.index),
            format_currency(tp.profit),
        ));
    }

    rows.push((
        "5. Structural issues".to_string(),
        results.structural_issue_text(),
    ));
    rows.push((
        "6. Required margin".to_string(),
        format_currency(results.required_margin),
    ));
    rows.push((
        "7. Overall judgment".to_string(),
        results.overall_judgment_text(),
    ));
    rows.push((
        "8. Actual entry notional".to_string(),
        format_currency(results.actual_entry_notional),
    ));
    rows.push((
        "8. Actual entry quantity".to_string(),
        format_quantity(results.actual_entry_quantity),
    ));
    rows.push((
        "8. Actual entry leverage".to_string(),
        format_leverage(results.actual_entry_leverage),
    ));

    rows
}

pub fn print_table(results: &TradeResults) {
    let rows = results_table(results);
    let width = rows.iter().map(|(item, _)| item.len()).max().unwrap_or(0);

    println!("\n{}", "=".repeat(70));
    println!("  TRADE CALCULATION");
    println!("{}", "=".repeat(70));
    for (item, value) in &rows {
        println!("  {:<w$}  {}", item, value, w = width);
    }
    println!("{}", "=".repeat(70));
}

/// Copy-paste alert: one TP line per target in entry order, prices at two
/// decimals, margin and leverage taken from the actual-entry figures.
pub fn alert_message(inputs: &TradeInputs, results: &TradeResults) -> String {
    let header = match inputs.direction {
        Direction::Long => "📈 LONG",
        Direction::Short => "📉 SHORT",
    };

    let mut lines = vec![
        format!("{} SETUP", header),
        format!("• Entry : {:.2}", inputs.entry_price),
        format!("• Margin : {:.2}", results.required_margin),
    ];
    for (i, tp) in inputs.take_profits.iter().enumerate() {
        lines.push(format!("• TP{} : {:.2}", i + 1, tp));
    }
    lines.push(format!("• SL : {:.2}", inputs.stop_loss));
    lines.push(format!(
        "• Leverage : {:.2}x",
        results.actual_entry_leverage
    ));

    lines.join("\n")
}
