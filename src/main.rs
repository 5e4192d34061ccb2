use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

use perp_calc::config::Config;
use perp_calc::core::calculator;
use perp_calc::models::{Direction, TradeInputs};
use perp_calc::report;

fn main() -> Result<()> {
    let cfg = Config::from_env();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    let args: Vec<String> = std::env::args().collect();

    let inputs = match parse_inputs(&cfg, &args) {
        Some(inputs) => inputs,
        None => {
            print_usage();
            std::process::exit(2);
        }
    };

    inputs.validate(&cfg)?;

    let results = calculator::calculate(&cfg, &inputs);

    if args.iter().any(|a| a == "--json") {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    report::print_table(&results);
    println!();
    println!("ALERT");
    println!("{}", report::alert_message(&inputs, &results));

    Ok(())
}

/// Positional args: `<long|short> <entry> <stop> <tp1[,tp2,...]>`.
/// Account-level values come from the environment via Config.
fn parse_inputs(cfg: &Config, args: &[String]) -> Option<TradeInputs> {
    let positional: Vec<&String> = args
        .iter()
        .skip(1)
        .filter(|a| !a.starts_with("--"))
        .collect();

    if positional.len() != 4 {
        return None;
    }

    let direction = Direction::parse(positional[0])?;
    let entry_price: f64 = positional[1].parse().ok()?;
    let stop_loss: f64 = positional[2].parse().ok()?;
    let take_profits = positional[3]
        .split(',')
        .map(|s| s.trim().parse().ok())
        .collect::<Option<Vec<f64>>>()?;

    Some(TradeInputs {
        total_asset: cfg.total_asset,
        risk_ratio: cfg.risk_ratio,
        direction,
        entry_price,
        stop_loss,
        take_profits,
        margin_usage_ratio: cfg.margin_usage_ratio,
    })
}

fn print_usage() {
    eprintln!("usage: perp-calc <long|short> <entry> <stop> <tp1[,tp2,...]> [--json]");
    eprintln!();
    eprintln!("Account settings come from the environment (or a .env file):");
    eprintln!("  TOTAL_ASSET            account equity in USD (default 10000)");
    eprintln!("  RISK_RATIO             percent of equity risked per trade (default 5)");
    eprintln!("  MARGIN_USAGE_RATIO     percent of equity usable as margin (default 60)");
    eprintln!("  FEE_RATE               round-trip taker fee fraction (default 0.0004)");
    eprintln!("  MIN_LEVERAGE / MAX_LEVERAGE   leverage policy bounds (default 3 / 150)");
}
