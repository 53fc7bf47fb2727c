//! Prints a Wilson interval and how it tightens as the same proportion is
//! observed over more trials.
//!
//! ```text
//! cargo run --example wilson_report -- 73 76 0.95
//! RUST_LOG=debug cargo run --example wilson_report -- 0 20
//! ```

use anyhow::{bail, Context, Result};
use proportion_stats::{compute_wilson_interval, wilson_scaled_series};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 || args.len() > 3 {
        bail!("usage: wilson_report <successes> <trials> [confidence_level]");
    }

    let successes: i64 = args[0]
        .parse()
        .with_context(|| format!("successes must be an integer, got {:?}", args[0]))?;
    let trials: i64 = args[1]
        .parse()
        .with_context(|| format!("trials must be an integer, got {:?}", args[1]))?;
    let confidence_level: f64 = match args.get(2) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("confidence level must be a number, got {raw:?}"))?,
        None => 0.95,
    };

    let result = compute_wilson_interval(successes, trials, confidence_level)?;
    info!(successes, trials, confidence_level, "computed Wilson interval");

    println!("=== Wilson score interval ===\n");
    println!(
        "{} successes out of {} trials: proportion {:.6}",
        result.successes, result.trials, result.proportion
    );
    println!(
        "{:.1}% confidence interval: [{:.6}, {:.6}]\n",
        result.confidence_level * 100.0,
        result.lower_bound,
        result.upper_bound
    );

    println!("=== Same proportion, more trials ===\n");
    println!("{:>6} {:>12} {:>12} {:>10} {:>10} {:>10}", "scale", "successes", "trials", "lower", "upper", "width");
    for entry in wilson_scaled_series(result.successes, result.trials, confidence_level)? {
        let r = entry.result;
        println!(
            "{:>5}x {:>12} {:>12} {:>10.6} {:>10.6} {:>10.6}",
            entry.factor,
            r.successes,
            r.trials,
            r.lower_bound,
            r.upper_bound,
            r.width()
        );
    }

    Ok(())
}
