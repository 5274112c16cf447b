//! txn-runner: headless dataset generator for synthtxn.
//!
//! Usage:
//!   txn-runner --seed 12345 --days 90 --per-segment 20 --fraud-rate 0.1 --out dataset.csv
//!   txn-runner --segments segments.json --start-date 2024-01-01 --out dataset.csv
//!
//! The segments file, when given, is a column-oriented JSON object with
//! the six parallel arrays the catalog expects; without it the built-in
//! five spending bands are used.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::env;
use synthtxn_core::{generate_dataset, DatasetConfig, SegmentCatalog, SegmentColumns};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let days = parse_arg(&args, "--days", 30u32);
    let per_segment = parse_arg(&args, "--per-segment", 10usize);
    let fraud_rate = parse_arg(&args, "--fraud-rate", 0.05f64);
    let start_date = args
        .windows(2)
        .find(|w| w[0] == "--start-date")
        .map(|w| w[1].as_str())
        .unwrap_or("2024-01-01");
    let segments_path = args
        .windows(2)
        .find(|w| w[0] == "--segments")
        .map(|w| w[1].as_str());
    let out = args
        .windows(2)
        .find(|w| w[0] == "--out")
        .map(|w| w[1].as_str())
        .unwrap_or("dataset.csv");

    println!("synthtxn — txn-runner");
    println!("  seed:        {seed}");
    println!("  start date:  {start_date}");
    println!("  days:        {days}");
    println!("  per segment: {per_segment}");
    println!("  fraud rate:  {fraud_rate}");
    println!("  out:         {out}");
    println!();

    let start_date: NaiveDate = start_date
        .parse()
        .with_context(|| format!("invalid --start-date '{start_date}', expected YYYY-MM-DD"))?;

    let catalog = match segments_path {
        Some(path) => {
            let content =
                std::fs::read_to_string(path).with_context(|| format!("Cannot read {path}"))?;
            let value: serde_json::Value = serde_json::from_str(&content)?;
            SegmentCatalog::from_value(&value)?
        }
        None => SegmentCatalog::from_columns(&SegmentColumns::default())?,
    };

    let config = DatasetConfig {
        customers_per_segment: per_segment,
        start_date,
        num_days: days,
        fraud_rate,
    };
    let dataset = generate_dataset(&catalog, &config, seed)?;

    let mut writer = csv::Writer::from_path(out).with_context(|| format!("Cannot write {out}"))?;
    for txn in &dataset.transactions {
        writer.serialize(txn)?;
    }
    writer.flush()?;

    println!("=== RUN SUMMARY ===");
    println!("  segments:       {}", catalog.len());
    println!("  customers:      {}", dataset.customer_count);
    println!("  transactions:   {}", dataset.transactions.len());
    println!("  fraud episodes: {}", dataset.fraud_episode_count);
    println!("  fraud txns:     {}", dataset.fraud_txn_count());
    println!("  written to:     {out}");
    Ok(())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
