use anyhow::{Context, Result};
use crypto_forecast::config::DEMO;
use crypto_forecast::data::{SyntheticProvider, write_frame};
use crypto_forecast::utils::today_local;
use std::path::PathBuf;

// Writes one multi-row-header CSV per demo symbol, ending today, for use with --data-dir.
fn main() -> Result<()> {
    // 1. Setup Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 2. Output directory (first arg, default ./data)
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let as_of = today_local();
    let provider = SyntheticProvider::new(as_of, DEMO.bar_count).with_nested_columns();

    log::info!(
        "🚀 Writing {} demo bars per symbol ending {} to {}",
        DEMO.bar_count,
        as_of,
        out_dir.display()
    );

    // 3. Generate and save
    for series in DEMO.series {
        let ticker = series.symbol.ticker();
        let frame = provider.generate(series.symbol)?;
        let path = out_dir.join(format!("{}.csv", ticker));
        write_frame(&path, &frame, ticker)?;
        log::info!("   {} rows -> {}", frame.row_count(), path.display());
    }

    log::info!("✅ Success!");
    Ok(())
}
