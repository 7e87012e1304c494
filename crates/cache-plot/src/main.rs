// File: crates/cache-plot/src/main.rs
// Summary: Renders mean/median/stddev per cache associativity configuration to a PNG.

use anyhow::{Context, Result};
use cache_plot::{dataset, OUTPUT_DPI, OUTPUT_PATH};
use log::{error, info, LevelFilter};

fn main() -> Result<()> {
    env_logger::Builder::new().filter_level(LevelFilter::Info).init();

    info!("plotting {} configurations", dataset::CONFIGURATIONS.len());

    let chart = cache_plot::build(
        &dataset::n_values(),
        &dataset::mean_values(),
        &dataset::median_values(),
        &dataset::stddev_values(),
    )
    .context("failed to build chart")?;

    cache_plot::render(&chart, OUTPUT_PATH, OUTPUT_DPI)
        .inspect_err(|e| error!("rendering {OUTPUT_PATH} failed: {e}"))
        .with_context(|| format!("failed to write '{OUTPUT_PATH}'"))?;

    Ok(())
}
