// File: crates/cache-plot/src/lib.rs
// Summary: Cache associativity dataset and the chart built from it.

pub mod dataset;
pub mod renderer;

pub use dataset::{ConfigurationPoint, CONFIGURATIONS, TOTAL_CAPACITY};
pub use renderer::{build, render};

/// File written to the working directory.
pub const OUTPUT_PATH: &str = "cache_associativity_metrics.png";
/// Output resolution.
pub const OUTPUT_DPI: f32 = 300.0;
