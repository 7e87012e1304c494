// File: crates/cache-plot/src/dataset.rs
// Summary: Measured metrics for each cache associativity configuration.

/// Sets × ways, shared by every configuration.
pub const TOTAL_CAPACITY: u32 = 32;

/// One cache shape: `n` sets of `m` ways, with summary statistics of the measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfigurationPoint {
    pub n: u32,
    pub m: u32,
    pub mean: f64,
    pub median: f64,
    pub stddev: f64,
}

const fn point(n: u32, m: u32, mean: f64, median: f64, stddev: f64) -> ConfigurationPoint {
    ConfigurationPoint { n, m, mean, median, stddev }
}

/// Ordered by descending set count; the fully associative cache comes last.
pub const CONFIGURATIONS: [ConfigurationPoint; 6] = [
    point(32, 1, 20.25, 20.0, 1.90984),
    point(16, 2, 23.37, 23.0, 1.79251),
    point(8, 4, 26.48, 26.0, 1.55229),
    point(4, 8, 28.12, 28.0, 1.71044),
    point(2, 16, 29.52, 30.0, 1.55872),
    point(1, 32, 32.0, 32.0, 0.0),
];

pub fn n_values() -> Vec<u32> {
    CONFIGURATIONS.iter().map(|p| p.n).collect()
}

pub fn m_values() -> Vec<u32> {
    CONFIGURATIONS.iter().map(|p| p.m).collect()
}

pub fn mean_values() -> Vec<f64> {
    CONFIGURATIONS.iter().map(|p| p.mean).collect()
}

pub fn median_values() -> Vec<f64> {
    CONFIGURATIONS.iter().map(|p| p.median).collect()
}

pub fn stddev_values() -> Vec<f64> {
    CONFIGURATIONS.iter().map(|p| p.stddev).collect()
}
