// File: crates/metrics-chart/src/axis.rs
// Summary: Axis model with labels, ranges and orientation.

use skia_safe as skia;

/// Which of the two y-scales a series is plotted against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisSide {
    Primary,
    Secondary,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    /// Draw `max` at the start of the axis instead of `min`.
    pub inverted: bool,
    /// Overrides the theme label color when set.
    pub label_color: Option<skia::Color>,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, inverted: false, label_color: None }
    }

    /// Axis spanning `[lo, hi]` padded by `margin` (fraction of the span) on both sides.
    /// A degenerate span is widened to 1.0 around `lo`.
    pub fn covering(label: impl Into<String>, lo: f64, hi: f64, margin: f64) -> Self {
        let (lo, hi) = padded(lo, hi, margin);
        Self::new(label, lo, hi)
    }

    pub fn inverted(mut self) -> Self {
        self.inverted = true;
        self
    }

    pub fn with_label_color(mut self, color: skia::Color) -> Self {
        self.label_color = Some(color);
        self
    }

    /// Reset the range to cover `[lo, hi]`, keeping label and orientation.
    pub fn fit(&mut self, lo: f64, hi: f64, margin: f64) {
        let (lo, hi) = padded(lo, hi, margin);
        self.min = lo;
        self.max = hi;
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    pub fn default_x() -> Self {
        Self::new("X", 0.0, 1.0)
    }

    pub fn default_y() -> Self {
        Self::new("Y", 0.0, 1.0)
    }
}

fn padded(mut lo: f64, mut hi: f64, margin: f64) -> (f64, f64) {
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    if hi < lo {
        std::mem::swap(&mut lo, &mut hi);
    }
    if (hi - lo).abs() < 1e-12 {
        return (lo - 0.5, lo + 0.5);
    }
    let pad = (hi - lo) * margin.max(0.0);
    (lo - pad, hi + pad)
}
