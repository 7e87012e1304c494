// File: crates/metrics-chart/src/series.rs
// Summary: Line series model with dash/marker styling and axis binding.

use skia_safe as skia;

use crate::axis::AxisSide;
use crate::error::{ChartError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dash {
    Solid,
    Dashed,
    DashDot,
}

impl Dash {
    /// On/off intervals in points, or `None` for a continuous stroke.
    pub fn intervals_pt(&self) -> Option<&'static [f32]> {
        match self {
            Dash::Solid => None,
            Dash::Dashed => Some(&[3.7, 1.6]),
            Dash::DashDot => Some(&[6.4, 1.6, 1.0, 1.6]),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    None,
    Circle,
    Square,
    Diamond,
}

#[derive(Clone, Copy, Debug)]
pub struct LineStyle {
    pub color: skia::Color,
    pub dash: Dash,
    pub marker: Marker,
    /// Stroke width in points.
    pub width_pt: f32,
    /// Marker extent in points.
    pub marker_pt: f32,
}

impl LineStyle {
    pub fn new(color: skia::Color, dash: Dash, marker: Marker) -> Self {
        Self { color, dash, marker, width_pt: 1.5, marker_pt: 6.0 }
    }
}

#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    pub data_xy: Vec<(f64, f64)>,
    pub style: LineStyle,
    pub side: AxisSide,
}

impl Series {
    pub fn new(label: impl Into<String>, data_xy: Vec<(f64, f64)>, style: LineStyle) -> Self {
        Self { label: label.into(), data_xy, style, side: AxisSide::Primary }
    }

    /// Pair `xs` with `ys` index by index.
    /// Contract: both slices are non-empty, of equal length and finite, and `xs` holds no repeats.
    pub fn try_from_columns(
        label: impl Into<String>,
        xs: &[f64],
        ys: &[f64],
        style: LineStyle,
    ) -> Result<Self> {
        let label = label.into();
        if ys.is_empty() {
            return Err(ChartError::Empty(label));
        }
        if xs.len() != ys.len() {
            return Err(ChartError::LengthMismatch { label, expected: xs.len(), got: ys.len() });
        }
        if let Some(index) = xs.iter().chain(ys).position(|v| !v.is_finite()) {
            return Err(ChartError::NonFinite { label, index: index % xs.len() });
        }
        let mut sorted = xs.to_vec();
        sorted.sort_by(f64::total_cmp);
        if let Some(w) = sorted.windows(2).find(|w| w[0] == w[1]) {
            return Err(ChartError::DuplicateX(w[0]));
        }
        let data = xs.iter().copied().zip(ys.iter().copied()).collect();
        Ok(Self::new(label, data, style))
    }

    pub fn on_secondary(mut self) -> Self {
        self.side = AxisSide::Secondary;
        self
    }

    /// (min, max) over x, or `None` for an empty series.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        minmax(self.data_xy.iter().map(|&(x, _)| x))
    }

    /// (min, max) over y, or `None` for an empty series.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        minmax(self.data_xy.iter().map(|&(_, y)| y))
    }
}

pub(crate) fn minmax(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
