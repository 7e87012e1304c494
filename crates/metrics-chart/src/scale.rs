// File: crates/metrics-chart/src/scale.rs
// Summary: Linear data-to-pixel transforms for the shared X axis and both Y axes.

use crate::axis::Axis;

/// Maps the data range `[vmin, vmax]` onto the pixel span `[start_px, end_px]`.
/// `start_px` receives `vmin`; an inverted scale swaps the ends.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub start_px: f32,
    pub end_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl LinearScale {
    pub fn new(start_px: f32, end_px: f32, vmin: f64, mut vmax: f64) -> Self {
        if (vmax - vmin).abs() < 1e-12 { vmax = vmin + 1.0; }
        Self { start_px, end_px, vmin, vmax }
    }

    /// Horizontal scale over `[left, right]` honoring axis inversion.
    pub fn horizontal(axis: &Axis, left: f32, right: f32) -> Self {
        if axis.inverted {
            Self::new(right, left, axis.min, axis.max)
        } else {
            Self::new(left, right, axis.min, axis.max)
        }
    }

    /// Vertical scale: `min` at the bottom unless the axis is inverted.
    pub fn vertical(axis: &Axis, top: f32, bottom: f32) -> Self {
        if axis.inverted {
            Self::new(top, bottom, axis.min, axis.max)
        } else {
            Self::new(bottom, top, axis.min, axis.max)
        }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.vmin) / (self.vmax - self.vmin);
        self.start_px + (t as f32) * (self.end_px - self.start_px)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let span_px = self.end_px - self.start_px;
        if span_px.abs() < f32::EPSILON {
            return self.vmin;
        }
        self.vmin + ((px - self.start_px) / span_px) as f64 * (self.vmax - self.vmin)
    }
}
