// File: crates/metrics-chart/src/types.rs
// Summary: Shared types and constants (figure size, resolution, margins).

/// Default figure width in inches.
pub const WIDTH_IN: f32 = 8.0;
/// Default figure height in inches.
pub const HEIGHT_IN: f32 = 5.0;
/// Default resolution in dots per inch.
pub const DPI: f32 = 100.0;
/// Points per inch; font sizes, strokes and margins are given in points.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Plot margins, in points.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        // room for tick labels and a rotated axis label on both sides
        Self::new(58.0, 58.0, 30.0, 44.0)
    }
}

/// Pixel rectangle of the plotting area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn center_x(&self) -> f32 { (self.left + self.right) * 0.5 }
    pub fn center_y(&self) -> f32 { (self.top + self.bottom) * 0.5 }
}
