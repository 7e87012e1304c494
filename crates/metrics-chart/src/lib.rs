// File: crates/metrics-chart/src/lib.rs
// Summary: Library entry point; exports the dual-axis chart API and headless rendering.

pub mod axis;
pub mod chart;
pub mod error;
pub mod grid;
pub mod io;
pub mod legend;
mod marks;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::{Axis, AxisSide};
pub use chart::{DualAxisChart, RenderOptions};
pub use error::ChartError;
pub use legend::LegendPosition;
pub use series::{Dash, LineStyle, Marker, Series};
pub use text::TextShaper;
pub use theme::Theme;
