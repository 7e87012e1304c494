// File: crates/cache-plot/src/renderer.rs
// Summary: Composes the dual-axis associativity chart and writes it out as PNG.

use std::path::Path;

use log::{debug, info};
use metrics_chart::error::Result;
use metrics_chart::{Axis, Dash, DualAxisChart, LineStyle, Marker, RenderOptions, Series, Theme};

pub const TITLE: &str = "Cache Performance Metrics vs. Dimensions";
pub const X_LABEL: &str = "Cache n (sets)";
pub const Y_LABEL: &str = "Mean / Median";
pub const Y2_LABEL: &str = "Std Dev";

/// Fraction of the data span left free around each axis.
const AXIS_MARGIN: f64 = 0.05;

/// Compose the chart: mean and median on the left scale, stddev on the right,
/// with set count decreasing from left to right.
pub fn build(
    n_values: &[u32],
    mean_values: &[f64],
    median_values: &[f64],
    stddev_values: &[f64],
) -> Result<DualAxisChart> {
    let theme = Theme::light();
    let palette = theme.palette;
    let xs: Vec<f64> = n_values.iter().map(|&n| f64::from(n)).collect();

    let mean = Series::try_from_columns(
        "Mean",
        &xs,
        mean_values,
        LineStyle::new(palette.blue, Dash::Solid, Marker::Circle),
    )?;
    let median = Series::try_from_columns(
        "Median",
        &xs,
        median_values,
        LineStyle::new(palette.green, Dash::Dashed, Marker::Square),
    )?;
    let stddev = Series::try_from_columns(
        "Std Dev",
        &xs,
        stddev_values,
        LineStyle::new(palette.red, Dash::DashDot, Marker::Diamond),
    )?
    .on_secondary();

    let mut chart = DualAxisChart::new(TITLE);
    chart.x_axis = Axis::new(X_LABEL, 0.0, 1.0).inverted();
    chart.y_axis = Axis::new(Y_LABEL, 0.0, 1.0).with_label_color(theme.axis_label);
    chart.y2_axis = Axis::new(Y2_LABEL, 0.0, 1.0).with_label_color(palette.red);
    chart.add_series(mean);
    chart.add_series(median);
    chart.add_series(stddev);
    chart.autoscale_axes(AXIS_MARGIN);

    debug!(
        "axes: x [{:.3}, {:.3}], y [{:.3}, {:.3}], y2 [{:.3}, {:.3}]",
        chart.x_axis.min,
        chart.x_axis.max,
        chart.y_axis.min,
        chart.y_axis.max,
        chart.y2_axis.min,
        chart.y2_axis.max,
    );
    Ok(chart)
}

/// Write `chart` to `path` as PNG at `dpi`, replacing any existing file.
pub fn render(chart: &DualAxisChart, path: impl AsRef<Path>, dpi: f32) -> Result<()> {
    let path = path.as_ref();
    let opts = RenderOptions::default().with_dpi(dpi);
    let (w, h) = opts.pixel_size();
    info!("rendering {}x{} px at {} dpi", w, h, dpi);
    chart.render_to_png(&opts, path)?;
    info!("generated plot at: {}", path.display());
    Ok(())
}
