// File: crates/metrics-chart/tests/autoscale.rs
// Purpose: Validate per-axis autoscale and axis orientation.

use metrics_chart::scale::LinearScale;
use metrics_chart::{Axis, AxisSide, Dash, DualAxisChart, LineStyle, Marker, Series, Theme};

fn style() -> LineStyle {
    LineStyle::new(Theme::light().palette.blue, Dash::Solid, Marker::None)
}

#[test]
fn autoscale_splits_primary_and_secondary() {
    let mut chart = DualAxisChart::new("t");
    chart.add_series(Series::new("a", vec![(0.0, 20.0), (5.0, 30.0)], style()));
    chart.add_series(Series::new("b", vec![(2.0, 0.0), (8.0, 2.0)], style()).on_secondary());

    chart.autoscale_axes(0.0);

    // X spans both series
    assert!(chart.x_axis.min <= 0.0 + 1e-9);
    assert!(chart.x_axis.max >= 8.0 - 1e-9);

    // Each Y axis only sees its own series
    assert!((chart.y_axis.min - 20.0).abs() < 1e-9);
    assert!((chart.y_axis.max - 30.0).abs() < 1e-9);
    assert!((chart.y2_axis.min - 0.0).abs() < 1e-9);
    assert!((chart.y2_axis.max - 2.0).abs() < 1e-9);

    assert_eq!(chart.series_on(AxisSide::Secondary).count(), 1);
}

#[test]
fn autoscale_keeps_labels_and_inversion() {
    let mut chart = DualAxisChart::new("t");
    chart.x_axis = Axis::new("sets", 0.0, 1.0).inverted();
    chart.add_series(Series::new("a", vec![(1.0, 1.0), (32.0, 3.0)], style()));

    chart.autoscale_axes(0.05);

    assert_eq!(chart.x_axis.label, "sets");
    assert!(chart.x_axis.inverted);
    assert!(chart.x_axis.min < 1.0 && chart.x_axis.max > 32.0);
}

#[test]
fn degenerate_range_is_widened() {
    let mut chart = DualAxisChart::new("t");
    chart.add_series(Series::new("flat", vec![(0.0, 5.0), (1.0, 5.0)], style()));
    chart.autoscale_axes(0.05);
    assert!(chart.y_axis.max - chart.y_axis.min >= 1.0 - 1e-9);
    assert!(chart.y_axis.contains(5.0));
}

#[test]
fn inverted_axis_maps_max_to_the_left() {
    let axis = Axis::new("x", 1.0, 32.0).inverted();
    let scale = LinearScale::horizontal(&axis, 100.0, 500.0);
    assert!((scale.to_px(32.0) - 100.0).abs() < 1e-3);
    assert!((scale.to_px(1.0) - 500.0).abs() < 1e-3);
    assert!(scale.to_px(32.0) < scale.to_px(16.0));
    assert!((scale.from_px(500.0) - 1.0).abs() < 1e-6);
}

#[test]
fn vertical_scale_puts_min_at_bottom() {
    let axis = Axis::new("y", 0.0, 10.0);
    let scale = LinearScale::vertical(&axis, 20.0, 220.0);
    assert!((scale.to_px(0.0) - 220.0).abs() < 1e-3);
    assert!((scale.to_px(10.0) - 20.0).abs() < 1e-3);
}

#[test]
fn covering_pads_both_sides() {
    let axis = Axis::covering("y", 20.0, 32.0, 0.05);
    assert!((axis.min - 19.4).abs() < 1e-9);
    assert!((axis.max - 32.6).abs() < 1e-9);
    assert!(!axis.inverted);
}
