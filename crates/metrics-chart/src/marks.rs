// File: crates/metrics-chart/src/marks.rs
// Summary: Paint construction and marker glyphs shared by series and legend drawing.

use skia_safe as skia;

use crate::series::{LineStyle, Marker};

/// Stroke paint for a series line; `k` is pixels per point.
pub(crate) fn stroke_paint(style: &LineStyle, k: f32) -> skia::Paint {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(style.width_pt * k);
    stroke.set_stroke_join(skia::paint::Join::Round);
    stroke.set_color(style.color);
    if let Some(intervals) = style.dash.intervals_pt() {
        // dash pattern scales with line width, as in most plotting tools
        let scaled: Vec<f32> = intervals.iter().map(|v| v * style.width_pt * k).collect();
        stroke.set_path_effect(skia::PathEffect::dash(&scaled, 0.0));
    }
    stroke
}

pub(crate) fn draw_marker(canvas: &skia::Canvas, style: &LineStyle, x: f32, y: f32, k: f32) {
    let half = style.marker_pt * k * 0.5;
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(style.color);

    match style.marker {
        Marker::None => {}
        Marker::Circle => {
            canvas.draw_circle((x, y), half, &fill);
        }
        Marker::Square => {
            let rect = skia::Rect::from_ltrb(x - half, y - half, x + half, y + half);
            canvas.draw_rect(rect, &fill);
        }
        Marker::Diamond => {
            // diamonds read smaller than squares of the same extent
            let r = half * 1.2;
            let mut path = skia::Path::new();
            path.move_to((x, y - r));
            path.line_to((x + r * 0.8, y));
            path.line_to((x, y + r));
            path.line_to((x - r * 0.8, y));
            path.close();
            canvas.draw_path(&path, &fill);
        }
    }
}
