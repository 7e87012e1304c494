// File: crates/metrics-chart/src/legend.rs
// Summary: Framed legend boxes anchored in a corner of the plot area.

use skia_safe as skia;

use crate::marks::{draw_marker, stroke_paint};
use crate::series::Series;
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::PlotRect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendPosition {
    UpperLeft,
    UpperRight,
}

/// Legend sizes, in points.
const FONT_PT: f32 = 10.0;
const PAD_PT: f32 = 4.0;
const BORDER_PAD_PT: f32 = 5.0;
const HANDLE_PT: f32 = 20.0;
const HANDLE_GAP_PT: f32 = 8.0;
const ROW_PT: f32 = 14.0;

/// Pixel box a legend with `entries` occupies.
pub fn legend_rect(
    shaper: &TextShaper,
    entries: &[&Series],
    plot: &PlotRect,
    position: LegendPosition,
    k: f32,
) -> skia::Rect {
    let text_w = entries
        .iter()
        .map(|s| shaper.measure_width(&s.label, FONT_PT * k))
        .fold(0.0f32, f32::max);
    let w = (2.0 * BORDER_PAD_PT + HANDLE_PT + HANDLE_GAP_PT) * k + text_w;
    let h = (2.0 * BORDER_PAD_PT + ROW_PT * entries.len() as f32) * k;
    let top = plot.top + PAD_PT * k;
    match position {
        LegendPosition::UpperLeft => {
            let left = plot.left + PAD_PT * k;
            skia::Rect::from_ltrb(left, top, left + w, top + h)
        }
        LegendPosition::UpperRight => {
            let right = plot.right - PAD_PT * k;
            skia::Rect::from_ltrb(right - w, top, right, top + h)
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub fn draw_legend(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    theme: &Theme,
    entries: &[&Series],
    plot: &PlotRect,
    position: LegendPosition,
    k: f32,
    draw_labels: bool,
) {
    if entries.is_empty() {
        return;
    }
    let rect = legend_rect(shaper, entries, plot, position, k);
    let corner = 2.0 * k;
    let rrect = skia::RRect::new_rect_xy(rect, corner, corner);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(theme.legend_fill);
    canvas.draw_rrect(rrect, &fill);

    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(0.8 * k);
    border.set_color(theme.legend_border);
    canvas.draw_rrect(rrect, &border);

    for (i, s) in entries.iter().enumerate() {
        let y = rect.top + (BORDER_PAD_PT + ROW_PT * (i as f32 + 0.5)) * k;
        let x0 = rect.left + BORDER_PAD_PT * k;
        let x1 = x0 + HANDLE_PT * k;
        canvas.draw_line((x0, y), (x1, y), &stroke_paint(&s.style, k));
        draw_marker(canvas, &s.style, (x0 + x1) * 0.5, y, k);
        if draw_labels {
            shaper.draw(
                canvas,
                &s.label,
                x1 + HANDLE_GAP_PT * k,
                y,
                FONT_PT * k,
                theme.axis_label,
                Anchor::Left,
            );
        }
    }
}
