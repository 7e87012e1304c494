// File: crates/metrics-chart/src/chart.rs
// Summary: Dual-axis chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use std::path::Path;

use log::debug;
use skia_safe as skia;

use crate::axis::{Axis, AxisSide};
use crate::error::{ChartError, Result};
use crate::grid::{format_tick, nice_step, nice_ticks};
use crate::io::{encode_png, write_atomic};
use crate::legend::{draw_legend, LegendPosition};
use crate::marks::{draw_marker, stroke_paint};
use crate::scale::LinearScale;
use crate::series::{minmax, Series};
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, PlotRect, DPI, HEIGHT_IN, POINTS_PER_INCH, WIDTH_IN};

const TITLE_PT: f32 = 12.0;
const LABEL_PT: f32 = 10.0;
const TICK_PT: f32 = 9.0;
const TICK_LEN_PT: f32 = 3.5;
const TICK_PAD_PT: f32 = 3.5;
const FRAME_PT: f32 = 0.8;
const TICK_TARGET: usize = 6;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Figure size in inches.
    pub width_in: f32,
    pub height_in: f32,
    pub dpi: f32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text rendering depends on installed fonts; tests that compare pixels turn it off.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width_in: WIDTH_IN,
            height_in: HEIGHT_IN,
            dpi: DPI,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    pub fn with_dpi(mut self, dpi: f32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Pixels per point at the configured resolution.
    pub fn px_per_pt(&self) -> f32 {
        self.dpi / POINTS_PER_INCH
    }

    /// Surface size in pixels.
    pub fn pixel_size(&self) -> (i32, i32) {
        (
            (self.width_in * self.dpi).round().max(1.0) as i32,
            (self.height_in * self.dpi).round().max(1.0) as i32,
        )
    }

    /// Plotting area inside the insets, in pixels.
    pub fn plot_rect(&self) -> PlotRect {
        let (w, h) = self.pixel_size();
        let k = self.px_per_pt();
        let i = &self.insets;
        PlotRect::from_ltrb(i.left * k, i.top * k, w as f32 - i.right * k, h as f32 - i.bottom * k)
    }
}

/// Line chart with one shared X axis and two independent Y scales.
#[derive(Clone, Debug)]
pub struct DualAxisChart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub y2_axis: Axis,
    pub primary_legend: LegendPosition,
    pub secondary_legend: LegendPosition,
}

impl DualAxisChart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            y2_axis: Axis::default_y(),
            primary_legend: LegendPosition::UpperLeft,
            secondary_legend: LegendPosition::UpperRight,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn series_on(&self, side: AxisSide) -> impl Iterator<Item = &Series> {
        self.series.iter().filter(move |s| s.side == side)
    }

    /// Fit X to every series and each Y axis to the series bound to it.
    /// Labels, colors and inversion are kept.
    pub fn autoscale_axes(&mut self, margin: f64) {
        if let Some((lo, hi)) = minmax(self.series.iter().flat_map(|s| s.x_range()).flat_map(|(a, b)| [a, b])) {
            self.x_axis.fit(lo, hi, margin);
        }
        if let Some((lo, hi)) = self.y_range(AxisSide::Primary) {
            self.y_axis.fit(lo, hi, margin);
        }
        if let Some((lo, hi)) = self.y_range(AxisSide::Secondary) {
            self.y2_axis.fit(lo, hi, margin);
        }
    }

    fn y_range(&self, side: AxisSide) -> Option<(f64, f64)> {
        minmax(self.series_on(side).flat_map(|s| s.y_range()).flat_map(|(a, b)| [a, b]))
    }

    fn axis_for(&self, side: AxisSide) -> &Axis {
        match side {
            AxisSide::Primary => &self.y_axis,
            AxisSide::Secondary => &self.y2_axis,
        }
    }

    /// Render the chart and return the encoded PNG, tagged with `opts.dpi`.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        encode_png(&pixels, w, h, opts.dpi)
    }

    /// Render the chart to a PNG at `output_png_path`, replacing any existing file.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_atomic(output_png_path.as_ref(), &bytes)
    }

    /// Render into an unpremultiplied RGBA8 buffer: (pixels, width, height, row stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let (w, h) = opts.pixel_size();
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let (w, h) = opts.pixel_size();
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or(ChartError::Surface(w, h))?;
        debug!("rendering '{}' on {}x{} surface at {} dpi", self.title, w, h, opts.dpi);

        let canvas = surface.canvas();
        let theme = &opts.theme;
        let k = opts.px_per_pt();
        let plot = opts.plot_rect();
        let shaper = TextShaper::new();

        canvas.clear(theme.background);

        let x_scale = LinearScale::horizontal(&self.x_axis, plot.left, plot.right);
        let y_scale = LinearScale::vertical(&self.y_axis, plot.top, plot.bottom);
        let y2_scale = LinearScale::vertical(&self.y2_axis, plot.top, plot.bottom);

        draw_grid(canvas, theme, &plot, &self.x_axis, &x_scale, &self.y_axis, &y_scale, k);

        // Series, clipped to the plot area
        canvas.save();
        canvas.clip_rect(
            skia::Rect::from_ltrb(plot.left, plot.top, plot.right, plot.bottom),
            skia::ClipOp::Intersect,
            true,
        );
        for s in &self.series {
            let ys = match s.side {
                AxisSide::Primary => &y_scale,
                AxisSide::Secondary => &y2_scale,
            };
            draw_line_series(canvas, &x_scale, ys, s, k);
        }
        canvas.restore();

        draw_frame(canvas, theme, &plot, k);
        draw_x_ticks(canvas, &shaper, opts, &plot, &self.x_axis, &x_scale);
        draw_y_ticks(canvas, &shaper, opts, &plot, &self.y_axis, &y_scale, AxisSide::Primary);
        draw_y_ticks(canvas, &shaper, opts, &plot, &self.y2_axis, &y2_scale, AxisSide::Secondary);

        if opts.draw_labels {
            draw_titles(canvas, &shaper, opts, &plot, self);
        }

        let primary: Vec<&Series> = self.series_on(AxisSide::Primary).collect();
        let secondary: Vec<&Series> = self.series_on(AxisSide::Secondary).collect();
        draw_legend(canvas, &shaper, theme, &primary, &plot, self.primary_legend, k, opts.draw_labels);
        draw_legend(canvas, &shaper, theme, &secondary, &plot, self.secondary_legend, k, opts.draw_labels);

        Ok(surface)
    }
}

// ---- helpers ----------------------------------------------------------------

#[allow(clippy::too_many_arguments)]
fn draw_grid(
    canvas: &skia::Canvas,
    theme: &Theme,
    plot: &PlotRect,
    x_axis: &Axis,
    x_scale: &LinearScale,
    y_axis: &Axis,
    y_scale: &LinearScale,
    k: f32,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(0.5 * k);

    // verticals
    for x in nice_ticks(x_axis.min, x_axis.max, TICK_TARGET) {
        let px = x_scale.to_px(x);
        canvas.draw_line((px, plot.top), (px, plot.bottom), &paint);
    }
    // horizontals follow the primary axis
    for y in nice_ticks(y_axis.min, y_axis.max, TICK_TARGET) {
        let py = y_scale.to_px(y);
        canvas.draw_line((plot.left, py), (plot.right, py), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, theme: &Theme, plot: &PlotRect, k: f32) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_style(skia::paint::Style::Stroke);
    axis_paint.set_stroke_width(FRAME_PT * k);
    canvas.draw_rect(
        skia::Rect::from_ltrb(plot.left, plot.top, plot.right, plot.bottom),
        &axis_paint,
    );
}

fn tick_paint(theme: &Theme, k: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.tick);
    paint.set_anti_alias(true);
    paint.set_stroke_width(FRAME_PT * k);
    paint
}

fn draw_x_ticks(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    opts: &RenderOptions,
    plot: &PlotRect,
    axis: &Axis,
    scale: &LinearScale,
) {
    let k = opts.px_per_pt();
    let paint = tick_paint(&opts.theme, k);
    let step = nice_step(axis.min, axis.max, TICK_TARGET);
    for x in nice_ticks(axis.min, axis.max, TICK_TARGET) {
        let px = scale.to_px(x);
        canvas.draw_line((px, plot.bottom), (px, plot.bottom + TICK_LEN_PT * k), &paint);
        if opts.draw_labels {
            let y = plot.bottom + (TICK_LEN_PT + TICK_PAD_PT + TICK_PT * 0.6) * k;
            shaper.draw(canvas, &format_tick(x, step), px, y, TICK_PT * k, opts.theme.tick, Anchor::Center);
        }
    }
}

fn draw_y_ticks(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    opts: &RenderOptions,
    plot: &PlotRect,
    axis: &Axis,
    scale: &LinearScale,
    side: AxisSide,
) {
    let k = opts.px_per_pt();
    let paint = tick_paint(&opts.theme, k);
    let step = nice_step(axis.min, axis.max, TICK_TARGET);
    let (edge, dir, anchor) = match side {
        AxisSide::Primary => (plot.left, -1.0, Anchor::Right),
        AxisSide::Secondary => (plot.right, 1.0, Anchor::Left),
    };
    for y in nice_ticks(axis.min, axis.max, TICK_TARGET) {
        let py = scale.to_px(y);
        canvas.draw_line((edge, py), (edge + dir * TICK_LEN_PT * k, py), &paint);
        if opts.draw_labels {
            let x = edge + dir * (TICK_LEN_PT + TICK_PAD_PT) * k;
            shaper.draw(canvas, &format_tick(y, step), x, py, TICK_PT * k, opts.theme.tick, anchor);
        }
    }
}

fn draw_titles(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    opts: &RenderOptions,
    plot: &PlotRect,
    chart: &DualAxisChart,
) {
    let k = opts.px_per_pt();
    let theme = &opts.theme;

    shaper.draw(
        canvas,
        &chart.title,
        plot.center_x(),
        plot.top * 0.5,
        TITLE_PT * k,
        theme.title,
        Anchor::Center,
    );

    let x_label_y = plot.bottom + (TICK_LEN_PT + TICK_PAD_PT + TICK_PT + 4.0 + LABEL_PT * 0.6) * k;
    shaper.draw(
        canvas,
        &chart.x_axis.label,
        plot.center_x(),
        x_label_y,
        LABEL_PT * k,
        chart.x_axis.label_color.unwrap_or(theme.axis_label),
        Anchor::Center,
    );

    for side in [AxisSide::Primary, AxisSide::Secondary] {
        let axis = chart.axis_for(side);
        if axis.label.is_empty() {
            continue;
        }
        let step = nice_step(axis.min, axis.max, TICK_TARGET);
        let tick_w = nice_ticks(axis.min, axis.max, TICK_TARGET)
            .into_iter()
            .map(|v| shaper.measure_width(&format_tick(v, step), TICK_PT * k))
            .fold(0.0f32, f32::max);
        let offset = (TICK_LEN_PT + TICK_PAD_PT + 4.0 + LABEL_PT * 0.6) * k + tick_w;
        let cx = match side {
            AxisSide::Primary => plot.left - offset,
            AxisSide::Secondary => plot.right + offset,
        };
        shaper.draw_vertical(
            canvas,
            &axis.label,
            cx,
            plot.center_y(),
            LABEL_PT * k,
            axis.label_color.unwrap_or(theme.axis_label),
        );
    }
}

fn draw_line_series(
    canvas: &skia::Canvas,
    x_scale: &LinearScale,
    y_scale: &LinearScale,
    series: &Series,
    k: f32,
) {
    let data = &series.data_xy;
    if data.is_empty() {
        return;
    }

    if data.len() >= 2 {
        let mut path = skia::Path::new();
        let (x0, y0) = data[0];
        path.move_to((x_scale.to_px(x0), y_scale.to_px(y0)));
        for &(x, y) in data.iter().skip(1) {
            path.line_to((x_scale.to_px(x), y_scale.to_px(y)));
        }
        canvas.draw_path(&path, &stroke_paint(&series.style, k));
    }

    for &(x, y) in data {
        draw_marker(canvas, &series.style, x_scale.to_px(x), y_scale.to_px(y), k);
    }
}
