// File: crates/metrics-chart/src/theme.rs
// Summary: Chart colors and the categorical series palette.

use skia_safe as skia;

/// Categorical colors used for series.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub blue: skia::Color,
    pub green: skia::Color,
    pub red: skia::Color,
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_fill: skia::Color,
    pub legend_border: skia::Color,
    pub palette: Palette,
}

impl Theme {
    /// White paper style for figures meant to be printed or embedded.
    pub fn light() -> Self {
        Self {
            background: skia::Color::WHITE,
            grid: skia::Color::from_argb(255, 235, 235, 235),
            axis_line: skia::Color::BLACK,
            axis_label: skia::Color::BLACK,
            tick: skia::Color::BLACK,
            title: skia::Color::BLACK,
            legend_fill: skia::Color::from_argb(204, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 204, 204, 204),
            palette: Palette {
                blue: skia::Color::from_argb(255, 0x1f, 0x77, 0xb4),
                green: skia::Color::from_argb(255, 0x2c, 0xa0, 0x2c),
                red: skia::Color::from_argb(255, 0xd6, 0x27, 0x28),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}
