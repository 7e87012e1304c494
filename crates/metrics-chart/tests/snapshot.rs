// File: crates/metrics-chart/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow, plus render determinism.
// Behavior:
// - Renders a deterministic small dual-axis chart to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use metrics_chart::{Axis, Dash, DualAxisChart, LineStyle, Marker, RenderOptions, Series, Theme};

fn render_bytes() -> Vec<u8> {
    let palette = Theme::light().palette;
    let mut chart = DualAxisChart::new("golden");
    chart.x_axis = Axis::new("X", 0.0, 4.0).inverted();
    chart.add_series(Series::new(
        "a",
        vec![(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (3.0, 1.5), (4.0, 1.0)],
        LineStyle::new(palette.blue, Dash::Solid, Marker::Circle),
    ));
    chart.add_series(Series::new(
        "b",
        vec![(0.0, 0.5), (2.0, 1.2), (4.0, 0.4)],
        LineStyle::new(palette.green, Dash::Dashed, Marker::Square),
    ));
    chart.add_series(
        Series::new(
            "c",
            vec![(0.0, 2.0), (2.0, 1.0), (4.0, 0.0)],
            LineStyle::new(palette.red, Dash::DashDot, Marker::Diamond),
        )
        .on_secondary(),
    );
    chart.autoscale_axes(0.05);

    let mut opts = RenderOptions::default().with_dpi(60.0);
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    chart.render_to_png_bytes(&opts).expect("render bytes")
}

#[test]
fn golden_dual_axis_chart() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("dual_axis_chart.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}

#[test]
fn rendering_is_repeatable() {
    let first = image::load_from_memory(&render_bytes()).expect("decode first").to_rgba8();
    let second = image::load_from_memory(&render_bytes()).expect("decode second").to_rgba8();
    assert_eq!(first.as_raw(), second.as_raw());
}
