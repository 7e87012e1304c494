use anyhow::Result;
use metrics_chart::{Axis, Dash, DualAxisChart, LineStyle, Marker, RenderOptions, Series, Theme};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart_xy(n: usize) -> DualAxisChart {
    let palette = Theme::light().palette;
    let mut ch = DualAxisChart::new("bench");
    let mut primary = Vec::with_capacity(n);
    let mut secondary = Vec::with_capacity(n);
    for i in 0..n {
        let x = i as f64;
        primary.push((x, (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001)));
        secondary.push((x, (i as f64 * 0.02).cos().abs()));
    }
    ch.x_axis = Axis::new("X", 0.0, (n - 1) as f64).inverted();
    ch.add_series(Series::new("a", primary, LineStyle::new(palette.blue, Dash::Solid, Marker::None)));
    ch.add_series(
        Series::new("b", secondary, LineStyle::new(palette.red, Dash::DashDot, Marker::None)).on_secondary(),
    );
    ch.autoscale_axes(0.05);
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[6usize, 10_000usize] {
        group.bench_function(format!("dual_{n}"), |b| {
            let ch = build_chart_xy(n);
            let mut opts = RenderOptions::default();
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
