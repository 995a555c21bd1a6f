use approx::assert_abs_diff_eq;
use plotlib::{
    Figure, Samples,
    figure::{self, FIGURE_SIZE, PANEL_COLUMNS, PRIMARY_TITLE, SECONDARY_TITLE},
    sampler::{SAMPLE_COUNT, SCALE_FACTOR},
};

#[test]
fn primary_is_tanh_of_domain() {
    let samples = Samples::generate().unwrap();

    for (&x, &y) in samples.domain().iter().zip(samples.primary().iter()) {
        assert_eq!(y, x.tanh());
        assert!((-1.0..=1.0).contains(&y));
        assert!(y >= 0.0);

        // 大于约 18.7 时 f64 的 tanh 会舍入为 1.0
        if x < 18.0 {
            assert!(y < 1.0);
        }
    }
}

#[test]
fn secondary_is_quarter_of_primary() {
    let samples = Samples::generate().unwrap();

    for (&y, &y2) in samples.primary().iter().zip(samples.secondary().iter()) {
        assert_eq!(y2, y / SCALE_FACTOR);
        assert!((0.0..=0.25).contains(&y2));
    }
}

#[test]
fn endpoints() {
    let samples = Samples::generate().unwrap();
    let last = SAMPLE_COUNT - 1;

    assert_eq!(samples.domain()[0], 0.0);
    assert_eq!(samples.primary()[0], 0.0);
    assert_eq!(samples.secondary()[0], 0.0);

    assert_eq!(samples.domain()[last], 100.0);
    assert_abs_diff_eq!(samples.primary()[last], 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(samples.secondary()[last], 0.25, epsilon = 1e-12);
}

#[test]
fn generation_is_bit_identical() {
    let first = Samples::generate().unwrap();
    let second = Samples::generate().unwrap();

    let bits = |s: &Samples| {
        s.rows()
            .map(|(x, y, y2)| (x.to_bits(), y.to_bits(), y2.to_bits()))
            .collect::<Vec<_>>()
    };

    assert_eq!(bits(&first), bits(&second));
}

#[test]
fn figure_layout() {
    let samples = Samples::generate().unwrap();
    let figure = figure::tanh_figure(&samples).unwrap();

    assert_eq!(figure.size(), FIGURE_SIZE);
    assert_eq!(figure.panels().len(), PANEL_COLUMNS);

    let [primary, secondary, unused] = figure.panels() else {
        panic!("expected 3 panels");
    };

    assert_eq!(primary.title(), Some(PRIMARY_TITLE));
    assert_eq!(primary.lines().len(), 1);
    assert_eq!(primary.lines()[0].points().len(), SAMPLE_COUNT);
    assert_eq!(primary.lines()[0].points()[SAMPLE_COUNT - 1].0, 100.0);

    assert_eq!(secondary.title(), Some(SECONDARY_TITLE));
    assert_eq!(secondary.lines().len(), 1);
    let (x, y2) = secondary.lines()[0].points()[SAMPLE_COUNT - 1];
    assert_eq!(x, 100.0);
    assert_abs_diff_eq!(y2, 0.25, epsilon = 1e-12);

    assert!(unused.is_empty());
    assert!(unused.title().is_none());
}

#[test]
#[ignore = "needs a system sans-serif font"]
fn figure_renders_to_svg() {
    use plotters::prelude::*;

    let samples = Samples::generate().unwrap();
    let figure = figure::tanh_figure(&samples).unwrap();

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, FIGURE_SIZE).into_drawing_area();
        figure.draw(&root).unwrap();
    }

    assert!(svg.contains(PRIMARY_TITLE));
    assert!(svg.contains(SECONDARY_TITLE));
    assert!(svg.contains("<polyline"));
}

fn temp_png(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("plotlib-{}-{name}.png", std::process::id()))
}

// 没有子图就不需要字体，可以直接走 BitMapBackend 写文件
#[test]
fn save_writes_png() {
    let path = temp_png("blank");
    let figure = Figure::subplots(0, FIGURE_SIZE);

    figure.save(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
}

#[test]
#[ignore = "needs a system sans-serif font"]
fn tanh_figure_saves_to_png() {
    let path = temp_png("tanh");
    let samples = Samples::generate().unwrap();
    let figure = figure::tanh_figure(&samples).unwrap();

    figure.save(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
    assert!(bytes.len() > 1024);
}
