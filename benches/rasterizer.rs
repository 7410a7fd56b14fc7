use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scanlab::clipper::{clip_polygon, clip_segment, ClipAlgorithm};
use scanlab::colors;
use scanlab::geometry::{ClipWindow, Pixel, Point, Segment};
use scanlab::raster::{rasterize_circle, rasterize_ellipse, rasterize_line, LineAlgorithm};
use scanlab::render::Canvas;

const CANVAS_WIDTH: u32 = 800;
const CANVAS_HEIGHT: u32 = 600;

fn demo_lines() -> [(&'static str, Point, Point); 3] {
    [
        ("shallow", Point::new(50.0, 50.0), Point::new(600.0, 150.0)),
        ("steep", Point::new(50.0, 50.0), Point::new(150.0, 350.0)),
        ("diagonal", Point::new(100.0, 100.0), Point::new(500.0, 500.0)),
    ]
}

fn benchmark_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("lines");

    for (name, p1, p2) in demo_lines() {
        for algorithm in [LineAlgorithm::Bresenham, LineAlgorithm::Dda] {
            group.bench_with_input(
                BenchmarkId::new(algorithm.to_string(), name),
                &(p1, p2),
                |b, &(p1, p2)| {
                    b.iter(|| rasterize_line(black_box(p1), black_box(p2), algorithm).count());
                },
            );
        }
    }

    group.finish();
}

fn benchmark_curves(c: &mut Criterion) {
    let mut group = c.benchmark_group("curves");

    for radius in [10u32, 100, 290] {
        group.bench_with_input(BenchmarkId::new("circle", radius), &radius, |b, &r| {
            b.iter(|| rasterize_circle(Pixel::new(400, 300), black_box(r)));
        });
    }

    group.bench_function("ellipse_150x100", |b| {
        b.iter(|| rasterize_ellipse(Point::new(325.0, 200.0), black_box(150.0), black_box(100.0)));
    });

    group.finish();
}

fn benchmark_clipping(c: &mut Criterion) {
    let mut group = c.benchmark_group("clipping");
    let window = ClipWindow::new(100.0, 100.0, 500.0, 400.0).unwrap();

    // A fan of segments from outside the window through its center
    let segments: Vec<Segment> = (0..400)
        .map(|i| {
            let a = i as f64 * std::f64::consts::TAU / 400.0;
            Segment::new(
                Point::new(300.0 + 400.0 * a.cos(), 250.0 + 400.0 * a.sin()),
                Point::new(300.0 - 50.0 * a.cos(), 250.0 - 50.0 * a.sin()),
            )
        })
        .collect();

    for algorithm in [ClipAlgorithm::CohenSutherland, ClipAlgorithm::LiangBarsky] {
        group.bench_function(BenchmarkId::new("segments_400", algorithm.to_string()), |b| {
            b.iter(|| {
                segments
                    .iter()
                    .filter_map(|&s| clip_segment(black_box(s), &window, algorithm))
                    .count()
            });
        });
    }

    let star: Vec<Point> = (0..64)
        .map(|i| {
            let a = i as f64 * std::f64::consts::TAU / 64.0;
            let r = if i % 2 == 0 { 300.0 } else { 120.0 };
            Point::new(300.0 + r * a.cos(), 250.0 + r * a.sin())
        })
        .collect();

    group.bench_function("polygon_star_64", |b| {
        b.iter(|| clip_polygon(black_box(&star), &window));
    });

    group.finish();
}

fn benchmark_canvas(c: &mut Criterion) {
    let mut group = c.benchmark_group("canvas");

    group.bench_function("fill_400_triangles", |b| {
        let mut canvas = Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT).unwrap();
        b.iter(|| {
            for row in 0..20 {
                for col in 0..20 {
                    let x = col as f64 * 40.0;
                    let y = row as f64 * 30.0;
                    canvas.fill_triangle(
                        Point::new(x, y),
                        Point::new(x + 35.0, y),
                        Point::new(x + 17.5, y + 25.0),
                        colors::RED,
                    );
                }
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_lines,
    benchmark_curves,
    benchmark_clipping,
    benchmark_canvas
);
criterion_main!(benches);
