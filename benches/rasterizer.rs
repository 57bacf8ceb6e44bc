use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use softgl::prelude::{Color, FrameBuffer, Primitive, Texture, Vec2, Vec3};
use softgl::render::rasterizer::{fill_shaded, fill_wireframe};

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

fn primitive(points: [Vec3; 3]) -> Primitive {
    Primitive {
        vertices: points,
        texcoords: [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.5, 1.0)],
    }
}

fn small_triangle() -> Primitive {
    primitive([
        Vec3::new(100.0, 100.0, 0.0),
        Vec3::new(120.0, 100.0, 0.0),
        Vec3::new(110.0, 120.0, 0.0),
    ])
}

fn medium_triangle() -> Primitive {
    primitive([
        Vec3::new(100.0, 100.0, 0.0),
        Vec3::new(300.0, 100.0, 0.0),
        Vec3::new(200.0, 300.0, 0.0),
    ])
}

fn large_triangle() -> Primitive {
    primitive([
        Vec3::new(50.0, 50.0, 0.0),
        Vec3::new(750.0, 100.0, 0.0),
        Vec3::new(400.0, 550.0, 0.0),
    ])
}

fn flat_red(_uv: Vec2, _texture: Option<&Texture>) -> Color {
    Color::RED
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    for (name, prim) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("shaded", name), &prim, |b, prim| {
            let mut fb = FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT, 0);
            b.iter(|| {
                fb.clear(0);
                fill_shaded(black_box(prim), &mut fb, &flat_red, None);
            });
        });

        group.bench_with_input(BenchmarkId::new("wireframe", name), &prim, |b, prim| {
            let mut fb = FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT, 0);
            let [v0, v1, v2] = prim.vertices;
            let (a, b2, c2) = (
                Vec2::new(v0.x, v0.y),
                Vec2::new(v1.x, v1.y),
                Vec2::new(v2.x, v2.y),
            );
            b.iter(|| {
                fill_wireframe(&mut fb, black_box(a), b2, c2, 0xFFFF_0000);
            });
        });
    }

    group.finish();
}

fn benchmark_many_triangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_triangles");

    // Generate a grid of small triangles
    let triangles: Vec<Primitive> = (0..20)
        .flat_map(|row| {
            (0..20).map(move |col| {
                let x = col as f32 * 40.0;
                let y = row as f32 * 30.0;
                primitive([
                    Vec3::new(x, y, 0.0),
                    Vec3::new(x + 35.0, y, 0.0),
                    Vec3::new(x + 17.5, y + 25.0, 0.0),
                ])
            })
        })
        .collect();

    group.bench_function("shaded_400_triangles", |b| {
        let mut fb = FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT, 0);
        b.iter(|| {
            fb.clear(0);
            for prim in &triangles {
                fill_shaded(black_box(prim), &mut fb, &flat_red, None);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_single_triangle, benchmark_many_triangles);
criterion_main!(benches);
