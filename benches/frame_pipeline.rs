use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ascii_cube::core::{EulerRotation, FrameBuffer, Scene, Vec3};
use ascii_cube::term::encode_rows_into;
use ascii_cube::types::RenderConfig;

fn bench_render_orthographic(c: &mut Criterion) {
    let config = RenderConfig::orthographic();
    let scene = Scene::from_config(&config);
    let mut fb = FrameBuffer::new(config.width, config.height);

    c.bench_function("render_frame_orthographic", |b| {
        b.iter(|| {
            scene.render_into(black_box(0.73), &mut fb);
        })
    });
}

fn bench_render_perspective(c: &mut Criterion) {
    let config = RenderConfig::perspective();
    let scene = Scene::from_config(&config);
    let mut fb = FrameBuffer::new(config.width, config.height);

    c.bench_function("render_frame_perspective", |b| {
        b.iter(|| {
            scene.render_into(black_box(0.73), &mut fb);
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let rotation = EulerRotation::new(0.73);

    c.bench_function("euler_rotate_point", |b| {
        b.iter(|| rotation.apply(black_box(Vec3::new(0.5, -0.25, 0.5))))
    });
}

fn bench_encode(c: &mut Criterion) {
    let config = RenderConfig::orthographic();
    let scene = Scene::from_config(&config);
    let mut fb = FrameBuffer::new(config.width, config.height);
    scene.render_into(0.73, &mut fb);
    let mut out = Vec::with_capacity(64 * 1024);

    c.bench_function("encode_rows", |b| {
        b.iter(|| {
            out.clear();
            encode_rows_into(black_box(&fb), &mut out).unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_render_orthographic,
    bench_render_perspective,
    bench_rotate,
    bench_encode
);
criterion_main!(benches);
