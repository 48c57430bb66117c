use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use projectile_motion::curves::{cartesian_circle, cartesian_parabola, parametric_circle};
use projectile_motion::integration::{advance_analytical, advance_numerical};
use projectile_motion::models::{ProjectileState, Vec2};

pub fn bench_circles(c: &mut Criterion) {
    let mut group = c.benchmark_group("marker_circle");
    group.measurement_time(std::time::Duration::from_secs(5));
    group.sample_size(100);
    let center = Vec2::new(0.4, 0.2);

    for segments in [8usize, 64, 1024] {
        group.bench_with_input(BenchmarkId::new("parametric", segments), &segments, |b, &segments| {
            b.iter(|| parametric_circle(black_box(center), 0.1, segments))
        });
        group.bench_with_input(BenchmarkId::new("cartesian", segments), &segments, |b, &segments| {
            b.iter(|| cartesian_circle(black_box(center), 0.1, segments))
        });
    }
    group.finish();
}

pub fn bench_parabola(c: &mut Criterion) {
    let state = ProjectileState::default();
    c.bench_function("cartesian_parabola_1024", |b| {
        b.iter(|| cartesian_parabola(black_box(&state), -9.8, 1024))
    });
}

pub fn bench_integrators(c: &mut Criterion) {
    let mut group = c.benchmark_group("integrators");
    let dt = 1.0 / 60.0;

    group.bench_function("analytical_flight", |b| b.iter(|| {
        let mut state = ProjectileState::default();
        for i in 0..25 {
            advance_analytical(&mut state, black_box(i as f64 * dt), -9.8);
        }
        state
    }));

    group.bench_function("euler_flight", |b| b.iter(|| {
        let mut state = ProjectileState::default();
        for _ in 0..25 {
            advance_numerical(&mut state, black_box(dt), -9.8, 0.0);
        }
        state
    }));
    group.finish();
}

criterion_group!(benches, bench_circles, bench_parabola, bench_integrators);
criterion_main!(benches);
