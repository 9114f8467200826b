use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tangent_frame::basis::{basis_exact, basis_fast};
use tangent_frame::hash::hash_u32;
use tangent_frame::random::pseudo_random_f32;
use tangent_frame::vec3::{normalize, scale};

fn bench_basis_paths(c: &mut Criterion) {
    let scramble = hash_u32(0);
    let draw = |k: u32| pseudo_random_f32(k, scramble) - 0.5;

    let n = normalize([draw(0), draw(1), draw(2)]);
    let v = scale([draw(3), draw(4), draw(5)], 23.0);

    c.bench_function("basis_exact", |b| {
        b.iter(|| basis_exact(black_box(n), black_box(v)))
    });

    c.bench_function("basis_fast", |b| {
        b.iter(|| basis_fast(black_box(n), black_box(v)))
    });
}

criterion_group!(benches, bench_basis_paths);
criterion_main!(benches);
