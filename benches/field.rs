use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polyfolio::particles::point::{self, spawn_pool, Bounds};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn bench_field(c: &mut Criterion) {
    let mut g = c.benchmark_group("particle_field");

    let bounds = Bounds {
        width: 1920.0,
        height: 1080.0,
    };
    let mut rng = SmallRng::seed_from_u64(7);
    let pool = spawn_pool(&bounds, &mut rng);

    g.bench_function("step_pool", |b| {
        let mut pool = pool.clone();
        b.iter(|| {
            for p in pool.iter_mut() {
                p.step(black_box(&bounds));
            }
        });
    });

    // The one O(n^2) path: every pair, distance + alpha.
    g.bench_function("pairwise_links", |b| {
        b.iter(|| {
            let mut visible = 0u32;
            for (i, a) in pool.iter().enumerate() {
                for other in &pool[i + 1..] {
                    if point::link_alpha(point::distance(a, other)).is_some() {
                        visible += 1;
                    }
                }
            }
            black_box(visible)
        });
    });

    g.finish();
}

criterion_group!(benches, bench_field);
criterion_main!(benches);
