//! Benchmarks one full animation tick (simulate + rasterize) at a typical
//! live-particle load.

use criterion::{criterion_group, criterion_main, Criterion};
use glam::Vec2;
use skyburst::{Canvas, ChargeConfig, World};

fn populated_world() -> World {
    let mut world = World::with_seed(1200.0, 900.0, 42);
    let mut canvas = Canvas::default();

    // Ten bursts of ~60 particles each, already exploded.
    for i in 0..10 {
        world.spawn_charge(
            ChargeConfig::new(Vec2::new(150.0 + 100.0 * i as f32, 850.0))
                .count(60.0)
                .explosion_y(840.0)
                // effectively immortal so the load stays constant across iterations
                .particle_max_life_frames(1_000_000),
        );
    }
    for _ in 0..5 {
        world.frame(&mut canvas);
    }
    world
}

fn bench_frame(c: &mut Criterion) {
    let mut world = populated_world();
    let mut canvas = Canvas::default();

    c.bench_function("world_frame_600_particles", |b| {
        b.iter(|| world.frame(&mut canvas));
    });
}

fn bench_explosion(c: &mut Criterion) {
    c.bench_function("spawn_and_burst", |b| {
        b.iter(|| {
            let mut world = World::with_seed(1200.0, 900.0, 7);
            let mut canvas = Canvas::new(64, 64);
            world.spawn_charge(
                ChargeConfig::new(Vec2::new(600.0, 850.0))
                    .count(120.0)
                    .explosion_y(f32::INFINITY),
            );
            world.frame(&mut canvas);
            world.particles().len()
        });
    });
}

criterion_group!(benches, bench_frame, bench_explosion);
criterion_main!(benches);
