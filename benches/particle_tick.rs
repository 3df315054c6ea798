use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use scene_demos::config::EmitterConfig;
use scene_demos::scene::SceneGraph;
use scene_demos::texture::{Texture, TextureSlot};
use scene_demos::ParticleSystem;

fn ready_texture() -> TextureSlot {
    let mut slot = TextureSlot::default();
    slot.set_ready(Texture::new("spark", 32, 32));
    slot
}

/// Emitter warmed up to its steady-state population
fn warmed_up(target: usize) -> (ParticleSystem, SceneGraph) {
    let config = EmitterConfig {
        target_population: target,
        spawn_count: (target / 100).max(2),
        ..EmitterConfig::default()
    };
    let mut scene = SceneGraph::new();
    let mut system = ParticleSystem::with_seed(config, ready_texture(), 0);
    for _ in 0..240 {
        system.step(1.0 / 60.0, Some(Vec3::ZERO), &mut scene);
    }
    (system, scene)
}

/// Benchmark: one steady-state frame (tick + replenish)
fn bench_steady_state_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("particle_step");

    for target in [200, 2_000, 20_000] {
        group.bench_with_input(BenchmarkId::from_parameter(target), &target, |b, &target| {
            let (mut system, mut scene) = warmed_up(target);
            let mut origin = Vec3::ZERO;
            b.iter(|| {
                origin.y += 0.001;
                black_box(system.step(black_box(1.0 / 60.0), Some(origin), &mut scene))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_steady_state_step);
criterion_main!(benches);
