use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand::rngs::StdRng;
use boxmd_solver::SimulationParameters;
use boxmd_solver::initializer::initialize_particles;

fn initialize_bench(c: &mut Criterion, particle_count: usize) {
    let parameters = SimulationParameters {
        particle_count,
        box_size: 30.0,
        target_temperature: 1.0,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(0);
    c.bench_function(&format!("random state {} particles", particle_count), |b|
        b.iter(|| initialize_particles(&mut rng, black_box(&parameters))));
}

pub fn initialize_1000_bench(c: &mut Criterion) {
    initialize_bench(c, 1000);
}

pub fn initialize_125000_bench(c: &mut Criterion) {
    initialize_bench(c, 125000);
}

criterion_group!(init_benches, initialize_1000_bench, initialize_125000_bench);
criterion_main!(init_benches);
