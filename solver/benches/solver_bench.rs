use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand::rngs::StdRng;
use boxmd_solver::SimulationParameters;
use boxmd_solver::initializer::initialize_particles;
use boxmd_solver::solver::{ForceEvaluation, Potential, update_force};

pub fn lennard_jones_bench(c: &mut Criterion) {
    let lennard_jones = Potential::default();
    c.bench_function("lennard jones", |b| b.iter(|| lennard_jones.get_force(black_box(1.3))));
}

fn update_force_bench(c: &mut Criterion, particle_count: usize, evaluation: ForceEvaluation) {
    let mut rng = StdRng::seed_from_u64(0);
    let parameters = SimulationParameters {
        particle_count,
        box_size: (particle_count as f64 / 0.8).cbrt(),
        target_temperature: 1.0,
        ..Default::default()
    };
    let state = initialize_particles(&mut rng, &parameters)
        .expect("Can't init particles");
    let potential = Potential::default();
    c.bench_function(&format!("update force {} {:?}", particle_count, evaluation), |b| b.iter(|| {
        update_force(black_box(&state), &potential, evaluation)
    }));
}

pub fn update_force_1000_bench(c: &mut Criterion) {
    update_force_bench(c, 1000, ForceEvaluation::Serial);
    update_force_bench(c, 1000, ForceEvaluation::Parallel);
}

pub fn update_force_8000_bench(c: &mut Criterion) {
    update_force_bench(c, 8000, ForceEvaluation::Parallel);
}

criterion_group!(solver_benches, lennard_jones_bench,
    update_force_1000_bench, update_force_8000_bench);
criterion_main!(solver_benches);
