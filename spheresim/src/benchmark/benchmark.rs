use std::time::Instant;

use crate::simulation::params::Parameters;
use crate::simulation::spawn::Spawner;
use crate::simulation::system::ParticleSystem;

/// Build a system of `n` seeded random particles with default parameters
fn seeded_system(n: usize) -> ParticleSystem {
    let mut system = ParticleSystem::with_parameters(&Parameters::default());
    let mut spawner = Spawner::seeded(42);
    for _ in 0..n {
        // default spawn ranges are always valid
        if system.add_random(&mut spawner).is_err() {
            break;
        }
    }
    system
}

/// Time `ParticleSystem::step` for growing particle counts.
/// Per-step cost should grow linearly with N.
pub fn bench_step() {
    let ns = [1_000, 2_000, 4_000, 8_000, 16_000, 32_000, 64_000];
    let steps = 200;
    let dt = 1.0 / 60.0;

    for n in ns {
        let mut system = seeded_system(n);

        // Warm up
        system.step(dt);

        let t0 = Instant::now();
        let mut touched = 0;
        for _ in 0..steps {
            touched += system.step(dt);
        }
        let elapsed = t0.elapsed().as_secs_f64();

        let per_step = elapsed / steps as f64;
        let per_particle_ns = per_step / n as f64 * 1e9;

        println!(
            "N = {n:6}, step = {:10.6} s, per particle = {:7.2} ns, contacts/step = {:8.1}",
            per_step,
            per_particle_ns,
            touched as f64 / steps as f64
        );
    }
}

/// Run one large system for a fixed number of steps and report throughput
/// together with kinetic energy drift (drag and gravity make it non-conserved,
/// but it should stay finite and bounded)
pub fn bench_throughput(n: usize, steps: usize) {
    let mut system = seeded_system(n);
    let dt = 1.0 / 60.0;
    let e0 = system.kinetic_energy();

    let t0 = Instant::now();
    for _ in 0..steps {
        system.step(dt);
    }
    let elapsed = t0.elapsed().as_secs_f64();

    let updates = (n * steps) as f64;
    println!(
        "N = {n}, steps = {steps}, {:.3} s total, {:.2} M particle-updates/s, KE {:.3} -> {:.3}",
        elapsed,
        updates / elapsed / 1e6,
        e0,
        system.kinetic_energy()
    );
}
