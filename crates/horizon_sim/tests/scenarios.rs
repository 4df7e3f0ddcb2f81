use horizon_core::{Particle, ParticleColor, QualityTier, SimConfig};
use horizon_sim::Simulation;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn running(config: SimConfig) -> Simulation {
    let mut sim = Simulation::new(config);
    sim.start();
    sim
}

fn resting_particle(position: [f32; 2]) -> Particle {
    Particle::new(position, [0.0, 0.0], 0.2, 1.0, ParticleColor::Cyan)
}

#[test]
fn steady_load_pushes_to_low_tier() {
    let mut sim = running(SimConfig::default());
    assert_eq!(sim.quality().tier, QualityTier::High);

    for _ in 0..20 {
        sim.tick(30.0);
    }

    assert_eq!(sim.quality().tier, QualityTier::Low);
    assert_eq!(sim.quality().segments, 40);
    assert_eq!(sim.quality().redraw_interval_frames, 600);
    assert_eq!(sim.effective_cap(), 225);
}

#[test]
fn particle_just_inside_horizon_is_absorbed() {
    let mut sim = running(SimConfig::default());
    sim.set_body_position([0.0, 0.0]);
    assert!((sim.body().event_horizon() - 81.0).abs() < 1e-4);

    sim.particles_mut().clear();
    sim.particles_mut().push(resting_particle([80.0, 0.0]));
    sim.tick(17.0);

    assert_eq!(sim.last_step().absorbed, 1);
    assert!(
        sim.particles()
            .iter()
            .all(|p| p.position != [80.0, 0.0])
    );
}

#[test]
fn everything_inside_horizon_is_removed() {
    let mut sim = running(SimConfig::default());
    let center = sim.body().position;
    let horizon = sim.body().event_horizon();
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    sim.particles_mut().clear();
    for _ in 0..250 {
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let r = rng.gen_range(0.0..horizon * 0.99);
        sim.particles_mut()
            .push(resting_particle([center[0] + r * angle.cos(), center[1] + r * angle.sin()]));
    }
    sim.tick(17.0);

    assert_eq!(sim.last_step().absorbed, 250);
}

#[test]
fn population_stays_in_steady_band() {
    let mut sim = running(SimConfig::default());
    let cap = sim.effective_cap() as usize;

    for _ in 0..400 {
        let report = sim.tick(17.0);
        assert!(report.drawn);
        let live = sim.particles().len();
        assert!(live <= cap, "{live} over cap {cap}");
        assert!(live * 5 >= cap * 4, "{live} under 80% of {cap}");
    }
}

#[test]
fn paused_simulation_never_replenishes() {
    let mut sim = Simulation::new(SimConfig::default());
    sim.particles_mut().truncate(10);

    for _ in 0..50 {
        sim.tick(17.0);
    }

    assert_eq!(sim.particles().len(), 10);
    assert_eq!(sim.clock().simulation_time, 0.0);
}

#[test]
fn tier_moves_one_step_at_a_time() {
    let mut sim = running(SimConfig::default());
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut previous = sim.quality().tier.level() as i32;

    for _ in 0..2_000 {
        let frame_ms = if rng.gen_bool(0.5) {
            rng.gen_range(0.1..8.0)
        } else {
            rng.gen_range(25.0..400.0)
        };
        sim.tick(frame_ms);
        let level = sim.quality().tier.level() as i32;
        assert!((level - previous).abs() <= 1);
        assert!((1..=3).contains(&level));
        previous = level;
    }
}

#[test]
fn slow_frames_skip_draws() {
    let mut sim = running(SimConfig::default());
    let draws = (0..100).filter(|_| sim.tick(30.0).drawn).count();
    assert!(draws < 100);
    assert!(draws > 0);
    assert_eq!(sim.quality().frame_count, 100);
}

#[test]
fn cap_shrinks_on_next_step_after_tier_drop() {
    let mut sim = running(SimConfig::default());
    for _ in 0..60 {
        sim.tick(40.0);
    }
    assert_eq!(sim.quality().tier, QualityTier::Low);
    assert!(sim.particles().len() <= 225);
}

#[test]
fn identical_seeds_give_identical_runs() {
    let config = SimConfig {
        seed: 1234,
        ..SimConfig::default()
    };
    let mut a = running(config.clone());
    let mut b = running(config);

    for i in 0..120 {
        let frame_ms = if i % 7 == 0 { 35.0 } else { 16.8 };
        assert_eq!(a.tick(frame_ms), b.tick(frame_ms));
    }

    assert_eq!(a.particles(), b.particles());
    assert_eq!(a.quality(), b.quality());
}
