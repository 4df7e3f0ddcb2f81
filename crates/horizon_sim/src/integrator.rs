use horizon_core::constants::{BOUNDS_MARGIN, LIFE_DECAY_RATE};
use horizon_core::{Body, Bounds, Particle};
use horizon_physics::forces::body_acceleration;

/// Removal counts for one integration step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    pub absorbed: usize,
    pub expired: usize,
    pub escaped: usize,
}

impl StepStats {
    pub fn removed(&self) -> usize {
        self.absorbed + self.expired + self.escaped
    }
}

/// Advance every particle by one draw tick.
///
/// Motion is semi-implicit Euler scaled by `speed`, not by wall-clock delta:
/// a tick is one unit of simulated time, so trajectories depend on tick cadence.
/// Particles inside the event horizon are absorbed before any force is
/// evaluated, which also keeps the force away from d = 0.
pub fn integrate(
    particles: &mut Vec<Particle>,
    body: &Body,
    bounds: &Bounds,
    speed: f32,
) -> StepStats {
    let horizon = body.event_horizon();
    let mut stats = StepStats::default();

    particles.retain_mut(|p| {
        if body.distance_to(p.position) < horizon {
            stats.absorbed += 1;
            return false;
        }

        let [ax, ay] = body_acceleration(body, p.position, p.mass);
        p.velocity[0] += ax * speed;
        p.velocity[1] += ay * speed;
        p.position[0] += p.velocity[0] * speed;
        p.position[1] += p.velocity[1] * speed;

        p.life -= LIFE_DECAY_RATE * speed;
        if !p.is_alive() {
            stats.expired += 1;
            return false;
        }

        if !bounds.contains_with_margin(p.position, BOUNDS_MARGIN) {
            stats.escaped += 1;
            return false;
        }

        true
    });

    stats
}
