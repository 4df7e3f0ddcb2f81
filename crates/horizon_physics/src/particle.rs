use horizon_core::constants::SPAWN_EDGE_OFFSET;
use horizon_core::{Body, Bounds, Particle, ParticleColor};
use rand::Rng;

/// Parameter set for the edge spawner.
/// Seeding a fresh population uses slower, smaller particles than steady-state top-ups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnProfile {
    Seed,
    Replenish,
}

impl SpawnProfile {
    /// Initial speed range [min, max)
    pub fn speed_range(self) -> (f32, f32) {
        match self {
            Self::Seed => (0.3, 1.3),
            Self::Replenish => (0.5, 2.0),
        }
    }

    /// Visual size range [min, max)
    pub fn size_range(self) -> (f32, f32) {
        match self {
            Self::Seed => (0.8, 2.4),
            Self::Replenish => (1.0, 3.0),
        }
    }

    pub const MASS_RANGE: (f32, f32) = (0.1, 0.4);
}

/// Edge of the working area a particle enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnEdge {
    Top,
    Right,
    Bottom,
    Left,
}

impl SpawnEdge {
    pub fn random(rng: &mut impl Rng) -> Self {
        match rng.gen_range(0..4) {
            0 => Self::Top,
            1 => Self::Right,
            2 => Self::Bottom,
            _ => Self::Left,
        }
    }

    /// Uniform point along this edge, pushed SPAWN_EDGE_OFFSET outside the area
    pub fn sample(self, bounds: &Bounds, rng: &mut impl Rng) -> [f32; 2] {
        match self {
            Self::Top => [rng.gen_range(0.0..bounds.width), -SPAWN_EDGE_OFFSET],
            Self::Right => [bounds.width + SPAWN_EDGE_OFFSET, rng.gen_range(0.0..bounds.height)],
            Self::Bottom => [rng.gen_range(0.0..bounds.width), bounds.height + SPAWN_EDGE_OFFSET],
            Self::Left => [-SPAWN_EDGE_OFFSET, rng.gen_range(0.0..bounds.height)],
        }
    }
}

/// Create one particle on a random edge, aimed at the body's current centre
pub fn spawn_particle(
    body: &Body,
    bounds: &Bounds,
    profile: SpawnProfile,
    rng: &mut impl Rng,
) -> Particle {
    let position = SpawnEdge::random(rng).sample(bounds, rng);

    let dx = body.position[0] - position[0];
    let dy = body.position[1] - position[1];
    let distance = (dx * dx + dy * dy).sqrt();

    let (min_speed, max_speed) = profile.speed_range();
    let speed = rng.gen_range(min_speed..max_speed);

    // Body parked on the spawn point: start at rest
    let velocity = if distance > f32::EPSILON {
        [dx / distance * speed, dy / distance * speed]
    } else {
        [0.0, 0.0]
    };

    let (min_mass, max_mass) = SpawnProfile::MASS_RANGE;
    let mass = rng.gen_range(min_mass..max_mass);

    let (min_size, max_size) = profile.size_range();
    let size = rng.gen_range(min_size..max_size);

    let color = ParticleColor::ALL[rng.gen_range(0..ParticleColor::ALL.len())];

    Particle::new(position, velocity, mass, size, color)
}

/// Generate a fresh population of `count` particles with the seed profile
pub fn generate_population(
    count: usize,
    body: &Body,
    bounds: &Bounds,
    rng: &mut impl Rng,
) -> Vec<Particle> {
    let mut particles = Vec::with_capacity(count);
    for _ in 0..count {
        particles.push(spawn_particle(body, bounds, SpawnProfile::Seed, rng));
    }
    particles
}
