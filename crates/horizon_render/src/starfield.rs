use bevy::math::Isometry2d;
use bevy::prelude::*;
use horizon_core::Bounds;
use horizon_sim::{LastTick, Simulation};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::to_world;

/// Number of background stars
const STAR_COUNT: usize = 250;

#[derive(Debug, Clone, Copy)]
pub struct Star {
    /// Simulation-space position
    pub position: [f32; 2],
    pub radius: f32,
    pub alpha: f32,
}

/// Static background. Stars are generated per working area; the world-space
/// cache is rebuilt only when the simulation asks for it.
#[derive(Resource, Default)]
pub struct Starfield {
    pub stars: Vec<Star>,
    /// Bounds the stars were generated for
    pub bounds: Option<Bounds>,
    /// (world position, radius, color)
    pub cache: Vec<(Vec2, f32, Color)>,
    pub rebuilds: u32,
}

pub fn generate_stars(bounds: &Bounds, rng: &mut impl Rng) -> Vec<Star> {
    (0..STAR_COUNT)
        .map(|_| Star {
            position: [
                rng.gen_range(0.0..bounds.width),
                rng.gen_range(0.0..bounds.height),
            ],
            radius: rng.gen_range(0.3..1.5),
            alpha: rng.gen_range(0.3..1.0),
        })
        .collect()
}

impl Starfield {
    fn rebuild_cache(&mut self, bounds: &Bounds) {
        self.cache = self
            .stars
            .iter()
            .map(|s| {
                (
                    to_world(bounds, s.position),
                    s.radius,
                    Color::srgba(1.0, 1.0, 1.0, s.alpha),
                )
            })
            .collect();
        self.rebuilds = self.rebuilds.wrapping_add(1);
    }
}

/// Regenerate stars on a new working area, rebuild the cache when signalled
pub fn refresh_starfield(
    mut starfield: ResMut<Starfield>,
    simulation: Res<Simulation>,
    last_tick: Res<LastTick>,
) {
    let bounds = *simulation.bounds();
    let area_changed = starfield.bounds != Some(bounds);

    if area_changed {
        let seed = ((bounds.width as u64) << 32) | bounds.height as u64;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        starfield.stars = generate_stars(&bounds, &mut rng);
        starfield.bounds = Some(bounds);
    }

    if area_changed || last_tick.0.rebuild_background {
        starfield.rebuild_cache(&bounds);
        debug!("Starfield cache rebuilt ({} stars)", starfield.cache.len());
    }
}

pub fn draw_starfield(mut gizmos: Gizmos, starfield: Res<Starfield>) {
    for (position, radius, color) in &starfield.cache {
        gizmos.circle_2d(Isometry2d::from_translation(*position), *radius, *color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_inside_area() {
        let bounds = Bounds::new(640.0, 480.0);
        let stars = generate_stars(&bounds, &mut ChaCha8Rng::seed_from_u64(1));
        assert_eq!(stars.len(), STAR_COUNT);
        assert!(stars.iter().all(|s| bounds.contains_with_margin(s.position, 0.0)));
    }

    #[test]
    fn test_cache_tracks_stars() {
        let bounds = Bounds::new(640.0, 480.0);
        let mut starfield = Starfield {
            stars: generate_stars(&bounds, &mut ChaCha8Rng::seed_from_u64(1)),
            ..default()
        };
        starfield.rebuild_cache(&bounds);
        assert_eq!(starfield.cache.len(), STAR_COUNT);
        assert_eq!(starfield.rebuilds, 1);
    }
}
