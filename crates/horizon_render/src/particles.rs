use bevy::math::Isometry2d;
use bevy::prelude::*;
use horizon_core::{Body, Bounds};
use horizon_sim::{LastTick, Simulation};

use super::to_world;

/// Accretion disk rings, recomputed only when heavy layers are due
#[derive(Default)]
pub struct DiskCache {
    pub rings: Vec<Vec<Vec2>>,
}

const DISK_RINGS: usize = 5;

/// Ring polylines around the body; phase advances with spin and simulated time
fn build_disk(body: &Body, bounds: &Bounds, segments: u32, time: f64) -> Vec<Vec<Vec2>> {
    let center = to_world(bounds, body.position);
    let segments = segments.max(3);
    let phase = (time * body.spin as f64) as f32;

    (0..DISK_RINGS)
        .map(|ring| {
            let radius = body.event_horizon() * (1.15 + ring as f32 * 0.25);
            // Slight ellipse so the disk reads as tilted
            let squash = 0.35 + ring as f32 * 0.02;
            (0..=segments)
                .map(|i| {
                    let t = i as f32 / segments as f32 * std::f32::consts::TAU + phase;
                    center + Vec2::new(radius * t.cos(), radius * squash * t.sin())
                })
                .collect()
        })
        .collect()
}

/// Draw body, disk, horizon and particles from the current simulation state
pub fn draw_scene(
    mut gizmos: Gizmos,
    simulation: Res<Simulation>,
    last_tick: Res<LastTick>,
    mut disk: Local<DiskCache>,
) {
    let body = simulation.body();
    let bounds = simulation.bounds();
    let quality = simulation.quality();

    if last_tick.0.draw_heavy_layers || disk.rings.is_empty() {
        disk.rings = build_disk(
            body,
            bounds,
            quality.segments,
            simulation.clock().simulation_time,
        );
    }

    for (i, ring) in disk.rings.iter().enumerate() {
        let fade = 0.6 - i as f32 * 0.1;
        gizmos.linestrip_2d(ring.iter().copied(), Color::srgba(1.0, 0.62, 0.26, fade));
    }

    let center = to_world(bounds, body.position);
    gizmos.circle_2d(
        Isometry2d::from_translation(center),
        body.event_horizon(),
        Color::srgba(0.6, 0.4, 1.0, 0.35),
    );
    gizmos.circle_2d(
        Isometry2d::from_translation(center),
        body.radius,
        Color::srgb(0.0, 0.0, 0.0),
    );

    for p in simulation.particles() {
        let [r, g, b, _] = p.color_tag().color();
        gizmos.circle_2d(
            Isometry2d::from_translation(to_world(bounds, p.position)),
            p.size,
            Color::srgba(r, g, b, p.life_fraction()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disk_ring_resolution_follows_segments() {
        let body = Body::new([400.0, 300.0], 10.0, 0.5, 45.0);
        let bounds = Bounds::new(800.0, 600.0);
        let rings = build_disk(&body, &bounds, 40, 0.0);
        assert_eq!(rings.len(), DISK_RINGS);
        assert!(rings.iter().all(|r| r.len() == 41));
        // Closed loop
        let first = rings[0][0];
        let last = rings[0][40];
        assert!((first - last).length() < 1e-3);
    }
}
