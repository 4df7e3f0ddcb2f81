use horizon_core::Body;
use horizon_core::constants::{G, MIN_DISTANCE_SQ, SPIN_COEFFICIENT};

/// Acceleration the body imparts on a particle at `position` with `mass`.
/// Returns [ax, ay]
///
/// Radial pull is `G·M·m / max(d², MIN_DISTANCE_SQ)` toward the body centre.
/// A spinning body adds a constant tangential push of `spin·SPIN_COEFFICIENT`
/// along (−dy/d, dx/d), a cheap stand-in for frame dragging.
///
/// Callers must not pass a particle sitting exactly on the centre; the
/// integrator absorbs those before asking for a force.
pub fn body_acceleration(body: &Body, position: [f32; 2], mass: f32) -> [f32; 2] {
    let dx = body.position[0] - position[0];
    let dy = body.position[1] - position[1];
    let d2 = dx * dx + dy * dy;
    debug_assert!(d2 > 0.0, "force evaluated at the body centre");
    let d = d2.sqrt();

    let force = G * body.mass * mass / d2.max(MIN_DISTANCE_SQ);
    let mut ax = dx / d * force;
    let mut ay = dy / d * force;

    if body.spin > 0.0 {
        let tangential = body.spin * SPIN_COEFFICIENT;
        ax += -dy / d * tangential;
        ay += dx / d * tangential;
    }

    [ax, ay]
}
