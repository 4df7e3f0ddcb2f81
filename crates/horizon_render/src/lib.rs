pub mod controls;
pub mod particles;
pub mod plugin;
pub mod starfield;
pub mod ui;

pub use plugin::HorizonRenderPlugin;

use bevy::math::Vec2;
use horizon_core::Bounds;

/// Simulation space (origin top-left, y down) to 2D world space
/// (origin at the window centre, y up)
pub fn to_world(bounds: &Bounds, point: [f32; 2]) -> Vec2 {
    Vec2::new(
        point[0] - bounds.width * 0.5,
        bounds.height * 0.5 - point[1],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_world() {
        let bounds = Bounds::new(800.0, 600.0);
        assert_eq!(to_world(&bounds, [400.0, 300.0]), Vec2::ZERO);
        assert_eq!(to_world(&bounds, [0.0, 0.0]), Vec2::new(-400.0, 300.0));
        assert_eq!(to_world(&bounds, [800.0, 600.0]), Vec2::new(400.0, -300.0));
    }
}
