use serde::{Deserialize, Serialize};

use crate::constants::MAX_PARTICLE_CAP;

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Body mass in solar masses
    pub mass: f32,
    /// Body spin (0.0 - 1.0)
    pub spin: f32,
    /// Body radius in world units
    pub body_radius: f32,
    /// Configured particle cap before quality scaling
    pub particle_cap: u32,
    /// Multiplier applied to every integration step
    pub simulation_speed: f32,
    /// Random seed for deterministic spawning
    pub seed: u64,
    /// Working area width
    pub width: f32,
    /// Working area height
    pub height: f32,
    /// Device resolution multiplier used when the frame budget is healthy
    pub native_display_scale: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            mass: 10.0,
            spin: 0.5,
            body_radius: 45.0,
            particle_cap: 500,
            simulation_speed: 1.0,
            seed: 42,
            width: 800.0,
            height: 600.0,
            native_display_scale: 2.0,
        }
    }
}

impl SimConfig {
    pub const MIN_MASS: f32 = 1.0;
    pub const MAX_MASS: f32 = 100.0;
    pub const MIN_SPEED: f32 = 0.1;
    pub const MAX_SPEED: f32 = 5.0;
    pub const MIN_DISPLAY_SCALE: f32 = 0.5;
    pub const MAX_DISPLAY_SCALE: f32 = 2.0;

    /// Copy of this config with every field forced into its valid range
    pub fn clamped(&self) -> Self {
        let defaults = Self::default();
        Self {
            mass: Self::clamp_mass(self.mass, defaults.mass),
            spin: Self::clamp_spin(self.spin, defaults.spin),
            body_radius: sanitize(self.body_radius, defaults.body_radius, 1.0, f32::MAX),
            particle_cap: Self::clamp_cap(self.particle_cap),
            simulation_speed: Self::clamp_speed(self.simulation_speed, defaults.simulation_speed),
            seed: self.seed,
            width: sanitize(self.width, defaults.width, 1.0, f32::MAX),
            height: sanitize(self.height, defaults.height, 1.0, f32::MAX),
            native_display_scale: sanitize(
                self.native_display_scale,
                defaults.native_display_scale,
                Self::MIN_DISPLAY_SCALE,
                Self::MAX_DISPLAY_SCALE,
            ),
        }
    }

    /// Non-finite input keeps `current`
    pub fn clamp_mass(value: f32, current: f32) -> f32 {
        sanitize(value, current, Self::MIN_MASS, Self::MAX_MASS)
    }

    pub fn clamp_spin(value: f32, current: f32) -> f32 {
        sanitize(value, current, 0.0, 1.0)
    }

    pub fn clamp_speed(value: f32, current: f32) -> f32 {
        sanitize(value, current, Self::MIN_SPEED, Self::MAX_SPEED)
    }

    pub fn clamp_cap(value: u32) -> u32 {
        value.clamp(1, MAX_PARTICLE_CAP)
    }
}

/// Clamp into [min, max]; NaN and infinities fall back to `current`
pub fn sanitize(value: f32, current: f32, min: f32, max: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        current.clamp(min, max)
    }
}

/// Partial update pushed in by the controller surface.
/// `None` leaves the current value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigPatch {
    pub mass: Option<f32>,
    pub spin: Option<f32>,
    pub particle_cap: Option<u32>,
    pub simulation_speed: Option<f32>,
    pub body_position: Option<[f32; 2]>,
}

impl ConfigPatch {
    pub fn mass(mut self, mass: f32) -> Self {
        self.mass = Some(mass);
        self
    }

    pub fn spin(mut self, spin: f32) -> Self {
        self.spin = Some(spin);
        self
    }

    pub fn particle_cap(mut self, cap: u32) -> Self {
        self.particle_cap = Some(cap);
        self
    }

    pub fn simulation_speed(mut self, speed: f32) -> Self {
        self.simulation_speed = Some(speed);
        self
    }

    pub fn body_position(mut self, position: [f32; 2]) -> Self {
        self.body_position = Some(position);
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
