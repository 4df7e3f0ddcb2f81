use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::constants::EVENT_HORIZON_FACTOR;

/// The gravitational source. One per simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Centre in world units
    pub position: [f32; 2],
    /// Solar masses, always > 0
    pub mass: f32,
    /// Dimensionless spin in [0, 1]
    pub spin: f32,
    /// Visual radius in world units
    pub radius: f32,
}

impl Body {
    pub fn new(position: [f32; 2], mass: f32, spin: f32, radius: f32) -> Self {
        Self {
            position,
            mass,
            spin,
            radius,
        }
    }

    /// Radius inside which particles are absorbed
    pub fn event_horizon(&self) -> f32 {
        self.radius * EVENT_HORIZON_FACTOR
    }

    pub fn distance_to(&self, point: [f32; 2]) -> f32 {
        let dx = self.position[0] - point[0];
        let dy = self.position[1] - point[1];
        (dx * dx + dy * dy).sqrt()
    }
}

/// A test particle falling toward the body.
/// repr(C) and Pod so renderers can upload the pool directly.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Particle {
    pub position: [f32; 2],
    pub velocity: [f32; 2],
    /// 0.1 to 0.4
    pub mass: f32,
    /// Visual radius
    pub size: f32,
    /// Palette index (see ParticleColor)
    pub color: u32,
    /// Remaining life in [0, max_life]
    pub life: f32,
    pub max_life: f32,
}

impl Particle {
    pub const MAX_LIFE: f32 = 1.0;

    pub fn new(
        position: [f32; 2],
        velocity: [f32; 2],
        mass: f32,
        size: f32,
        color: ParticleColor,
    ) -> Self {
        Self {
            position,
            velocity,
            mass,
            size,
            color: color as u32,
            life: Self::MAX_LIFE,
            max_life: Self::MAX_LIFE,
        }
    }

    pub fn color_tag(&self) -> ParticleColor {
        ParticleColor::from_index(self.color)
    }

    /// Fraction of life remaining, used for alpha fade
    pub fn life_fraction(&self) -> f32 {
        (self.life / self.max_life).clamp(0.0, 1.0)
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

/// Spawn palette for particles
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticleColor {
    Turquoise = 0,
    Cerulean = 1,
    Sage = 2,
    Amber = 3,
    Pink = 4,
    Azure = 5,
    Violet = 6,
    Cyan = 7,
}

impl ParticleColor {
    pub const ALL: [ParticleColor; 8] = [
        Self::Turquoise,
        Self::Cerulean,
        Self::Sage,
        Self::Amber,
        Self::Pink,
        Self::Azure,
        Self::Violet,
        Self::Cyan,
    ];

    /// Unknown indices fall back to the first palette entry
    pub fn from_index(index: u32) -> Self {
        Self::ALL
            .get(index as usize)
            .copied()
            .unwrap_or(Self::Turquoise)
    }

    /// sRGB color [r, g, b, a]
    pub fn color(&self) -> [f32; 4] {
        match self {
            Self::Turquoise => [0.306, 0.804, 0.769, 1.0], // #4ecdc4
            Self::Cerulean => [0.271, 0.718, 0.820, 1.0],  // #45b7d1
            Self::Sage => [0.588, 0.808, 0.706, 1.0],      // #96ceb4
            Self::Amber => [0.996, 0.792, 0.341, 1.0],     // #feca57
            Self::Pink => [1.0, 0.624, 0.953, 1.0],        // #ff9ff3
            Self::Azure => [0.329, 0.627, 1.0, 1.0],       // #54a0ff
            Self::Violet => [0.373, 0.153, 0.804, 1.0],    // #5f27cd
            Self::Cyan => [0.0, 0.824, 0.827, 1.0],        // #00d2d3
        }
    }
}

/// The bounded working area particles live in, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    pub fn center(&self) -> [f32; 2] {
        [self.width * 0.5, self.height * 0.5]
    }

    /// True while the point lies inside the area grown by `margin` on every side
    pub fn contains_with_margin(&self, point: [f32; 2], margin: f32) -> bool {
        point[0] >= -margin
            && point[0] <= self.width + margin
            && point[1] >= -margin
            && point[1] <= self.height + margin
    }
}

/// Discrete render/simulation quality level chosen by the adaptive controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QualityTier {
    Low = 1,
    Mid = 2,
    High = 3,
}

/// Parameters derived purely from the tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierParams {
    /// Ring segment count for disk/ring layers
    pub segments: u32,
    /// Frames between static background rebuilds
    pub redraw_interval_frames: u32,
    /// Multiplier on the configured particle cap
    pub particle_cap_scale: f64,
    /// Heavy layers are drawn on every Nth draw tick
    pub heavy_layer_interval: u32,
}

impl QualityTier {
    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn from_level(level: u8) -> Self {
        match level {
            0 | 1 => Self::Low,
            2 => Self::Mid,
            _ => Self::High,
        }
    }

    /// One step lower, saturating at Low
    pub fn step_down(self) -> Self {
        match self {
            Self::High => Self::Mid,
            Self::Mid | Self::Low => Self::Low,
        }
    }

    /// One step higher, saturating at High
    pub fn step_up(self) -> Self {
        match self {
            Self::Low => Self::Mid,
            Self::Mid | Self::High => Self::High,
        }
    }

    pub fn params(self) -> TierParams {
        match self {
            Self::High => TierParams {
                segments: 100,
                redraw_interval_frames: 240,
                particle_cap_scale: 1.0,
                heavy_layer_interval: 1,
            },
            Self::Mid => TierParams {
                segments: 70,
                redraw_interval_frames: 360,
                particle_cap_scale: 0.7,
                heavy_layer_interval: 2,
            },
            Self::Low => TierParams {
                segments: 40,
                redraw_interval_frames: 600,
                particle_cap_scale: 0.45,
                heavy_layer_interval: 3,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Mid => "Mid",
            Self::High => "High",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_table() {
        let high = QualityTier::High.params();
        assert_eq!((high.segments, high.redraw_interval_frames), (100, 240));
        assert_eq!(high.particle_cap_scale, 1.0);

        let mid = QualityTier::Mid.params();
        assert_eq!((mid.segments, mid.redraw_interval_frames), (70, 360));
        assert_eq!(mid.particle_cap_scale, 0.7);

        let low = QualityTier::Low.params();
        assert_eq!((low.segments, low.redraw_interval_frames), (40, 600));
        assert_eq!(low.particle_cap_scale, 0.45);
    }

    #[test]
    fn test_tier_steps_saturate() {
        assert_eq!(QualityTier::Low.step_down(), QualityTier::Low);
        assert_eq!(QualityTier::High.step_up(), QualityTier::High);
        assert_eq!(QualityTier::High.step_down().step_down(), QualityTier::Low);
        assert_eq!(QualityTier::from_level(2), QualityTier::Mid);
    }

    #[test]
    fn test_bounds_margin() {
        let bounds = Bounds::new(800.0, 600.0);
        assert!(bounds.contains_with_margin([-49.0, 300.0], 50.0));
        assert!(!bounds.contains_with_margin([-51.0, 300.0], 50.0));
        assert!(!bounds.contains_with_margin([400.0, 651.0], 50.0));
    }

    #[test]
    fn test_palette_fallback() {
        assert_eq!(ParticleColor::from_index(5), ParticleColor::Azure);
        assert_eq!(ParticleColor::from_index(99), ParticleColor::Turquoise);
    }

    #[test]
    fn test_particle_is_pod_sized() {
        assert_eq!(std::mem::size_of::<Particle>(), 36);
    }
}
