use serde::{Deserialize, Serialize};

const NEWTON_G: f64 = 6.67e-11;
const SOLAR_MASS_KG: f64 = 1.989e30;
const SPEED_OF_LIGHT: f64 = 3e8;

/// Schwarzschild radius (2GM/c²) of a body of `mass` solar masses, in kilometres.
/// Informational only; the simulated horizon is a fixed multiple of the visual radius.
pub fn schwarzschild_radius_km(mass: f32) -> f64 {
    let metres = 2.0 * NEWTON_G * mass as f64 * SOLAR_MASS_KG / (SPEED_OF_LIGHT * SPEED_OF_LIGHT);
    metres / 1000.0
}

/// Coarse label for the body's pull, shown by the controller surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GravityStrength {
    Weak,
    Moderate,
    Strong,
    Extreme,
}

impl GravityStrength {
    pub fn classify(mass: f32) -> Self {
        if mass > 50.0 {
            Self::Extreme
        } else if mass > 20.0 {
            Self::Strong
        } else if mass > 10.0 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
            Self::Extreme => "Extreme",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schwarzschild_radius() {
        // ~2.95 km per solar mass with these constants
        let r = schwarzschild_radius_km(10.0);
        assert!((r - 29.48).abs() < 0.01, "got {r}");
    }

    #[test]
    fn test_strength_thresholds() {
        assert_eq!(GravityStrength::classify(10.0), GravityStrength::Weak);
        assert_eq!(GravityStrength::classify(10.5), GravityStrength::Moderate);
        assert_eq!(GravityStrength::classify(21.0), GravityStrength::Strong);
        assert_eq!(GravityStrength::classify(51.0), GravityStrength::Extreme);
    }
}
