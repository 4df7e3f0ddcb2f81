use serde::Serialize;

/// A named body/population setup the controller surface can apply in one go
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Preset {
    pub name: &'static str,
    pub mass: f32,
    pub spin: f32,
    pub particles: u32,
}

pub const PRESETS: [Preset; 4] = [
    Preset {
        name: "Stellar",
        mass: 10.0,
        spin: 0.5,
        particles: 500,
    },
    Preset {
        name: "Rapid Spinner",
        mass: 15.0,
        spin: 0.95,
        particles: 700,
    },
    Preset {
        name: "Supermassive",
        mass: 80.0,
        spin: 0.7,
        particles: 1200,
    },
    Preset {
        name: "Quiet Giant",
        mass: 40.0,
        spin: 0.0,
        particles: 300,
    },
];

/// Case-insensitive lookup by name
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}
