pub mod body;
pub mod forces;
pub mod particle;

pub use body::{GravityStrength, schwarzschild_radius_km};
pub use forces::body_acceleration;
pub use particle::{SpawnEdge, SpawnProfile, generate_population, spawn_particle};
