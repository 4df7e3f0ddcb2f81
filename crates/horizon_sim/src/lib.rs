pub mod integrator;
pub mod pipeline;
pub mod presets;
pub mod quality;
pub mod scheduler;
pub mod simulation;

pub use pipeline::{LastTick, SimulationPlugin};
pub use presets::{PRESETS, Preset, find_preset};
pub use quality::{QualityController, QualityState, QualityUpdate};
pub use scheduler::{FrameDecision, FrameScheduler};
pub use simulation::{Simulation, SimulationClock, TickReport};
