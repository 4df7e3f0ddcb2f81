pub mod config;
pub mod constants;
pub mod types;

pub use config::{ConfigPatch, SimConfig};
pub use constants::*;
pub use types::*;
