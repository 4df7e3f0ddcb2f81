use bevy::prelude::*;
use horizon_core::SimConfig;
use horizon_render::HorizonRenderPlugin;
use horizon_sim::{Simulation, SimulationPlugin};

fn main() {
    let config = SimConfig::default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Horizon - Black Hole Particle Simulator".into(),
                resolution: (config.width, config.height).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.1, 0.1, 0.18)))
        .insert_resource(Simulation::new(config))
        .add_plugins(SimulationPlugin)
        .add_plugins(HorizonRenderPlugin)
        .run();
}
