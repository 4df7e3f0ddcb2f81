use bevy::prelude::*;
use horizon_sim::pipeline::simulation_tick;

use super::controls;
use super::particles;
use super::starfield;
use super::ui;

/// Demo renderer and controller surface for the simulation
pub struct HorizonRenderPlugin;

impl Plugin for HorizonRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ui::HudThrottle>()
            .init_resource::<starfield::Starfield>()
            .add_systems(Startup, (spawn_camera, ui::spawn_hud))
            .add_systems(
                Update,
                (
                    controls::window_resize_system,
                    controls::keyboard_control_system,
                    controls::pointer_control_system,
                )
                    .before(simulation_tick),
            )
            .add_systems(
                Update,
                (
                    starfield::refresh_starfield,
                    starfield::draw_starfield.after(starfield::refresh_starfield),
                    particles::draw_scene,
                    ui::update_hud,
                )
                    .after(simulation_tick),
            );
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
    info!("2D camera spawned");
}
