use bevy::prelude::*;
use horizon_sim::Simulation;

/// Marker for the HUD text
#[derive(Component)]
pub struct HudText;

/// Spawn the HUD overlay
pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new("Horizon"),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgba(0.31, 0.8, 0.77, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        HudText,
    ));
}

/// HUD frame counter for throttling
#[derive(Resource, Default)]
pub struct HudThrottle {
    pub frame: u32,
}

/// Update HUD text every 10th frame (string formatting is expensive)
pub fn update_hud(
    simulation: Res<Simulation>,
    mut throttle: ResMut<HudThrottle>,
    mut hud_query: Query<&mut Text, With<HudText>>,
) {
    throttle.frame = throttle.frame.wrapping_add(1);
    if throttle.frame % 10 != 0 {
        return;
    }
    let Ok(mut text) = hud_query.get_single_mut() else {
        return;
    };

    let body = simulation.body();
    let quality = simulation.quality();
    let clock = simulation.clock();
    let status = if clock.running { "RUNNING" } else { "PAUSED" };

    **text = format!(
        "HORIZON | {} | t = {:.1}s\n\
         Mass: {:.0} Msun | Spin: {:.2} | Speed: {:.1}x\n\
         Schwarzschild radius: {:.1} km | Gravity: {}\n\
         Particles: {} / {} (cap {})\n\
         Quality: {} | {:.1} ms avg | target {} fps | scale {:.2}\n\
         \n\
         [Space] Start/Pause  [R] Reset  [X] Randomize  [1-4] Presets\n\
         [Arrows] Move body  [Click] Place body  [-/=] Speed  [[/]] Spin",
        status,
        clock.simulation_time,
        body.mass,
        body.spin,
        simulation.simulation_speed(),
        simulation.schwarzschild_radius_km(),
        simulation.gravity_strength().name(),
        simulation.particles().len(),
        simulation.effective_cap(),
        simulation.particle_cap(),
        quality.tier.name(),
        quality.frame_time_avg_ms,
        quality.target_fps,
        quality.display_scale,
    );
}
