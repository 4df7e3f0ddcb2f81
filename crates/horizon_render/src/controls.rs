use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};
use horizon_sim::{PRESETS, Simulation};

/// Keyboard controls for run state, body placement, presets and speed
pub fn keyboard_control_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut simulation: ResMut<Simulation>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        simulation.toggle_running();
        info!(
            "Simulation {}",
            if simulation.is_running() { "running" } else { "paused" }
        );
    }
    if keyboard.just_pressed(KeyCode::KeyR) {
        simulation.reset();
    }
    if keyboard.just_pressed(KeyCode::KeyX) {
        simulation.randomize();
    }

    let presets = [
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
    ];
    for (key, preset) in presets.iter().zip(PRESETS.iter()) {
        if keyboard.just_pressed(*key) {
            simulation.apply_preset(preset);
        }
    }

    if keyboard.just_pressed(KeyCode::ArrowUp) {
        simulation.nudge_body(0, -1);
    }
    if keyboard.just_pressed(KeyCode::ArrowDown) {
        simulation.nudge_body(0, 1);
    }
    if keyboard.just_pressed(KeyCode::ArrowLeft) {
        simulation.nudge_body(-1, 0);
    }
    if keyboard.just_pressed(KeyCode::ArrowRight) {
        simulation.nudge_body(1, 0);
    }

    if keyboard.just_pressed(KeyCode::Equal) {
        let speed = simulation.simulation_speed() + 0.1;
        simulation.set_simulation_speed(speed);
    }
    if keyboard.just_pressed(KeyCode::Minus) {
        let speed = simulation.simulation_speed() - 0.1;
        simulation.set_simulation_speed(speed);
    }
    if keyboard.just_pressed(KeyCode::BracketRight) {
        let spin = simulation.body().spin + 0.1;
        simulation.set_spin(spin);
    }
    if keyboard.just_pressed(KeyCode::BracketLeft) {
        let spin = simulation.body().spin - 0.1;
        simulation.set_spin(spin);
    }
}

/// Left click moves the body; window cursor coordinates already match simulation space
pub fn pointer_control_system(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut simulation: ResMut<Simulation>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    simulation.move_body_to([cursor.x, cursor.y]);
}

/// Keep the working area in step with the window
pub fn window_resize_system(
    mut events: EventReader<WindowResized>,
    mut simulation: ResMut<Simulation>,
) {
    // Only the latest size matters
    let Some(event) = events.read().last() else {
        return;
    };
    let bounds = simulation.bounds();
    if bounds.width == event.width && bounds.height == event.height {
        return;
    }
    info!("Working area resized to {}x{}", event.width, event.height);
    simulation.resize(event.width, event.height, true);
}
