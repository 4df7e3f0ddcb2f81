use bevy::prelude::*;

use super::simulation::{Simulation, TickReport};

/// Bevy plugin that drives the simulation from the frame loop
pub struct SimulationPlugin;

/// Renderer signals from the most recent tick
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct LastTick(pub TickReport);

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Simulation>()
            .init_resource::<LastTick>()
            .add_systems(Update, simulation_tick);
    }
}

/// One simulation tick per frame, fed the measured frame time
pub fn simulation_tick(
    mut simulation: ResMut<Simulation>,
    mut last_tick: ResMut<LastTick>,
    time: Res<Time>,
) {
    let frame_ms = time.delta_secs_f64() * 1000.0;
    last_tick.0 = simulation.tick(frame_ms);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_ticks_each_update() {
        let mut app = App::new();
        app.init_resource::<Time>().add_plugins(SimulationPlugin);

        app.update();
        app.update();

        let simulation = app.world().resource::<Simulation>();
        assert_eq!(simulation.quality().frame_count, 2);
        // Zero delta is floored, far below the frame budget
        assert!(!app.world().resource::<LastTick>().0.drawn);
    }
}
