use crate::{Commands, Config, LaunchParameters, Time};

/// Apply the frame's aim rates on the session clock.
///
/// Runs in every throw state so the next shot can be lined up while the
/// current one is still in the air.
pub fn apply_aim(launch: &mut LaunchParameters, commands: &Commands, dt: f32, config: &Config) {
    if commands.aim_delta != 0.0 || commands.power_delta != 0.0 {
        launch.adjust(commands.aim_delta * dt, commands.power_delta * dt, config);
    }
}

/// Flip the flight-clock freeze if requested
pub fn apply_freeze(time: &mut Time, commands: &Commands) {
    if commands.freeze_toggle {
        time.toggle_freeze();
        tracing::debug!(frozen = time.frozen, "flight clock freeze toggled");
    }
}
