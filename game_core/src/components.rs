use glam::Vec3;

use crate::Config;

/// Live aim: angle (radians, + is to the right) and power (launch speed)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchParameters {
    pub angle: f32,
    pub power: f32,
}

impl LaunchParameters {
    pub fn new(angle: f32, power: f32) -> Self {
        Self { angle, power }
    }

    /// Apply incremental aim changes, saturating at the configured bounds.
    ///
    /// Accepted in every throw state; a flight in progress keeps its own
    /// frozen launch velocity. Non-finite deltas are dropped so the aim
    /// always stays inside the bounds.
    pub fn adjust(&mut self, angle_delta: f32, power_delta: f32, config: &Config) {
        if angle_delta.is_finite() {
            self.angle = config.clamp_angle(self.angle + angle_delta);
        }
        if power_delta.is_finite() {
            self.power = config.clamp_power(self.power + power_delta);
        }
    }

    /// Velocity implied by the current aim
    pub fn live_velocity(&self, config: &Config) -> Vec3 {
        config.live_velocity(self.angle, self.power)
    }
}

impl Default for LaunchParameters {
    fn default() -> Self {
        Self::new(crate::Params::ANGLE_INITIAL, crate::Params::POWER_INITIAL)
    }
}

/// The bean bag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileState {
    pub position: Vec3,
    /// Flight clock: seconds since the last launch
    pub elapsed_time: f32,
    /// Velocity captured when the current flight began
    pub launch_velocity: Vec3,
}

impl ProjectileState {
    pub fn new(origin: Vec3) -> Self {
        Self {
            position: origin,
            elapsed_time: 0.0,
            launch_velocity: Vec3::ZERO,
        }
    }

    /// Back to the launch origin with the flight clock zeroed
    pub fn reset(&mut self, origin: Vec3) {
        self.position = origin;
        self.elapsed_time = 0.0;
    }
}

/// Whether the bag can be aimed or is in the air
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThrowState {
    #[default]
    Ready,
    InFlight,
}

impl ThrowState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, ThrowState::InFlight)
    }
}
