use glam::Vec3;

use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub launch_origin: Vec3,
    pub angle_limit: f32,
    pub power_min: f32,
    pub power_max: f32,
    pub velocity_y_offset: f32,
    pub gravity: Vec3,
    pub floor_y: f32,
    pub fixed_dt: f32,
    pub max_dt: f32,
    pub hole_radius: f32,
    pub hole_band_min_y: f32,
    pub hole_band_max_y: f32,
    pub round_length: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            launch_origin: Params::LAUNCH_ORIGIN,
            angle_limit: Params::ANGLE_LIMIT,
            power_min: Params::POWER_MIN,
            power_max: Params::POWER_MAX,
            velocity_y_offset: Params::VELOCITY_Y_OFFSET,
            gravity: Params::GRAVITY,
            floor_y: Params::FLOOR_Y,
            fixed_dt: Params::FIXED_DT,
            max_dt: Params::MAX_DT,
            hole_radius: Params::HOLE_RADIUS,
            hole_band_min_y: Params::HOLE_BAND_MIN_Y,
            hole_band_max_y: Params::HOLE_BAND_MAX_Y,
            round_length: Params::ROUND_LENGTH,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aim bounds a clamp can use: a non-negative angle limit and an ordered
    /// power range. Non-finite bounds fall back to the defaults.
    pub fn normalized(mut self) -> Self {
        self.angle_limit = if self.angle_limit.is_finite() {
            self.angle_limit.abs()
        } else {
            Params::ANGLE_LIMIT
        };
        if !self.power_min.is_finite() || !self.power_max.is_finite() {
            self.power_min = Params::POWER_MIN;
            self.power_max = Params::POWER_MAX;
        } else if self.power_min > self.power_max {
            std::mem::swap(&mut self.power_min, &mut self.power_max);
        }
        self
    }

    /// Clamp aim angle to the symmetric range around straight ahead
    pub fn clamp_angle(&self, angle: f32) -> f32 {
        angle.clamp(-self.angle_limit, self.angle_limit)
    }

    /// Clamp launch power to its range
    pub fn clamp_power(&self, power: f32) -> f32 {
        power.clamp(self.power_min, self.power_max)
    }

    /// Velocity implied by an aim angle and power
    pub fn live_velocity(&self, angle: f32, power: f32) -> Vec3 {
        Vec3::new(
            power * angle.sin(),
            power - self.velocity_y_offset,
            -power * angle.cos(),
        )
    }

    /// Whether a height lies inside the vertical band that counts for the hole
    pub fn in_hole_band(&self, y: f32) -> bool {
        y >= self.hole_band_min_y && y <= self.hole_band_max_y
    }
}
