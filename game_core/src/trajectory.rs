//! Closed-form constant-acceleration kinematics.
//!
//! Every position is evaluated directly from (origin, velocity, t, gravity);
//! nothing is integrated, so identical inputs give bit-identical outputs.

use glam::Vec3;

/// Position after `t` seconds: `origin + velocity * t + 0.5 * gravity * t^2`, per axis
pub fn position(origin: Vec3, velocity: Vec3, t: f32, gravity: Vec3) -> Vec3 {
    origin + velocity * t + gravity * (0.5 * t * t)
}

/// Time at which an arc launched from `origin_y` with vertical speed `vy`
/// comes back down through height `h`.
///
/// `None` when gravity does not pull down or the arc never reaches `h`.
pub fn time_to_height(origin_y: f32, vy: f32, gravity_y: f32, h: f32) -> Option<f32> {
    if gravity_y >= 0.0 {
        return None;
    }
    let a = 0.5 * gravity_y;
    let c = origin_y - h;
    let disc = vy * vy - 4.0 * a * c;
    if disc < 0.0 {
        return None;
    }
    // a < 0 so this is the later (descending) root
    let t = (-vy - disc.sqrt()) / (2.0 * a);
    (t >= 0.0).then_some(t)
}

/// Sample an arc every `step` seconds from t = 0, stopping after the first
/// sample below `floor_y` or at `max_samples`.
pub fn sample_arc(
    origin: Vec3,
    velocity: Vec3,
    gravity: Vec3,
    step: f32,
    floor_y: f32,
    max_samples: usize,
) -> Vec<Vec3> {
    let mut samples = Vec::with_capacity(max_samples);
    for i in 0..max_samples {
        let pos = position(origin, velocity, i as f32 * step, gravity);
        samples.push(pos);
        if pos.y < floor_y {
            break;
        }
    }
    samples
}
