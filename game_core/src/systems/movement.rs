use crate::trajectory;
use crate::{Config, ProjectileState, ThrowState, Time};

/// Advance the flight clock and place the bag on its frozen arc.
///
/// While Ready the bag sits on the launch origin.
pub fn move_projectile(
    projectile: &mut ProjectileState,
    state: ThrowState,
    time: &Time,
    config: &Config,
) {
    match state {
        ThrowState::Ready => projectile.reset(config.launch_origin),
        ThrowState::InFlight => {
            projectile.elapsed_time += time.flight_dt();
            projectile.position = trajectory::position(
                config.launch_origin,
                projectile.launch_velocity,
                projectile.elapsed_time,
                config.gravity,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn in_flight() -> ProjectileState {
        let config = Config::new();
        let mut bag = ProjectileState::new(config.launch_origin);
        bag.launch_velocity = Vec3::new(0.0, 14.0, -24.0);
        bag
    }

    #[test]
    fn test_ready_bag_snaps_to_origin() {
        let config = Config::new();
        let mut bag = in_flight();
        bag.position = Vec3::new(1.0, 2.0, 3.0);
        bag.elapsed_time = 0.7;
        move_projectile(&mut bag, ThrowState::Ready, &Time::new(0.1, 0.0), &config);
        assert_eq!(bag.position, config.launch_origin);
        assert_eq!(bag.elapsed_time, 0.0);
    }

    #[test]
    fn test_flight_follows_launch_velocity() {
        let config = Config::new();
        let mut bag = in_flight();
        move_projectile(&mut bag, ThrowState::InFlight, &Time::new(0.5, 0.0), &config);
        assert_eq!(bag.elapsed_time, 0.5);
        assert_eq!(
            bag.position,
            trajectory::position(config.launch_origin, bag.launch_velocity, 0.5, config.gravity)
        );
    }

    #[test]
    fn test_frozen_flight_holds_position() {
        let config = Config::new();
        let mut bag = in_flight();
        move_projectile(&mut bag, ThrowState::InFlight, &Time::new(0.2, 0.0), &config);
        let held = bag;

        let mut time = Time::new(0.2, 0.2);
        time.toggle_freeze();
        move_projectile(&mut bag, ThrowState::InFlight, &time, &config);

        assert_eq!(bag, held);
    }
}
