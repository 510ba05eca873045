use crate::{Config, Events, LaunchParameters, ProjectileState, RoundState, ThrowState};

/// Ready -> InFlight on a throw command.
///
/// Captures the live velocity as the launch velocity, zeroes the flight clock
/// and opens the scoring latch. A no-op while in flight or once the round
/// timer has run out. Returns whether a throw began.
pub fn begin_throw(
    state: &mut ThrowState,
    projectile: &mut ProjectileState,
    launch: &LaunchParameters,
    round: &mut RoundState,
    config: &Config,
    events: &mut Events,
) -> bool {
    if state.is_in_flight() || round.is_over() {
        return false;
    }

    projectile.launch_velocity = launch.live_velocity(config);
    projectile.reset(config.launch_origin);
    round.scored_this_throw = false;
    round.throws += 1;
    *state = ThrowState::InFlight;
    events.thrown = true;

    tracing::debug!(
        angle = launch.angle,
        power = launch.power,
        velocity = ?projectile.launch_velocity,
        "bag thrown"
    );
    true
}

/// InFlight -> Ready: bag back on the launch origin
pub fn finish_throw(state: &mut ThrowState, projectile: &mut ProjectileState, config: &Config) {
    *state = ThrowState::Ready;
    projectile.reset(config.launch_origin);
}

/// End the flight once the bag drops below the floor. Returns whether it landed.
pub fn check_landing(
    state: &mut ThrowState,
    projectile: &mut ProjectileState,
    config: &Config,
    events: &mut Events,
) -> bool {
    if !state.is_in_flight() || projectile.position.y >= config.floor_y {
        return false;
    }

    tracing::debug!(
        position = ?projectile.position,
        flight_time = projectile.elapsed_time,
        "bag landed"
    );
    finish_throw(state, projectile, config);
    events.landed = true;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    struct Fixture {
        state: ThrowState,
        bag: ProjectileState,
        launch: LaunchParameters,
        round: RoundState,
        config: Config,
        events: Events,
    }

    fn setup() -> Fixture {
        let config = Config::new();
        Fixture {
            state: ThrowState::Ready,
            bag: ProjectileState::new(config.launch_origin),
            launch: LaunchParameters::new(0.1, 25.0),
            round: RoundState::new(config.round_length),
            config,
            events: Events::new(),
        }
    }

    fn throw(f: &mut Fixture) -> bool {
        begin_throw(
            &mut f.state,
            &mut f.bag,
            &f.launch,
            &mut f.round,
            &f.config,
            &mut f.events,
        )
    }

    #[test]
    fn test_throw_captures_live_velocity() {
        let mut f = setup();
        f.round.scored_this_throw = true;

        assert!(throw(&mut f));

        assert_eq!(f.state, ThrowState::InFlight);
        assert_eq!(f.bag.launch_velocity, f.launch.live_velocity(&f.config));
        assert_eq!(f.bag.elapsed_time, 0.0);
        assert!(!f.round.scored_this_throw, "Latch cleared for the new flight");
        assert_eq!(f.round.throws, 1);
        assert!(f.events.thrown);
    }

    #[test]
    fn test_throw_in_flight_is_noop() {
        let mut f = setup();
        throw(&mut f);
        f.bag.elapsed_time = 0.4;
        let frozen = f.bag.launch_velocity;

        f.launch.adjust(0.3, 5.0, &f.config);
        assert!(!throw(&mut f));

        assert_eq!(f.state, ThrowState::InFlight);
        assert_eq!(f.bag.launch_velocity, frozen);
        assert_eq!(f.bag.elapsed_time, 0.4);
        assert_eq!(f.round.throws, 1);
    }

    #[test]
    fn test_throw_refused_when_time_is_up() {
        let mut f = setup();
        f.round.time_remaining = 0.0;
        assert!(!throw(&mut f));
        assert_eq!(f.state, ThrowState::Ready);
        assert!(!f.events.thrown);
    }

    #[test]
    fn test_landing_below_floor_resets() {
        let mut f = setup();
        throw(&mut f);
        f.bag.elapsed_time = 1.3;
        f.bag.position = Vec3::new(0.5, f.config.floor_y - 0.01, -25.0);

        assert!(check_landing(&mut f.state, &mut f.bag, &f.config, &mut f.events));

        assert_eq!(f.state, ThrowState::Ready);
        assert_eq!(f.bag.elapsed_time, 0.0);
        assert_eq!(f.bag.position, f.config.launch_origin);
        assert!(f.events.landed);
    }

    #[test]
    fn test_no_landing_above_floor() {
        let mut f = setup();
        throw(&mut f);
        f.bag.position = Vec3::new(0.0, f.config.floor_y, -10.0);
        assert!(!check_landing(&mut f.state, &mut f.bag, &f.config, &mut f.events));
        assert_eq!(f.state, ThrowState::InFlight);
    }
}
