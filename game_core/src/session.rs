use glam::Vec3;

use crate::error::{CoreError, CoreResult};
use crate::systems::*;
use crate::target::{self, TargetPlacement};
use crate::trajectory;
use crate::{
    Commands, Config, Events, GameRng, LaunchParameters, Params, ProjectileState, RoundState,
    ThrowState, Time,
};

/// One round of cornhole: the single owner of all engine state.
///
/// The host calls [`Session::advance`] once per frame and reads the accessors
/// to draw. Everything is a deterministic function of the seed, the dt values
/// and the commands.
pub struct Session {
    config: Config,
    time: Time,
    launch: LaunchParameters,
    projectile: ProjectileState,
    throw_state: ThrowState,
    target: TargetPlacement,
    round: RoundState,
    events: Events,
    rng: GameRng,
    preview: Vec<Vec3>,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, Config::new())
    }

    /// Start a round with host-supplied tuning. Inverted or non-finite aim
    /// bounds are normalised rather than rejected.
    pub fn with_config(seed: u64, config: Config) -> Self {
        let normalized = config.clone().normalized();
        if normalized != config {
            tracing::warn!(
                angle_limit = config.angle_limit,
                power_min = config.power_min,
                power_max = config.power_max,
                "aim bounds normalised"
            );
        }
        let config = normalized;
        let mut rng = GameRng::new(seed);
        let target = target::generate(rng.next_seed());
        let mut session = Self {
            time: Time::new(0.0, 0.0),
            launch: LaunchParameters::default(),
            projectile: ProjectileState::new(config.launch_origin),
            throw_state: ThrowState::Ready,
            target,
            round: RoundState::new(config.round_length),
            events: Events::new(),
            rng,
            preview: Vec::new(),
            config,
        };
        session.refresh_preview();
        tracing::info!(
            seed,
            round_length = session.round.time_remaining,
            hole = ?session.target.hole_center,
            "round started"
        );
        session
    }

    /// Run one frame.
    ///
    /// Commands apply once, then the frame is played out in fixed substeps
    /// (at least one, so a zero or frozen frame still refreshes positions).
    pub fn advance(&mut self, dt: f32, commands: &Commands) -> CoreResult<()> {
        if dt.is_nan() || dt < 0.0 {
            return Err(CoreError::InvalidDt(dt));
        }
        let clamped_dt = dt.min(self.config.max_dt);

        // Clear events at start of frame
        self.events.clear();

        if commands.reset {
            self.restart_round();
        }
        apply_freeze(&mut self.time, commands);
        apply_aim(&mut self.launch, commands, clamped_dt, &self.config);
        if commands.throw {
            begin_throw(
                &mut self.throw_state,
                &mut self.projectile,
                &self.launch,
                &mut self.round,
                &self.config,
                &mut self.events,
            );
        }

        let mut remaining_dt = clamped_dt;
        loop {
            let step_dt = if self.config.fixed_dt > 0.0 {
                remaining_dt.min(self.config.fixed_dt)
            } else {
                remaining_dt
            };
            remaining_dt -= step_dt;
            self.substep(step_dt);
            if remaining_dt <= 0.0 {
                break;
            }
        }

        self.refresh_preview();
        Ok(())
    }

    fn substep(&mut self, dt: f32) {
        self.time.dt = dt;

        // 1. Round timer (session clock)
        tick_round(&mut self.round, &self.time, &mut self.events);

        // 2. Move the bag (flight clock)
        move_projectile(&mut self.projectile, self.throw_state, &self.time, &self.config);

        // 3. Fell through the floor
        check_landing(
            &mut self.throw_state,
            &mut self.projectile,
            &self.config,
            &mut self.events,
        );

        // 4. Hole or board
        let hit = check_scoring(
            self.throw_state,
            &self.projectile,
            &self.target,
            &mut self.round,
            &self.config,
            &mut self.events,
        );
        if hit.is_some() {
            finish_throw(&mut self.throw_state, &mut self.projectile, &self.config);
            self.regenerate_target();
        }

        self.time.now += dt;
    }

    /// Fresh round: full timer, zero score, bag back in hand, new target.
    /// Aim carries over.
    fn restart_round(&mut self) {
        self.round = RoundState::new(self.config.round_length);
        finish_throw(&mut self.throw_state, &mut self.projectile, &self.config);
        self.regenerate_target();
        tracing::info!(round_length = self.round.time_remaining, "round restarted");
    }

    fn regenerate_target(&mut self) {
        let seed = self.rng.next_seed();
        self.target = target::generate(seed);
        if !self.target.is_consistent() {
            tracing::warn!(
                seed,
                x = self.target.x_offset,
                depth = self.target.depth,
                "generated placement is inconsistent"
            );
        }
        self.events.target_regenerated = true;
        tracing::debug!(
            seed,
            hole = ?self.target.hole_center,
            yaw = self.target.board_yaw,
            "target regenerated"
        );
    }

    fn refresh_preview(&mut self) {
        self.preview = trajectory::sample_arc(
            self.config.launch_origin,
            self.live_velocity(),
            self.config.gravity,
            Params::PREVIEW_STEP,
            self.config.floor_y,
            Params::PREVIEW_MAX_SAMPLES,
        );
    }

    /// Current bag position
    pub fn position(&self) -> Vec3 {
        self.projectile.position
    }

    /// Sampled live aim arc, starting at the launch origin
    pub fn preview(&self) -> &[Vec3] {
        &self.preview
    }

    /// Where the live aim would come down through the floor
    pub fn predicted_landing(&self) -> Option<Vec3> {
        let vel = self.live_velocity();
        let origin = self.config.launch_origin;
        trajectory::time_to_height(origin.y, vel.y, self.config.gravity.y, self.config.floor_y)
            .map(|t| trajectory::position(origin, vel, t, self.config.gravity))
    }

    pub fn live_velocity(&self) -> Vec3 {
        self.launch.live_velocity(&self.config)
    }

    pub fn target(&self) -> &TargetPlacement {
        &self.target
    }

    pub fn score(&self) -> u32 {
        self.round.score
    }

    pub fn time_remaining(&self) -> f32 {
        self.round.time_remaining
    }

    pub fn throw_state(&self) -> ThrowState {
        self.throw_state
    }

    pub fn launch(&self) -> &LaunchParameters {
        &self.launch
    }

    pub fn projectile(&self) -> &ProjectileState {
        &self.projectile
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn time(&self) -> &Time {
        &self.time
    }

    pub fn is_frozen(&self) -> bool {
        self.time.frozen
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_ready_at_origin() {
        let session = Session::new(1);
        assert_eq!(session.throw_state(), ThrowState::Ready);
        assert_eq!(session.position(), Params::LAUNCH_ORIGIN);
        assert_eq!(session.score(), 0);
        assert_eq!(session.time_remaining(), Params::ROUND_LENGTH);
        assert!(!session.preview().is_empty());
        assert_eq!(session.preview()[0], Params::LAUNCH_ORIGIN);
    }

    #[test]
    fn test_negative_dt_rejected() {
        let mut session = Session::new(1);
        let before = session.time_remaining();
        assert_eq!(
            session.advance(-0.1, &Commands::throw()),
            Err(CoreError::InvalidDt(-0.1))
        );
        assert!(session.advance(f32::NAN, &Commands::new()).is_err());
        assert_eq!(session.throw_state(), ThrowState::Ready, "Rejected frame has no effect");
        assert_eq!(session.time_remaining(), before);
    }

    #[test]
    fn test_large_dt_is_clamped() {
        let mut session = Session::new(1);
        session.advance(5.0, &Commands::new()).unwrap();
        let spent = Params::ROUND_LENGTH - session.time_remaining();
        assert!((spent - Params::MAX_DT).abs() < 1e-4);
        assert!((session.time().now - Params::MAX_DT).abs() < 1e-4);
    }

    #[test]
    fn test_predicted_landing_matches_last_preview_region() {
        let session = Session::new(3);
        let landing = session.predicted_landing().expect("default aim lands");
        assert!(landing.y.abs() < 1e-3);
        let last = *session.preview().last().unwrap();
        assert!(last.y < 0.0);
        assert!((last.z - landing.z).abs() < 2.0);
    }

    #[test]
    fn test_inverted_aim_bounds_do_not_panic() {
        let config = Config {
            angle_limit: -0.4,
            power_min: 35.0,
            power_max: 20.0,
            ..Config::default()
        };
        let mut session = Session::with_config(6, config);
        session.advance(0.1, &Commands::aim(10.0, 200.0)).unwrap();
        assert_eq!(session.launch().angle, 0.4);
        assert_eq!(session.launch().power, 35.0);
        assert_eq!(session.config().power_min, 20.0);
    }

    #[test]
    fn test_non_finite_aim_rates_leave_aim_usable() {
        let mut session = Session::new(7);
        let before = *session.launch();
        session.advance(0.1, &Commands::aim(f32::NAN, 0.0)).unwrap();
        session.advance(0.0, &Commands::aim(f32::INFINITY, f32::INFINITY)).unwrap();
        assert_eq!(*session.launch(), before);
        assert!(session.preview().iter().all(|p| p.is_finite()));

        session.advance(0.0, &Commands::throw()).unwrap();
        session.advance(0.1, &Commands::new()).unwrap();
        assert_eq!(session.throw_state(), ThrowState::InFlight, "Bag is airborne");
        assert!(session.position().is_finite());
    }

    #[test]
    fn test_same_seed_same_targets() {
        let a = Session::new(99);
        let b = Session::new(99);
        assert_eq!(a.target(), b.target());
    }
}
