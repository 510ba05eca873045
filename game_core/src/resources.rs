/// Session clock. Always advances with the host's dt; the flight clock
/// lives on the projectile and is the only one the freeze toggle stops.
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed session time
    pub frozen: bool,
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self {
            dt,
            now,
            frozen: false,
        }
    }

    pub fn toggle_freeze(&mut self) {
        self.frozen = !self.frozen;
    }

    /// Amount the flight clock may advance this step
    pub fn flight_dt(&self) -> f32 {
        if self.frozen {
            0.0
        } else {
            self.dt
        }
    }
}

/// Score and timer for the running round
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundState {
    pub score: u32,
    pub time_remaining: f32,
    /// Latch: at most one score per flight
    pub scored_this_throw: bool,
    pub throws: u32,
    pub hole_hits: u32,
    pub board_hits: u32,
}

impl RoundState {
    pub fn new(round_length: f32) -> Self {
        Self {
            score: 0,
            time_remaining: round_length.max(0.0),
            scored_this_throw: false,
            throws: 0,
            hole_hits: 0,
            board_hits: 0,
        }
    }

    /// Count the timer down. Returns true on the step that reaches zero.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.time_remaining <= 0.0 {
            return false;
        }
        self.time_remaining = (self.time_remaining - dt).max(0.0);
        self.time_remaining <= 0.0
    }

    pub fn is_over(&self) -> bool {
        self.time_remaining <= 0.0
    }

    /// Scoring is open while time remains and this flight has not scored yet
    pub fn can_score(&self) -> bool {
        !self.is_over() && !self.scored_this_throw
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seed for the next target placement
    pub fn next_seed(&mut self) -> u64 {
        use rand::Rng;
        self.0.gen()
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub thrown: bool,
    pub hole_scored: bool,
    pub board_scored: bool,
    pub landed: bool,
    pub target_regenerated: bool,
    pub round_over: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Input for one frame, already translated from device events by the host.
///
/// `aim_delta` (radians) and `power_delta` are rates per second; they are
/// scaled by the frame's dt on the session clock.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Commands {
    pub aim_delta: f32,
    pub power_delta: f32,
    pub throw: bool,
    pub freeze_toggle: bool,
    pub reset: bool,
}

impl Commands {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn throw() -> Self {
        Self {
            throw: true,
            ..Self::default()
        }
    }

    pub fn aim(aim_delta: f32, power_delta: f32) -> Self {
        Self {
            aim_delta,
            power_delta,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_timer_counts_down_and_stops_at_zero() {
        let mut round = RoundState::new(1.0);
        assert!(!round.tick(0.4));
        assert!((round.time_remaining - 0.6).abs() < 1e-6);
        assert!(round.tick(5.0), "Reaching zero is reported once");
        assert_eq!(round.time_remaining, 0.0);
        assert!(!round.tick(1.0));
        assert_eq!(round.time_remaining, 0.0, "Timer never goes negative");
        assert!(round.is_over());
    }

    #[test]
    fn test_can_score_respects_latch_and_timer() {
        let mut round = RoundState::new(10.0);
        assert!(round.can_score());
        round.scored_this_throw = true;
        assert!(!round.can_score());
        round.scored_this_throw = false;
        round.tick(10.0);
        assert!(!round.can_score());
    }

    #[test]
    fn test_freeze_stops_flight_clock_only() {
        let mut time = Time::new(0.1, 0.0);
        assert_eq!(time.flight_dt(), 0.1);
        time.toggle_freeze();
        assert_eq!(time.flight_dt(), 0.0);
        assert_eq!(time.dt, 0.1);
        time.toggle_freeze();
        assert!(!time.frozen);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.thrown = true;
        events.hole_scored = true;
        events.board_scored = true;
        events.landed = true;
        events.target_regenerated = true;
        events.round_over = true;

        events.clear();

        assert_eq!(events, Events::default());
    }

    #[test]
    fn test_rng_seeds_are_reproducible() {
        let mut a = GameRng::new(7);
        let mut b = GameRng::new(7);
        assert_eq!(a.next_seed(), b.next_seed());
        assert_eq!(a.next_seed(), b.next_seed());
    }
}
