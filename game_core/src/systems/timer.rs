use crate::{Events, RoundState, Time};

/// Count the round timer down on the session clock
pub fn tick_round(round: &mut RoundState, time: &Time, events: &mut Events) {
    if round.tick(time.dt) {
        events.round_over = true;
        tracing::info!(score = round.score, throws = round.throws, "round over");
    }
}
