use glam::{Vec2, Vec3};

use crate::{Config, Events, Params, ProjectileState, RoundState, TargetPlacement, ThrowState};

/// What a scoring flight landed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Hole,
    Board,
}

impl Hit {
    pub fn points(self) -> u32 {
        match self {
            Hit::Hole => Params::HOLE_POINTS,
            Hit::Board => Params::BOARD_POINTS,
        }
    }
}

/// Within the hole radius on the x-z plane and inside the hole's height band
pub fn hits_hole(position: Vec3, target: &TargetPlacement, config: &Config) -> bool {
    let dist = Vec2::new(position.x, position.z)
        .distance(Vec2::new(target.hole_center.x, target.hole_center.z));
    dist <= config.hole_radius && config.in_hole_band(position.y)
}

/// Inside the box spanned by the recorded board corners
pub fn hits_board(position: Vec3, target: &TargetPlacement) -> bool {
    target.board_corners.bounds().contains(position)
}

/// Score the bag's current position against the target.
///
/// Only evaluated in flight, with time on the clock and the latch open. The
/// hole is tested first; a hit closes the latch so a flight scores once.
/// The caller ends the flight and regenerates the target.
pub fn check_scoring(
    state: ThrowState,
    projectile: &ProjectileState,
    target: &TargetPlacement,
    round: &mut RoundState,
    config: &Config,
    events: &mut Events,
) -> Option<Hit> {
    if !state.is_in_flight() || !round.can_score() {
        return None;
    }

    let pos = projectile.position;
    let hit = if hits_hole(pos, target, config) {
        round.hole_hits += 1;
        events.hole_scored = true;
        Hit::Hole
    } else if hits_board(pos, target) {
        round.board_hits += 1;
        events.board_scored = true;
        Hit::Board
    } else {
        return None;
    };

    round.score += hit.points();
    round.scored_this_throw = true;
    tracing::info!(?hit, points = hit.points(), score = round.score, "scored");
    Some(hit)
}
