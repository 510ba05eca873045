//! Frames exchanged between the engine and an out-of-process host
//! (renderer / input layer)
//!
//! Uses postcard for efficient binary serialization

use game_core::{Commands, Session, ThrowState};
use postcard::{from_bytes, to_allocvec};

// ============================================================================
// Host to engine
// ============================================================================

/// One frame of input: elapsed time plus the commands gathered for it
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InputFrame {
    pub dt: f32,
    /// Aim rate, radians per second (+ = right)
    pub aim_delta: f32,
    /// Power rate, units per second
    pub power_delta: f32,
    pub throw: bool,
    pub freeze_toggle: bool,
    pub reset: bool,
}

impl InputFrame {
    pub fn commands(&self) -> Commands {
        Commands {
            aim_delta: self.aim_delta,
            power_delta: self.power_delta,
            throw: self.throw,
            freeze_toggle: self.freeze_toggle,
            reset: self.reset,
        }
    }

    /// Feed this frame to a session
    pub fn apply(&self, session: &mut Session) -> game_core::CoreResult<()> {
        session.advance(self.dt, &self.commands())
    }
}

// ============================================================================
// Engine to host
// ============================================================================

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameSnapshot {
    pub bag: [f32; 3],
    pub in_flight: bool,
    pub frozen: bool,
    /// Live aim arc
    pub preview: Vec<[f32; 3]>,
    pub hole_center: [f32; 3],
    /// Quaternion (x, y, z, w)
    pub hole_orientation: [f32; 4],
    /// Column-major 3x4 affine per board cell
    pub board_cells: Vec<[f32; 12]>,
    /// bottom-left, top-left, top-right, bottom-right
    pub board_corners: [[f32; 3]; 4],
    pub score: u32,
    pub time_remaining: f32,
    pub thrown: bool,
    pub hole_scored: bool,
    pub board_scored: bool,
    pub landed: bool,
    pub target_regenerated: bool,
    pub round_over: bool,
}

impl FrameSnapshot {
    pub fn capture(session: &Session) -> Self {
        let target = session.target();
        let events = session.events();
        Self {
            bag: session.position().to_array(),
            in_flight: session.throw_state() == ThrowState::InFlight,
            frozen: session.is_frozen(),
            preview: session.preview().iter().map(|p| p.to_array()).collect(),
            hole_center: target.hole_center.to_array(),
            hole_orientation: target.hole_orientation.to_array(),
            board_cells: target.cells.iter().map(|c| c.to_cols_array()).collect(),
            board_corners: target.board_corners.points().map(|p| p.to_array()),
            score: session.score(),
            time_remaining: session.time_remaining(),
            thrown: events.thrown,
            hole_scored: events.hole_scored,
            board_scored: events.board_scored,
            landed: events.landed,
            target_regenerated: events.target_regenerated,
            round_over: events.round_over,
        }
    }
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl InputFrame {
    /// Serialize input frame to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize input frame from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

impl FrameSnapshot {
    /// Serialize snapshot to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize snapshot from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}
