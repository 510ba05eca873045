//! Cornhole engine: aim, closed-form ballistics, throw state, procedural
//! target placement and scoring.
//!
//! Rendering, input devices and clocks live in the host, which drives a
//! [`Session`] with one [`Session::advance`] per frame.

pub mod components;
pub mod config;
pub mod error;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;
pub mod target;
pub mod trajectory;

pub use components::*;
pub use config::*;
pub use error::*;
pub use params::*;
pub use resources::*;
pub use session::*;
pub use target::{Aabb, BoardCorners, TargetPlacement};
