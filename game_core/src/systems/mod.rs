pub mod input;
pub mod movement;
pub mod scoring;
pub mod throw;
pub mod timer;

pub use input::*;
pub use movement::*;
pub use scoring::*;
pub use throw::*;
pub use timer::*;
