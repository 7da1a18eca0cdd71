//! Simulation module
//!
//! All gameplay logic lives here:
//! - Fixed timestep only
//! - Randomness only through an injected `RandomSource`
//! - Stable iteration order (by slot)
//! - No rendering or platform dependencies

pub mod body;
pub mod disc;
pub mod star;
pub mod state;
pub mod tick;

pub use body::{Body, Circle};
pub use disc::Disc;
pub use star::Star;
pub use state::{GameEvent, GameState, launch_food, place_hazard};
pub use tick::{TickInput, eat, poison, tick};
