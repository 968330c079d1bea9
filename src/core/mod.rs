//! Core value types: shapes, outcomes, move history, RNG.
//!
//! These are the building blocks the strategies and the session are
//! written against. Nothing here prompts, prints, or terminates.

pub mod history;
pub mod rng;
pub mod shape;

pub use history::MoveHistory;
pub use rng::GameRng;
pub use shape::{Outcome, Shape};
