//! # rps-duel
//!
//! A terminal rock-scissors-paper arena: one human against one of four
//! programmable rivals over a fixed number of turns, with an early stop
//! once the lead can no longer be overturned.
//!
//! ## Architecture
//!
//! - **Library core**: the shape algebra, the rival strategies, and the
//!   turn/score state machine, all behind narrow seams. Randomness comes
//!   from a seeded [`GameRng`]; all terminal I/O sits behind the
//!   [`Frontend`] trait, so the whole game runs under test without a
//!   terminal.
//!
//! - **Console binary**: implements the frontend as a line protocol over
//!   stdin/stdout and wires up the standard roster.
//!
//! ## Modules
//!
//! - `core`: shapes, outcomes, move history, RNG
//! - `strategy`: the rival policies and the roster they are picked from
//! - `game`: game state, the session loop, the frontend seam
//! - `console`: line-oriented frontend implementation

pub mod console;
pub mod core;
pub mod game;
pub mod strategy;

// Re-export commonly used types
pub use crate::console::Console;
pub use crate::core::{GameRng, MoveHistory, Outcome, Shape};
pub use crate::game::{Frontend, GameState, Session, TurnReport, Verdict};
pub use crate::strategy::{
    CyclicPool, LastCounter, LeastCommon, Rival, Roster, RosterEntry, Strategy, StrategyId,
    Uniform,
};
