//! Rival strategies and the roster they are selected from.
//!
//! A strategy observes the human's move history and produces the rival's
//! next shape. Strategies are trait objects owned by the session for the
//! duration of one game; the [`Roster`] maps the small integer ids shown
//! at the selection prompt to factories.

pub mod policies;
pub mod roster;

pub use policies::{CyclicPool, LastCounter, LeastCommon, Uniform};
pub use roster::{Rival, Roster, RosterEntry, StrategyId};

use crate::core::{GameRng, MoveHistory, Shape};

/// A rival policy mapping observed move history to its next move.
///
/// Called once per turn, after the human's previous move (if any) has
/// been appended to `history`. Random decisions draw from the supplied
/// `rng`.
pub trait Strategy {
    /// Produce the next shape to throw.
    fn next_move(&mut self, history: &MoveHistory, rng: &mut GameRng) -> Shape;
}
