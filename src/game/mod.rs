//! Game state machine: scorekeeping and the session loop.

pub mod session;
pub mod state;

pub use session::{Frontend, Session, TurnReport, Verdict};
pub use state::GameState;
