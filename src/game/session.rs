//! Game session: rival selection, the turn loop, and termination.
//!
//! The session owns the game state and the instantiated rival and drives
//! them against a [`Frontend`]. The frontend does all prompting and
//! printing; `None` from either read means input ended, which cancels
//! the game on the spot. The process exit itself belongs to the caller.

use log::{debug, info};

use crate::core::{GameRng, Outcome, Shape};
use crate::strategy::{Roster, StrategyId};

use super::state::GameState;

/// One completed turn, as handed to the frontend for display.
#[derive(Clone, Copy, Debug)]
pub struct TurnReport<'a> {
    /// 1-based turn number.
    pub turn: u32,
    /// The human's shape this turn.
    pub human: Shape,
    /// The rival's name.
    pub rival: &'a str,
    /// The rival's shape this turn.
    pub thrown: Shape,
    /// Result for the human.
    pub outcome: Outcome,
    /// Net score after this turn, positive when the human leads.
    pub score: i32,
}

/// Text-protocol seam between the session and the terminal.
///
/// Reads return `None` on end of input; the session treats that as
/// cancellation at any blocking point.
pub trait Frontend {
    /// Print the title line.
    fn banner(&mut self);

    /// List the roster and read a validated rival selection.
    fn choose_rival(&mut self, roster: &Roster) -> Option<StrategyId>;

    /// Print the rival's greeting.
    fn greet(&mut self, rival: &str);

    /// Prompt for and read the human's shape for the given 1-based turn.
    fn read_move(&mut self, turn: u32) -> Option<Shape>;

    /// Echo a completed turn.
    fn report(&mut self, report: &TurnReport<'_>);

    /// Print the rival's parting line.
    fn farewell(&mut self, rival: &str, human_won: bool);

    /// Print the goodbye line.
    fn goodbye(&mut self);
}

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The game ran to its natural end.
    Decided { human_won: bool },
    /// Input ended mid-game; no result was reported.
    Cancelled,
}

/// A single human-versus-rival game over a fixed roster.
pub struct Session {
    roster: Roster,
    max_turns: u32,
    rng: GameRng,
}

impl Session {
    /// Set up a session over `roster` with the given match length.
    #[must_use]
    pub fn new(roster: Roster, max_turns: u32, rng: GameRng) -> Self {
        assert!(!roster.is_empty(), "Roster must offer at least one rival");
        Self {
            roster,
            max_turns,
            rng,
        }
    }

    /// Run one full game against `frontend`.
    ///
    /// The goodbye line always prints; the farewell line only when the
    /// game reached a result. Strategy moves are computed before the
    /// human's move is read, from the history accumulated so far.
    pub fn run<F: Frontend>(&mut self, frontend: &mut F) -> Verdict {
        frontend.banner();

        let Some(id) = frontend.choose_rival(&self.roster) else {
            frontend.goodbye();
            return Verdict::Cancelled;
        };
        let mut rival = self.roster.spawn(id, &mut self.rng);
        info!("{} steps up for a {}-turn match", rival.name, self.max_turns);
        frontend.greet(rival.name);

        let mut state = GameState::new(self.max_turns);
        while state.is_live() {
            let thrown = rival.strategy.next_move(state.history(), &mut self.rng);
            let Some(human) = frontend.read_move(state.cur_turn() + 1) else {
                frontend.goodbye();
                return Verdict::Cancelled;
            };
            let outcome = human.versus(thrown);
            state.record(human, outcome);
            debug!(
                "turn {}: human {} vs {} {} -> human {} (score {})",
                state.cur_turn(),
                human,
                rival.name,
                thrown,
                outcome,
                state.cur_advance()
            );
            frontend.report(&TurnReport {
                turn: state.cur_turn(),
                human,
                rival: rival.name,
                thrown,
                outcome,
                score: state.cur_advance(),
            });
        }

        let human_won = state.human_won();
        frontend.farewell(rival.name, human_won);
        frontend.goodbye();
        Verdict::Decided { human_won }
    }
}
