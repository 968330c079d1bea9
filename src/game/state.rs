//! Turn and score bookkeeping for one game.

use serde::{Deserialize, Serialize};

use crate::core::{MoveHistory, Outcome, Shape};

/// Score and progress of a single game.
///
/// Tracks the turn counter, the human's net advance (one point per won
/// turn, minus one per lost turn), and the move history the rival's
/// strategy observes. Invariants: `cur_turn <= max_turns` and
/// `|cur_advance| <= cur_turn`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    max_turns: u32,
    cur_turn: u32,
    cur_advance: i32,
    history: MoveHistory,
}

impl GameState {
    /// Start a game of at most `max_turns` turns.
    #[must_use]
    pub fn new(max_turns: u32) -> Self {
        assert!(max_turns > 0, "Must allow at least 1 turn");
        Self {
            max_turns,
            cur_turn: 0,
            cur_advance: 0,
            history: MoveHistory::new(),
        }
    }

    /// Maximum number of turns in this game.
    #[must_use]
    pub fn max_turns(&self) -> u32 {
        self.max_turns
    }

    /// Completed turns so far.
    #[must_use]
    pub fn cur_turn(&self) -> u32 {
        self.cur_turn
    }

    /// Net score, positive when the human is ahead.
    #[must_use]
    pub fn cur_advance(&self) -> i32 {
        self.cur_advance
    }

    /// The human's moves as observed by the rival.
    #[must_use]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Record a completed turn: score the outcome for the human and
    /// append the human's move to the observed history.
    pub fn record(&mut self, human: Shape, outcome: Outcome) {
        assert!(
            self.cur_turn < self.max_turns,
            "Turn recorded past the end of the game"
        );
        self.cur_advance += outcome.delta();
        self.history.push(human);
        self.cur_turn += 1;
        debug_assert!(self.cur_advance.unsigned_abs() <= self.cur_turn);
        debug_assert_eq!(self.history.len() as u32, self.cur_turn);
    }

    /// Whether another turn should be played.
    ///
    /// The game stops when its turns run out, or early once the lead
    /// exceeds the turns remaining and the sign of the result can no
    /// longer flip. A lead exactly equal to the remaining turns still
    /// plays on.
    #[must_use]
    pub fn is_live(&self) -> bool {
        let move_rest = self.max_turns - self.cur_turn;
        if move_rest == 0 {
            return false;
        }
        move_rest >= self.cur_advance.unsigned_abs()
    }

    /// Whether the human finished strictly ahead.
    ///
    /// A drawn game counts as not won.
    #[must_use]
    pub fn human_won(&self) -> bool {
        self.cur_advance > 0
    }
}
