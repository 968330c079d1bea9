//! The four rival policies.
//!
//! Each predicts the human's next move a different way:
//! - [`CyclicPool`]: oblivious, cycles a fixed random pool
//! - [`LastCounter`]: bets the human repeats their last move
//! - [`LeastCommon`]: bets the human's rarest move comes up
//! - [`Uniform`]: pure noise

use crate::core::{GameRng, MoveHistory, Shape};

use super::Strategy;

// =============================================================================
// CyclicPool
// =============================================================================

/// Oblivious periodic rival.
///
/// Draws a pool of 4 random shapes once, then cycles through it forever,
/// ignoring the human entirely. The cursor advances before each read, so
/// the first throw is the pool's second element.
#[derive(Clone, Debug)]
pub struct CyclicPool {
    pool: [Shape; 4],
    cursor: usize,
}

impl CyclicPool {
    /// Draw the pool from `rng`.
    #[must_use]
    pub fn new(rng: &mut GameRng) -> Self {
        Self {
            pool: std::array::from_fn(|_| rng.shape()),
            cursor: 0,
        }
    }
}

impl Strategy for CyclicPool {
    fn next_move(&mut self, _history: &MoveHistory, _rng: &mut GameRng) -> Shape {
        self.cursor = if self.cursor < self.pool.len() - 1 {
            self.cursor + 1
        } else {
            0
        };
        self.pool[self.cursor]
    }
}

// =============================================================================
// LastCounter
// =============================================================================

/// Bets the human repeats their previous move.
///
/// With probability 0.8, and at least one move observed, throws the
/// counter of the human's last shape; otherwise throws a random one.
#[derive(Clone, Copy, Debug, Default)]
pub struct LastCounter;

impl Strategy for LastCounter {
    fn next_move(&mut self, history: &MoveHistory, rng: &mut GameRng) -> Shape {
        match history.last() {
            Some(last) if rng.chance(0.8) => last.counter(),
            _ => rng.shape(),
        }
    }
}

// =============================================================================
// LeastCommon
// =============================================================================

/// Bets the human's least-used shape comes up next.
///
/// Counts the full history and throws the counter of the predicted
/// shape. Rock is predicted when strictly rarest, then paper when
/// strictly rarest; every remaining case (scissors strictly rarest, or
/// any tie) predicts scissors with probability 0.8 and paper otherwise.
#[derive(Clone, Copy, Debug, Default)]
pub struct LeastCommon;

impl Strategy for LeastCommon {
    fn next_move(&mut self, history: &MoveHistory, rng: &mut GameRng) -> Shape {
        if history.is_empty() {
            return rng.shape();
        }

        let [rocks, scissors, papers] = history.counts();
        let predicted = if rocks < papers && rocks < scissors {
            Shape::Rock
        } else if papers < rocks && papers < scissors {
            Shape::Paper
        } else if rng.chance(0.8) {
            Shape::Scissors
        } else {
            Shape::Paper
        };
        predicted.counter()
    }
}

// =============================================================================
// Uniform
// =============================================================================

/// Pure noise: a uniformly random shape every turn.
#[derive(Clone, Copy, Debug, Default)]
pub struct Uniform;

impl Strategy for Uniform {
    fn next_move(&mut self, _history: &MoveHistory, rng: &mut GameRng) -> Shape {
        rng.shape()
    }
}
