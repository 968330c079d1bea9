//! Move history observed by the rival's strategy.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::shape::Shape;

/// Ordered, append-only record of one party's past moves.
///
/// Strategies read it; only the session appends. Matches are short, so
/// storage stays inline for typical lengths.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    moves: SmallVec<[Shape; 16]>,
}

impl MoveHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an observed move.
    pub fn push(&mut self, shape: Shape) {
        self.moves.push(shape);
    }

    /// The most recent move, if any.
    #[must_use]
    pub fn last(&self) -> Option<Shape> {
        self.moves.last().copied()
    }

    /// Number of observed moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether no move has been observed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Occurrences of each shape, indexed by [`Shape::index`].
    #[must_use]
    pub fn counts(&self) -> [usize; 3] {
        let mut counts = [0; 3];
        for shape in &self.moves {
            counts[shape.index()] += 1;
        }
        counts
    }

    /// Iterate over the moves, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Shape> + '_ {
        self.moves.iter().copied()
    }
}
