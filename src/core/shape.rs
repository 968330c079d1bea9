//! Shapes and turn outcomes.
//!
//! The three shapes sit in a fixed cycle: each shape beats exactly the
//! shape whose index is one greater modulo 3. Rock beats scissors,
//! scissors beats paper, paper beats rock.

use serde::{Deserialize, Serialize};

/// One of the three game shapes, in cyclic order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Rock = 0,
    Scissors = 1,
    Paper = 2,
}

impl Shape {
    /// All shapes, in cyclic order.
    pub const ALL: [Shape; 3] = [Shape::Rock, Shape::Scissors, Shape::Paper];

    /// Position of this shape in the cycle (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Resolve this shape against another, from this shape's perspective.
    ///
    /// ```
    /// use rps_duel::core::{Outcome, Shape};
    ///
    /// assert_eq!(Shape::Rock.versus(Shape::Scissors), Outcome::Win);
    /// assert_eq!(Shape::Rock.versus(Shape::Paper), Outcome::Loss);
    /// assert_eq!(Shape::Rock.versus(Shape::Rock), Outcome::Draw);
    /// ```
    #[must_use]
    pub fn versus(self, other: Shape) -> Outcome {
        match (3 + other.index() - self.index()) % 3 {
            0 => Outcome::Draw,
            1 => Outcome::Win,
            _ => Outcome::Loss,
        }
    }

    /// The unique shape that defeats this one.
    #[must_use]
    pub const fn counter(self) -> Shape {
        match self {
            Shape::Rock => Shape::Paper,
            Shape::Paper => Shape::Scissors,
            Shape::Scissors => Shape::Rock,
        }
    }

    /// Map the first letter of a move line (already uppercased) to a shape.
    ///
    /// Returns `None` for anything other than `R`, `P` or `S`.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Shape> {
        match letter {
            'R' => Some(Shape::Rock),
            'P' => Some(Shape::Paper),
            'S' => Some(Shape::Scissors),
            _ => None,
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Shape::Rock => "Rock",
            Shape::Scissors => "Scissors",
            Shape::Paper => "Paper",
        };
        write!(f, "{}", name)
    }
}

/// Per-turn result from one party's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Draw,
    Win,
    Loss,
}

impl Outcome {
    /// Score delta for the party whose perspective this is.
    #[must_use]
    pub const fn delta(self) -> i32 {
        match self {
            Outcome::Draw => 0,
            Outcome::Win => 1,
            Outcome::Loss => -1,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = match self {
            Outcome::Draw => "draw",
            Outcome::Win => "won!",
            Outcome::Loss => "lost",
        };
        write!(f, "{}", word)
    }
}
