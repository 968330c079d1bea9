//! Line-oriented console frontend.
//!
//! One prompt or echo per line. Invalid input is re-prompted locally and
//! never escalates; end of input (Ctrl-D) makes the reads return `None`,
//! which the session treats as cancellation.

use std::io::{BufRead, Write};

use crate::core::Shape;
use crate::game::{Frontend, TurnReport};
use crate::strategy::{Roster, StrategyId};

/// Console implementation of the session frontend.
///
/// Generic over its reader and writer so tests can script whole games.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wrap a reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console and hand back its writer.
    ///
    /// Lets tests inspect the transcript of a finished game.
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one line, without its trailing newline.
    ///
    /// Returns `None` at end of input.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

impl<R: BufRead, W: Write> Frontend for Console<R, W> {
    fn banner(&mut self) {
        writeln!(self.output, "* Rock, Scissors, Paper Game *").ok();
    }

    fn choose_rival(&mut self, roster: &Roster) -> Option<StrategyId> {
        writeln!(self.output, "\nMighty competitors are waiting for you:").ok();
        for entry in roster.listing() {
            writeln!(self.output, "{}. {}", entry.id, entry.name).ok();
        }

        let count = roster.len() as u8;
        writeln!(self.output, "\nPlease enter your choice:").ok();
        loop {
            let line = self.read_line()?;
            match line.trim().parse::<u8>() {
                Ok(num) if (1..=count).contains(&num) => return Some(StrategyId::new(num)),
                _ => {
                    writeln!(self.output, "Please enter a number from 1 to {}:", count).ok();
                }
            }
        }
    }

    fn greet(&mut self, rival: &str) {
        writeln!(self.output, "\nHey human, {} greeting you!", rival).ok();
    }

    fn read_move(&mut self, turn: u32) -> Option<Shape> {
        writeln!(self.output, "\nTurn # {}", turn).ok();
        writeln!(self.output, "Your shape: R[ock], P[aper] or S[cissors]").ok();
        loop {
            let line = self.read_line()?.to_uppercase();
            match line.chars().next().and_then(Shape::from_letter) {
                Some(shape) => return Some(shape),
                None => {
                    writeln!(self.output, "Please enter a letter: 'r', 'p' or 's'...").ok();
                }
            }
        }
    }

    fn report(&mut self, report: &TurnReport<'_>) {
        writeln!(self.output, "\n   You throw {}", report.human).ok();
        writeln!(self.output, "   {} throw {}", report.rival, report.thrown).ok();
        writeln!(self.output, "   You {}", report.outcome).ok();
        writeln!(self.output, "   Game score: {}", report.score).ok();
    }

    fn farewell(&mut self, rival: &str, human_won: bool) {
        let parting = if human_won {
            "congratulations human, you won."
        } else {
            "he he, you can't beat me!"
        };
        writeln!(self.output, "\n{}: {}", rival, parting).ok();
    }

    fn goodbye(&mut self) {
        writeln!(self.output, "Goodbye.\n").ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Outcome;
    use std::io::Cursor;

    fn console_with(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.output).unwrap()
    }

    #[test]
    fn test_banner() {
        let mut console = console_with("");
        console.banner();
        assert_eq!(output_of(console), "* Rock, Scissors, Paper Game *\n");
    }

    #[test]
    fn test_choose_rival_lists_sorted_and_accepts() {
        let roster = Roster::standard();
        let mut console = console_with("3\n");

        let id = console.choose_rival(&roster);
        assert_eq!(id, Some(StrategyId::new(3)));

        let output = output_of(console);
        let listing = output
            .find("1. ARESUS")
            .and_then(|start| output.get(start..))
            .unwrap();
        assert!(listing.starts_with("1. ARESUS\n2. HERMUS\n3. HESTIS\n4. ZEUSUS\n"));
        assert!(output.contains("Please enter your choice:"));
    }

    #[test]
    fn test_choose_rival_reprompts_until_valid() {
        let roster = Roster::standard();
        let mut console = console_with("zero\n0\n5\n2\n");

        let id = console.choose_rival(&roster);
        assert_eq!(id, Some(StrategyId::new(2)));

        let output = output_of(console);
        assert_eq!(
            output.matches("Please enter a number from 1 to 4:").count(),
            3
        );
    }

    #[test]
    fn test_choose_rival_none_on_eof() {
        let roster = Roster::standard();
        let mut console = console_with("junk\n");

        // one bad line, then end of input
        assert_eq!(console.choose_rival(&roster), None);
    }

    #[test]
    fn test_read_move_first_letter_wins() {
        let mut console = console_with("rock\n");
        assert_eq!(console.read_move(1), Some(Shape::Rock));

        let mut console = console_with("Potato\n");
        assert_eq!(console.read_move(1), Some(Shape::Paper));

        let mut console = console_with("s\n");
        assert_eq!(console.read_move(1), Some(Shape::Scissors));
    }

    #[test]
    fn test_read_move_reprompts_on_junk() {
        let mut console = console_with("\nx\npaper\n");

        assert_eq!(console.read_move(2), Some(Shape::Paper));

        let output = output_of(console);
        assert!(output.contains("Turn # 2"));
        assert!(output.contains("Your shape: R[ock], P[aper] or S[cissors]"));
        assert_eq!(
            output
                .matches("Please enter a letter: 'r', 'p' or 's'...")
                .count(),
            2
        );
    }

    #[test]
    fn test_read_move_none_on_eof() {
        let mut console = console_with("");
        assert_eq!(console.read_move(1), None);
    }

    #[test]
    fn test_report_echoes_turn() {
        let mut console = console_with("");
        console.report(&TurnReport {
            turn: 1,
            human: Shape::Paper,
            rival: "HESTIS",
            thrown: Shape::Rock,
            outcome: Outcome::Win,
            score: 1,
        });

        let output = output_of(console);
        assert!(output.contains("   You throw Paper\n"));
        assert!(output.contains("   HESTIS throw Rock\n"));
        assert!(output.contains("   You won!\n"));
        assert!(output.contains("   Game score: 1\n"));
    }

    #[test]
    fn test_farewell_lines() {
        let mut console = console_with("");
        console.farewell("ZEUSUS", true);
        console.farewell("ZEUSUS", false);
        console.goodbye();

        let output = output_of(console);
        assert!(output.contains("ZEUSUS: congratulations human, you won.\n"));
        assert!(output.contains("ZEUSUS: he he, you can't beat me!\n"));
        assert!(output.ends_with("Goodbye.\n\n"));
    }
}
