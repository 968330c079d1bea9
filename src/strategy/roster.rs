//! Roster of selectable rivals.
//!
//! The roster is built once at startup and handed to the session; it is
//! never mutated afterwards. Entries are keyed by the small integer id
//! shown at the selection prompt.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::GameRng;

use super::policies::{CyclicPool, LastCounter, LeastCommon, Uniform};
use super::Strategy;

/// Rival identifier as listed at the selection prompt (1-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StrategyId(u8);

impl StrategyId {
    /// Create a new rival ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw id as shown at the prompt.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for StrategyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

type Factory = fn(&mut GameRng) -> Box<dyn Strategy>;

/// A selectable rival: display name plus strategy factory.
#[derive(Clone)]
pub struct RosterEntry {
    /// Id the human types to pick this rival.
    pub id: StrategyId,
    /// Name used by the listing, greeting, echo and farewell lines.
    pub name: &'static str,
    factory: Factory,
}

/// An instantiated rival: its display name and owned strategy state.
pub struct Rival {
    pub name: &'static str,
    pub strategy: Box<dyn Strategy>,
}

/// Registry of selectable rivals.
///
/// ## Example
///
/// ```
/// use rps_duel::strategy::{Roster, StrategyId};
///
/// let roster = Roster::standard();
/// assert_eq!(roster.len(), 4);
/// assert_eq!(roster.get(StrategyId::new(1)).unwrap().name, "ARESUS");
/// ```
#[derive(Clone, Default)]
pub struct Roster {
    entries: FxHashMap<StrategyId, RosterEntry>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard four rivals, ids 1 through 4.
    #[must_use]
    pub fn standard() -> Self {
        let mut roster = Self::new();
        roster.register(1, "ARESUS", |rng| Box::new(CyclicPool::new(rng)));
        roster.register(2, "HERMUS", |_| Box::new(LastCounter));
        roster.register(3, "HESTIS", |_| Box::new(LeastCommon));
        roster.register(4, "ZEUSUS", |_| Box::new(Uniform));
        roster
    }

    /// Register a rival.
    ///
    /// Panics if a rival with the same id already exists.
    pub fn register(&mut self, id: u8, name: &'static str, factory: Factory) {
        let id = StrategyId::new(id);
        if self.entries.contains_key(&id) {
            panic!("Rival with id {} already registered", id);
        }
        self.entries.insert(id, RosterEntry { id, name, factory });
    }

    /// Look up an entry by id.
    #[must_use]
    pub fn get(&self, id: StrategyId) -> Option<&RosterEntry> {
        self.entries.get(&id)
    }

    /// Check if an id selects a rival.
    #[must_use]
    pub fn contains(&self, id: StrategyId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Number of selectable rivals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by ascending id, as shown at the prompt.
    #[must_use]
    pub fn listing(&self) -> Vec<&RosterEntry> {
        let mut entries: Vec<_> = self.entries.values().collect();
        entries.sort_by_key(|entry| entry.id);
        entries
    }

    /// Instantiate the rival for an already-validated id.
    ///
    /// The prompt range-checks ids before they reach this point, so the
    /// lookup cannot miss. Panics on an id nothing registered.
    #[must_use]
    pub fn spawn(&self, id: StrategyId, rng: &mut GameRng) -> Rival {
        let entry = self.entries.get(&id).expect("Rival not found in roster");
        Rival {
            name: entry.name,
            strategy: (entry.factory)(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MoveHistory;

    #[test]
    fn test_standard_roster() {
        let roster = Roster::standard();

        assert_eq!(roster.len(), 4);
        for id in 1..=4 {
            assert!(roster.contains(StrategyId::new(id)));
        }
        assert!(!roster.contains(StrategyId::new(0)));
        assert!(!roster.contains(StrategyId::new(5)));
    }

    #[test]
    fn test_listing_sorted_by_id() {
        let roster = Roster::standard();

        let names: Vec<_> = roster.listing().iter().map(|entry| entry.name).collect();
        assert_eq!(names, vec!["ARESUS", "HERMUS", "HESTIS", "ZEUSUS"]);

        let ids: Vec<_> = roster.listing().iter().map(|entry| entry.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_spawn_produces_working_strategy() {
        let roster = Roster::standard();
        let mut rng = GameRng::new(42);
        let history = MoveHistory::new();

        for id in 1..=4 {
            let mut rival = roster.spawn(StrategyId::new(id), &mut rng);
            // every rival can throw from an empty history
            let _ = rival.strategy.next_move(&history, &mut rng);
            assert!(!rival.name.is_empty());
        }
    }

    #[test]
    #[should_panic(expected = "not found in roster")]
    fn test_spawn_unknown_id_panics() {
        let roster = Roster::standard();
        let mut rng = GameRng::new(42);
        let _ = roster.spawn(StrategyId::new(9), &mut rng);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut roster = Roster::standard();
        roster.register(1, "IMPOSTOR", |_| Box::new(Uniform));
    }
}
