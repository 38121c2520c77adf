//! Allocation events and results.

use std::fmt;

/// One player receiving one item.
///
/// `value` is the player's own valuation of the item at the moment it
/// was picked.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocationEvent {
    /// Zero-based index of the receiving player.
    pub player: usize,
    /// Zero-based index of the item received.
    pub item: usize,
    /// The receiving player's valuation of the item.
    pub value: f64,
}

impl AllocationEvent {
    pub fn new(player: usize, item: usize, value: f64) -> Self {
        Self {
            player,
            item,
            value,
        }
    }
}

impl fmt::Display for AllocationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "player {} takes item {} with value {}",
            self.player, self.item, self.value
        )
    }
}

/// Result of a weighted round-robin run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Allocation {
    /// Events in the order they were produced. One per item.
    pub events: Vec<AllocationEvent>,

    /// Number of items each player received, indexed by player.
    pub allocated_counts: Vec<usize>,
}

impl Allocation {
    /// Number of items allocated.
    pub fn num_items(&self) -> usize {
        self.events.len()
    }

    /// Number of players in the run.
    pub fn num_players(&self) -> usize {
        self.allocated_counts.len()
    }

    /// Items received by `player`, in pick order.
    pub fn bundle(&self, player: usize) -> Vec<usize> {
        self.events
            .iter()
            .filter(|e| e.player == player)
            .map(|e| e.item)
            .collect()
    }

    /// Bundles for every player, indexed by player.
    ///
    /// Covers every player in `allocated_counts` and every player named by
    /// an event, whichever is larger.
    pub fn bundles(&self) -> Vec<Vec<usize>> {
        let len = self
            .events
            .iter()
            .map(|e| e.player + 1)
            .fold(self.num_players(), usize::max);
        let mut bundles = vec![Vec::new(); len];
        for e in &self.events {
            bundles[e.player].push(e.item);
        }
        bundles
    }

    /// Sum of the values `player` observed for the items it received.
    pub fn utility(&self, player: usize) -> f64 {
        self.events
            .iter()
            .filter(|e| e.player == player)
            .map(|e| e.value)
            .sum()
    }

    /// Human-readable trace, one line per event.
    pub fn trace(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }
}
