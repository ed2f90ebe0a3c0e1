//! Ordered game snapshots.
//!
//! A full run of `T` turns produces `T + 1` snapshots: the initial state and
//! one per committed turn. Snapshots are independent deep copies of [`Game`].

use serde::{Deserialize, Serialize};

use crate::game::Game;

/// Snapshots in recording order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    snapshots: Vec<Game>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty history with room for `capacity` snapshots.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            snapshots: Vec::with_capacity(capacity),
        }
    }

    /// Appends a clone of `game`.
    pub fn record(&mut self, game: &Game) {
        self.snapshots.push(game.clone());
    }

    /// Number of snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// True when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshots in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Game> {
        self.snapshots.iter()
    }

    /// Snapshot at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Game> {
        self.snapshots.get(index)
    }

    /// The state before the first turn.
    #[must_use]
    pub fn initial(&self) -> Option<&Game> {
        self.snapshots.first()
    }

    /// The most recent snapshot.
    #[must_use]
    pub fn last(&self) -> Option<&Game> {
        self.snapshots.last()
    }

    /// Consumes the history.
    #[must_use]
    pub fn into_vec(self) -> Vec<Game> {
        self.snapshots
    }

    /// Compact JSON array of snapshots.
    ///
    /// # Errors
    ///
    /// Fails only if a value cannot be represented in JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Indented JSON array of snapshots.
    ///
    /// # Errors
    ///
    /// Fails only if a value cannot be represented in JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Game;
    type IntoIter = std::slice::Iter<'a, Game>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}
