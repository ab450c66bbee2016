//! The master catalog: every known game, deduplicated by value.

use std::collections::hash_set;
use std::collections::HashSet;

use crate::game::BoardGame;

/// Immutable set of [`BoardGame`] records.
///
/// Records are unique by full value equality. Nothing in this crate mutates a
/// catalog after construction, so it can be shared across threads behind an
/// `Arc` without locking. Iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    games: HashSet<BoardGame>,
}

impl Catalog {
    /// Builds a catalog, dropping exact duplicates.
    pub fn new(games: impl IntoIterator<Item = BoardGame>) -> Self {
        let games: HashSet<BoardGame> = games.into_iter().collect();
        tracing::debug!(games = games.len(), "built catalog");
        Catalog { games }
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn contains(&self, game: &BoardGame) -> bool {
        self.games.contains(game)
    }

    pub fn iter(&self) -> hash_set::Iter<'_, BoardGame> {
        self.games.iter()
    }

    /// Returns every record as an owned view, in unspecified order.
    pub fn to_vec(&self) -> Vec<BoardGame> {
        self.games.iter().cloned().collect()
    }
}

impl FromIterator<BoardGame> for Catalog {
    fn from_iter<I: IntoIterator<Item = BoardGame>>(iter: I) -> Self {
        Catalog::new(iter)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a BoardGame;
    type IntoIter = hash_set::Iter<'a, BoardGame>;

    fn into_iter(self) -> Self::IntoIter {
        self.games.iter()
    }
}
