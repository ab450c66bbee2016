//! Query planning over the master catalog.

use std::sync::Arc;

use meeple_seeker::{compile, sort_by, Dir};

use crate::catalog::Catalog;
use crate::game::{BoardGame, GameData};

/// Runs filter expressions against a fixed [`Catalog`].
///
/// Every query starts from the whole catalog, never from the previous
/// result. The planner remembers the last successful view as its
/// [`current`](Planner::current) view; a failed query leaves it as it was.
///
/// # Example
///
/// ```
/// use meeple::{BoardGame, Catalog, GameData, Planner};
///
/// let catalog = Catalog::new([
///     BoardGame::builder("Go").players(2, 2).rating(7.5).year(1000).build(),
///     BoardGame::builder("Chess").players(2, 2).rating(10.0).year(1500).build(),
///     BoardGame::builder("Go Fish").players(2, 10).rating(6.5).year(1900).build(),
/// ]);
///
/// let mut planner = Planner::new(catalog);
/// let names: Vec<_> = planner
///     .filter_sorted("rating >= 7", GameData::Year)
///     .unwrap()
///     .iter()
///     .map(|g| g.name())
///     .collect();
/// assert_eq!(names, ["Go", "Chess"]);
/// ```
#[derive(Debug, Clone)]
pub struct Planner {
    catalog: Arc<Catalog>,
    current: Vec<BoardGame>,
}

impl Planner {
    pub fn new(catalog: impl Into<Arc<Catalog>>) -> Self {
        let catalog = catalog.into();
        let current = catalog.to_vec();
        Planner { catalog, current }
    }

    /// Filters the catalog. An empty expression selects every game.
    pub fn filter(&mut self, expr: &str) -> meeple_seeker::Result<&[BoardGame]> {
        self.current = apply_filter(expr, self.catalog.iter())?;
        Ok(&self.current)
    }

    /// Filters the catalog and sorts the result ascending by `column`.
    pub fn filter_sorted(
        &mut self,
        expr: &str,
        column: GameData,
    ) -> meeple_seeker::Result<&[BoardGame]> {
        self.filter_sorted_by(expr, column, true)
    }

    /// Filters the catalog and sorts the result by `column`.
    pub fn filter_sorted_by(
        &mut self,
        expr: &str,
        column: GameData,
        ascending: bool,
    ) -> meeple_seeker::Result<&[BoardGame]> {
        let mut view = apply_filter(expr, self.catalog.iter())?;
        sort_games(&mut view, column, ascending)?;
        self.current = view;
        Ok(&self.current)
    }

    /// Restores the current view to the whole catalog.
    pub fn reset(&mut self) -> &[BoardGame] {
        self.current = self.catalog.to_vec();
        &self.current
    }

    pub fn current(&self) -> &[BoardGame] {
        &self.current
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

/// Filters `games` by a comma separated filter expression, keeping input
/// order.
pub fn apply_filter<'a, I>(expr: &str, games: I) -> meeple_seeker::Result<Vec<BoardGame>>
where
    I: IntoIterator<Item = &'a BoardGame>,
{
    let query = compile::<GameData>(expr)?;
    let view = query.filter_cloned(games);
    tracing::debug!(expr, clauses = query.clauses().len(), matched = view.len(), "filtered games");
    Ok(view)
}

/// Sorts `games` in place by `column`.
pub fn sort_games(
    games: &mut [BoardGame],
    column: GameData,
    ascending: bool,
) -> meeple_seeker::Result<()> {
    let dir = Dir::from_ascending(ascending);
    sort_by(games, column, dir)?;
    tracing::debug!(%column, %dir, games = games.len(), "sorted games");
    Ok(())
}
