//! Meeple - plan a game night from a board game catalog.
//!
//! The crate ties the generic query engine in [`meeple_seeker`] to a concrete
//! record, [`BoardGame`], and adds the pieces a catalog browser needs:
//!
//! - [`Catalog`]: the immutable master set of games
//! - [`Planner`]: filters and sorts the catalog into views
//! - [`GameList`]: a curated, case-insensitive selection of game names,
//!   picked from a view by name, position, range or the `ALL` wildcard
//!
//! # Quick Start
//!
//! ```rust
//! use meeple::{BoardGame, Catalog, GameData, GameList, Planner};
//!
//! let catalog = Catalog::new([
//!     BoardGame::builder("Chess").players(2, 2).rating(7.5).build(),
//!     BoardGame::builder("Monopoly").players(2, 8).rating(4.4).build(),
//!     BoardGame::builder("Catan").players(3, 4).rating(7.1).build(),
//! ]);
//!
//! let mut planner = Planner::new(catalog);
//! let mut list = GameList::new();
//!
//! let view = planner
//!     .filter_sorted_by("rating > 5, maxPlayers >= 2", GameData::Rating, false)
//!     .unwrap();
//! list.add("1", view).unwrap();
//!
//! assert_eq!(list.names(), ["Chess"]);
//! ```
//!
//! # Filter Expressions
//!
//! A filter is a comma separated list of `attribute operator value` clauses,
//! all of which must hold. Attributes are `name`, `minPlayers`, `maxPlayers`,
//! `difficulty`, `rating` and `year`. Clauses that cannot be understood are
//! skipped; a number that does not parse fails the whole filter.
//!
//! ```text
//! minPlayers >= 2, maxPlayers <= 4, name ~= quest
//! ```
//!
//! # Logging
//!
//! Events are emitted through [`tracing`]. Install a subscriber in the
//! application to see them.

pub mod address;
pub mod catalog;
pub mod error;
pub mod game;
pub mod game_list;
pub mod planner;

pub use address::WILDCARD;
pub use catalog::Catalog;
pub use error::{ListError, Result};
pub use game::{BoardGame, BoardGameBuilder, GameData};
pub use game_list::{GameList, NameKey};
pub use planner::{apply_filter, sort_games, Planner};

pub use meeple_seeker::{Dir, Op, SeekerError};
