//! The curated selection of games.
//!
//! A [`GameList`] holds game *names*, not records. Names are unique ignoring
//! ASCII case and are kept in case-insensitive sorted order. Games are picked
//! with the addresses described in [`address`](crate::address).

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::address::{is_wildcard, Address};
use crate::error::{ListError, Result};
use crate::game::BoardGame;

/// Selection key: the name with ASCII case folded.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NameKey(String);

impl NameKey {
    pub fn new(name: &str) -> Self {
        NameKey(name.trim().to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A case-insensitive set of game names.
///
/// Every operation that fails leaves the list unchanged.
///
/// # Example
///
/// ```
/// use meeple::{BoardGame, GameList};
///
/// let candidates = vec![
///     BoardGame::builder("Chess").build(),
///     BoardGame::builder("Monopoly").build(),
///     BoardGame::builder("Catan").build(),
/// ];
///
/// let mut list = GameList::new();
/// list.add("1-2", &candidates).unwrap();
/// list.add("catan", &candidates).unwrap();
/// assert_eq!(list.names(), ["Catan", "Chess", "Monopoly"]);
///
/// list.remove("2").unwrap();
/// assert_eq!(list.names(), ["Catan", "Monopoly"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameList {
    games: BTreeMap<NameKey, String>,
}

impl GameList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the games `address` selects from `candidates`.
    ///
    /// Candidates are numbered from 1 in the order given. A name already in
    /// the list keeps the spelling it was first added with. Returns how many
    /// names were new.
    pub fn add<I>(&mut self, address: &str, candidates: I) -> Result<usize>
    where
        I: IntoIterator,
        I::Item: Borrow<BoardGame>,
    {
        let candidates: Vec<I::Item> = candidates.into_iter().collect();
        if candidates.is_empty() {
            return Err(ListError::NoCandidates);
        }
        let names: Vec<&str> = candidates
            .iter()
            .map(|game| game.borrow().name())
            .collect();

        let selected = Address::resolve(address, &names)?.positions(names.len());
        let mut added = 0;
        for name in &names[selected] {
            if self.insert(name) {
                added += 1;
            }
        }

        tracing::debug!(address, added, total = self.games.len(), "added games");
        Ok(added)
    }

    /// Removes the games `address` selects from the list itself.
    ///
    /// The list is numbered from 1 in [`names`](Self::names) order. The
    /// wildcard always succeeds, even on an empty list. Returns how many names
    /// were removed.
    pub fn remove(&mut self, address: &str) -> Result<usize> {
        if is_wildcard(address) {
            let removed = self.games.len();
            self.games.clear();
            tracing::debug!(removed, "removed all games");
            return Ok(removed);
        }
        if self.games.is_empty() {
            return Err(ListError::EmptyList);
        }

        let names = self.names();
        let selected = Address::resolve(address, &names)?.positions(names.len());
        let removed = selected.len();
        for name in &names[selected] {
            self.games.remove(&NameKey::new(name));
        }

        tracing::debug!(address, removed, total = self.games.len(), "removed games");
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.games.clear();
    }

    pub fn count(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Returns `true` if a name equal to `name`, ignoring case, is listed.
    pub fn contains(&self, name: &str) -> bool {
        self.games.contains_key(&NameKey::new(name))
    }

    /// The listed names in case-insensitive order. Empty when the list is.
    pub fn names(&self) -> Vec<String> {
        self.games.values().cloned().collect()
    }

    /// Writes the names to `path`, one per line, in [`names`](Self::names)
    /// order. An existing file is replaced only once the new contents are
    /// fully written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Err(source) = self.write_to(path) {
            tracing::warn!(path = %path.display(), error = %source, "failed to save game list");
            return Err(ListError::save(path, source));
        }
        tracing::debug!(path = %path.display(), games = self.games.len(), "saved game list");
        Ok(())
    }

    // Written beside the target, then renamed over it.
    fn write_to(&self, path: &Path) -> io::Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            for name in self.games.values() {
                writeln!(writer, "{name}")?;
            }
            writer.flush()?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|err| err.error)?;
        Ok(())
    }

    fn insert(&mut self, name: &str) -> bool {
        let key = NameKey::new(name);
        if self.games.contains_key(&key) {
            return false;
        }
        self.games.insert(key, name.to_string());
        true
    }
}
