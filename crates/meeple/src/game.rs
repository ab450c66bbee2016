//! The board game record and its attribute identifiers.

use std::hash::{Hash, Hasher};

use meeple_seeker::{FieldKind, Number, Seekable, SeekerField, Value};
use serde::{Deserialize, Serialize};

/// One catalog entry.
///
/// Records are immutable once built. Two records are equal only when every
/// attribute is equal; floating point attributes compare by bit pattern, so
/// `BoardGame` is a lawful `HashSet` key.
///
/// # Example
///
/// ```
/// use meeple::BoardGame;
///
/// let chess = BoardGame::builder("Chess")
///     .id(7)
///     .players(2, 2)
///     .play_time(10, 20)
///     .difficulty(3.5)
///     .rank(100)
///     .rating(7.5)
///     .year(2000)
///     .build();
///
/// assert_eq!(chess.name(), "Chess");
/// assert_eq!(chess.max_players(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardGame {
    name: String,
    id: u32,
    min_players: i32,
    max_players: i32,
    min_play_time: i32,
    max_play_time: i32,
    difficulty: f64,
    rank: i32,
    rating: f64,
    year_published: i32,
}

impl BoardGame {
    /// Starts building a record with the given name. Every other attribute
    /// defaults to zero.
    pub fn builder(name: impl Into<String>) -> BoardGameBuilder {
        BoardGameBuilder {
            game: BoardGame {
                name: name.into(),
                id: 0,
                min_players: 0,
                max_players: 0,
                min_play_time: 0,
                max_play_time: 0,
                difficulty: 0.0,
                rank: 0,
                rating: 0.0,
                year_published: 0,
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn min_players(&self) -> i32 {
        self.min_players
    }

    pub fn max_players(&self) -> i32 {
        self.max_players
    }

    pub fn min_play_time(&self) -> i32 {
        self.min_play_time
    }

    pub fn max_play_time(&self) -> i32 {
        self.max_play_time
    }

    pub fn difficulty(&self) -> f64 {
        self.difficulty
    }

    pub fn rank(&self) -> i32 {
        self.rank
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn year_published(&self) -> i32 {
        self.year_published
    }
}

impl PartialEq for BoardGame {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.id == other.id
            && self.min_players == other.min_players
            && self.max_players == other.max_players
            && self.min_play_time == other.min_play_time
            && self.max_play_time == other.max_play_time
            && self.difficulty.to_bits() == other.difficulty.to_bits()
            && self.rank == other.rank
            && self.rating.to_bits() == other.rating.to_bits()
            && self.year_published == other.year_published
    }
}

impl Eq for BoardGame {}

impl Hash for BoardGame {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.id.hash(state);
        self.min_players.hash(state);
        self.max_players.hash(state);
        self.min_play_time.hash(state);
        self.max_play_time.hash(state);
        self.difficulty.to_bits().hash(state);
        self.rank.hash(state);
        self.rating.to_bits().hash(state);
        self.year_published.hash(state);
    }
}

impl Seekable for BoardGame {
    type Field = GameData;

    fn seeker_field_value(&self, field: GameData) -> Value<'_> {
        match field {
            GameData::Name => Value::String(&self.name),
            GameData::MinPlayers => Value::Number(Number::from(self.min_players)),
            GameData::MaxPlayers => Value::Number(Number::from(self.max_players)),
            GameData::Difficulty => Value::Number(Number::F64(self.difficulty)),
            GameData::Rating => Value::Number(Number::F64(self.rating)),
            GameData::Year => Value::Number(Number::from(self.year_published)),
            GameData::Id | GameData::MinTime | GameData::MaxTime | GameData::Rank => Value::None,
        }
    }
}

/// Consuming builder for [`BoardGame`].
#[derive(Debug, Clone)]
pub struct BoardGameBuilder {
    game: BoardGame,
}

impl BoardGameBuilder {
    pub fn id(mut self, id: u32) -> Self {
        self.game.id = id;
        self
    }

    /// Sets the minimum and maximum player count.
    pub fn players(mut self, min: i32, max: i32) -> Self {
        self.game.min_players = min;
        self.game.max_players = max;
        self
    }

    /// Sets the minimum and maximum play time in minutes.
    pub fn play_time(mut self, min: i32, max: i32) -> Self {
        self.game.min_play_time = min;
        self.game.max_play_time = max;
        self
    }

    pub fn difficulty(mut self, difficulty: f64) -> Self {
        self.game.difficulty = difficulty;
        self
    }

    pub fn rank(mut self, rank: i32) -> Self {
        self.game.rank = rank;
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.game.rating = rating;
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.game.year_published = year;
        self
    }

    pub fn build(self) -> BoardGame {
        self.game
    }
}

/// Column identifiers of a [`BoardGame`].
///
/// Names parse case-insensitively. Only `name`, `minPlayers`, `maxPlayers`,
/// `difficulty`, `rating` and `year` are queryable; the remaining columns are
/// recognised but can be neither filtered nor sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameData {
    Name,
    Id,
    MinPlayers,
    MaxPlayers,
    MinTime,
    MaxTime,
    Difficulty,
    Rank,
    Rating,
    Year,
}

impl GameData {
    /// Every column, in record order.
    pub const ALL: [GameData; 10] = [
        GameData::Name,
        GameData::Id,
        GameData::MinPlayers,
        GameData::MaxPlayers,
        GameData::MinTime,
        GameData::MaxTime,
        GameData::Difficulty,
        GameData::Rank,
        GameData::Rating,
        GameData::Year,
    ];

    /// Returns `true` if the column can be filtered and sorted on.
    pub fn is_queryable(self) -> bool {
        self.kind().is_some()
    }
}

impl SeekerField for GameData {
    fn parse_field(name: &str) -> Option<Self> {
        let field = match name.trim().to_ascii_lowercase().as_str() {
            "name" => GameData::Name,
            "id" => GameData::Id,
            "minplayers" => GameData::MinPlayers,
            "maxplayers" => GameData::MaxPlayers,
            "mintime" | "minplaytime" => GameData::MinTime,
            "maxtime" | "maxplaytime" => GameData::MaxTime,
            "difficulty" => GameData::Difficulty,
            "rank" => GameData::Rank,
            "rating" => GameData::Rating,
            "year" | "yearpublished" => GameData::Year,
            _ => return None,
        };
        Some(field)
    }

    fn kind(self) -> Option<FieldKind> {
        match self {
            GameData::Name => Some(FieldKind::Text),
            GameData::MinPlayers | GameData::MaxPlayers | GameData::Year => {
                Some(FieldKind::Integer)
            }
            GameData::Difficulty | GameData::Rating => Some(FieldKind::Float),
            GameData::Id | GameData::MinTime | GameData::MaxTime | GameData::Rank => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            GameData::Name => "name",
            GameData::Id => "id",
            GameData::MinPlayers => "minPlayers",
            GameData::MaxPlayers => "maxPlayers",
            GameData::MinTime => "minPlayTime",
            GameData::MaxTime => "maxPlayTime",
            GameData::Difficulty => "difficulty",
            GameData::Rank => "rank",
            GameData::Rating => "rating",
            GameData::Year => "year",
        }
    }
}

impl std::fmt::Display for GameData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GameData {
    type Err = meeple_seeker::SeekerError;

    /// Parses a column name for sorting; unknown names are unsupported sort
    /// attributes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameData::parse_field(s)
            .ok_or_else(|| meeple_seeker::SeekerError::UnsupportedSortAttribute(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn chess() -> BoardGame {
        BoardGame::builder("Chess")
            .id(1)
            .players(2, 2)
            .play_time(10, 20)
            .difficulty(3.5)
            .rank(100)
            .rating(7.5)
            .year(2000)
            .build()
    }

    #[test]
    fn builder_sets_every_attribute() {
        let game = chess();
        assert_eq!(game.name(), "Chess");
        assert_eq!(game.id(), 1);
        assert_eq!(game.min_players(), 2);
        assert_eq!(game.max_players(), 2);
        assert_eq!(game.min_play_time(), 10);
        assert_eq!(game.max_play_time(), 20);
        assert_eq!(game.difficulty(), 3.5);
        assert_eq!(game.rank(), 100);
        assert_eq!(game.rating(), 7.5);
        assert_eq!(game.year_published(), 2000);
    }

    #[test]
    fn value_identity_dedupes_in_sets() {
        let mut set = HashSet::new();
        set.insert(chess());
        set.insert(chess());
        assert_eq!(set.len(), 1);

        // Same name, different rating: a different record.
        set.insert(BoardGame::builder("Chess").rating(7.5).build());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn name_case_matters_for_value_identity() {
        let upper = BoardGame::builder("CHESS").build();
        let lower = BoardGame::builder("chess").build();
        assert_ne!(upper, lower);
    }

    #[test]
    fn parse_field_names() {
        assert_eq!(GameData::parse_field("minPlayers"), Some(GameData::MinPlayers));
        assert_eq!(GameData::parse_field("MAXPLAYERS"), Some(GameData::MaxPlayers));
        assert_eq!(GameData::parse_field(" rating "), Some(GameData::Rating));
        assert_eq!(GameData::parse_field("yearPublished"), Some(GameData::Year));
        assert_eq!(GameData::parse_field("minTime"), Some(GameData::MinTime));
        assert_eq!(GameData::parse_field("publisher"), None);
    }

    #[test]
    fn queryable_columns() {
        let queryable: Vec<_> = GameData::ALL
            .into_iter()
            .filter(|c| c.is_queryable())
            .map(|c| c.as_str())
            .collect();
        assert_eq!(
            queryable,
            ["name", "minPlayers", "maxPlayers", "difficulty", "rating", "year"]
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for column in GameData::ALL {
            assert_eq!(column.to_string().parse::<GameData>(), Ok(column));
        }
        assert!("popularity".parse::<GameData>().is_err());
    }

    #[test]
    fn seekable_values() {
        let game = chess();
        assert_eq!(
            game.seeker_field_value(GameData::Name),
            Value::String("Chess")
        );
        assert_eq!(
            game.seeker_field_value(GameData::Rating),
            Value::Number(Number::F64(7.5))
        );
        assert_eq!(
            game.seeker_field_value(GameData::Year),
            Value::Number(Number::I64(2000))
        );
        assert_eq!(game.seeker_field_value(GameData::Rank), Value::None);
    }
}
