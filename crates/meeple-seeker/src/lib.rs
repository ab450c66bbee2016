//! Seeker - filter expressions and orderings over typed record collections.
//!
//! A record type implements [`Seekable`], exposing each attribute as a
//! [`Value`]. Seeker then provides:
//!
//! - an operator lexicon ([`Op`]) for the tokens `>=`, `<=`, `==`, `!=`,
//!   `~=`, `>`, `<`
//! - a compiler ([`compile`]) from comma separated filter expressions to a
//!   conjunctive [`Query`]
//! - a comparator factory ([`comparator`], [`sort_by`]) from an attribute
//!   identifier to an ordering
//!
//! # Quick Start
//!
//! ```rust
//! use meeple_seeker::{compile, sort_by, Dir, FieldKind, Number, Seekable, SeekerField, Value};
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum Column {
//!     Name,
//!     Rating,
//! }
//!
//! impl SeekerField for Column {
//!     fn parse_field(name: &str) -> Option<Self> {
//!         match name.to_ascii_lowercase().as_str() {
//!             "name" => Some(Column::Name),
//!             "rating" => Some(Column::Rating),
//!             _ => None,
//!         }
//!     }
//!
//!     fn kind(self) -> Option<FieldKind> {
//!         Some(match self {
//!             Column::Name => FieldKind::Text,
//!             Column::Rating => FieldKind::Float,
//!         })
//!     }
//!
//!     fn as_str(self) -> &'static str {
//!         match self {
//!             Column::Name => "name",
//!             Column::Rating => "rating",
//!         }
//!     }
//! }
//!
//! #[derive(Debug, Clone)]
//! struct Game {
//!     name: String,
//!     rating: f64,
//! }
//!
//! impl Seekable for Game {
//!     type Field = Column;
//!
//!     fn seeker_field_value(&self, field: Column) -> Value<'_> {
//!         match field {
//!             Column::Name => Value::String(&self.name),
//!             Column::Rating => Value::Number(Number::F64(self.rating)),
//!         }
//!     }
//! }
//!
//! let games = vec![
//!     Game { name: "Go".into(), rating: 7.5 },
//!     Game { name: "Go Fish".into(), rating: 6.5 },
//!     Game { name: "Chess".into(), rating: 10.0 },
//! ];
//!
//! let query = compile::<Column>("rating >= 7").unwrap();
//! let mut results = query.filter_cloned(&games);
//! sort_by(&mut results, Column::Rating, Dir::Desc).unwrap();
//!
//! assert_eq!(results[0].name, "Chess");
//! assert_eq!(results[1].name, "Go");
//! ```
//!
//! # Field Kinds and Operators
//!
//! | Kind | Operators | Comparison |
//! |------|-----------|------------|
//! | Integer | `>=` `<=` `==` `!=` `>` `<` | `i64` |
//! | Float | `>=` `<=` `==` `!=` `>` `<` | `f64`, exact equality |
//! | Text | `==` `!=` `~=` | ASCII case-insensitive |

mod clause;
mod compile;
mod error;
mod op;
mod ordering;
mod query;
mod traits;
mod value;

// Re-export public API
pub use clause::{Clause, ClauseValue};
pub use compile::{compile, compile_clause, ClauseOutcome, Skip, CLAUSE_SEPARATOR};
pub use error::{Result, SeekerError};
pub use op::Op;
pub use ordering::{
    cmp_ignore_ascii_case, comparator, comparator_for, compare_values, sort_by, Dir, OrderBy,
};
pub use query::Query;
pub use traits::{FieldKind, Seekable, SeekerField};
pub use value::{Number, Value};
