//! Filter expression compiler.
//!
//! Turns text such as `"minPlayers >= 2, name ~= go"` into a [`Query`].
//!
//! # Grammar
//!
//! ```text
//! expression := clause ( "," clause )*
//! clause     := field operator value
//! operator   := ">=" | "<=" | "==" | "!=" | "~=" | ">" | "<"
//! ```
//!
//! Whitespace around the field and value is ignored. Field names are matched
//! case-insensitively through [`SeekerField::parse_field`].
//!
//! # Tolerance
//!
//! Each clause compiles to one of three outcomes (see [`ClauseOutcome`]):
//!
//! - a clause that cannot be tokenized, splits badly, names an unknown or
//!   unqueryable field, or uses an operator the field kind does not support
//!   is **ignored** and the rest of the expression still applies;
//! - a numeric field compared against text that does not parse as that
//!   field's number type is **invalid** and fails the whole expression.
//!   Integer values must fit in an `i32`; float values must be finite, so
//!   `inf` and `nan` are rejected;
//! - anything else is **compiled**.

use crate::clause::{Clause, ClauseValue};
use crate::error::{Result, SeekerError};
use crate::op::Op;
use crate::query::Query;
use crate::traits::{FieldKind, SeekerField};
use crate::value::Number;

/// Separator between clauses in an expression.
pub const CLAUSE_SEPARATOR: char = ',';

/// Why a clause contributed nothing to the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    /// No operator token occurs in the clause.
    NoOperator,
    /// The clause did not split into exactly one field and one value.
    MalformedSplit,
    /// The field name is unknown or the field is not queryable.
    UnknownField(String),
    /// The operator does not apply to the field's kind.
    UnsupportedOperator { field: &'static str, op: Op },
}

impl std::fmt::Display for Skip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Skip::NoOperator => f.write_str("no operator"),
            Skip::MalformedSplit => f.write_str("expected <field> <op> <value>"),
            Skip::UnknownField(name) => write!(f, "unknown field '{name}'"),
            Skip::UnsupportedOperator { field, op } => {
                write!(f, "operator '{op}' does not apply to {field}")
            }
        }
    }
}

/// Result of compiling one clause.
#[derive(Debug, Clone, PartialEq)]
pub enum ClauseOutcome<F> {
    /// The clause is dropped; it constrains nothing.
    Ignored(Skip),
    /// The clause compiled to a predicate.
    Compiled(Clause<F>),
    /// The clause is fatal for the whole expression.
    Invalid(SeekerError),
}

/// Compiles a single clause.
///
/// # Example
///
/// ```
/// # use meeple_seeker::{FieldKind, SeekerField};
/// # #[derive(Debug, Clone, Copy, PartialEq)]
/// # enum Col { Pages }
/// # impl SeekerField for Col {
/// #     fn parse_field(name: &str) -> Option<Self> {
/// #         name.eq_ignore_ascii_case("pages").then_some(Col::Pages)
/// #     }
/// #     fn kind(self) -> Option<FieldKind> { Some(FieldKind::Integer) }
/// #     fn as_str(self) -> &'static str { "pages" }
/// # }
/// use meeple_seeker::{compile_clause, ClauseOutcome, Skip};
///
/// assert!(matches!(
///     compile_clause::<Col>("pages > 100"),
///     ClauseOutcome::Compiled(_)
/// ));
/// assert_eq!(
///     compile_clause::<Col>("pages 100"),
///     ClauseOutcome::Ignored(Skip::NoOperator)
/// );
/// assert!(matches!(
///     compile_clause::<Col>("pages > many"),
///     ClauseOutcome::Invalid(_)
/// ));
/// ```
pub fn compile_clause<F: SeekerField>(raw: &str) -> ClauseOutcome<F> {
    let Some(op) = Op::find_in(raw) else {
        return ClauseOutcome::Ignored(Skip::NoOperator);
    };

    let mut parts = raw.split(op.token());
    let (name, value) = match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(value), None) => (name.trim(), value.trim()),
        _ => return ClauseOutcome::Ignored(Skip::MalformedSplit),
    };
    if name.is_empty() || value.is_empty() {
        return ClauseOutcome::Ignored(Skip::MalformedSplit);
    }

    let Some((field, kind)) = F::parse_field(name).and_then(|f| f.kind().map(|k| (f, k))) else {
        return ClauseOutcome::Ignored(Skip::UnknownField(name.to_string()));
    };

    let supported = match kind {
        FieldKind::Text => op.is_text_op(),
        FieldKind::Integer | FieldKind::Float => op.is_number_op(),
    };
    if !supported {
        return ClauseOutcome::Ignored(Skip::UnsupportedOperator {
            field: field.as_str(),
            op,
        });
    }

    match parse_value(field, kind, value) {
        Ok(value) => ClauseOutcome::Compiled(Clause::new(field, op, value)),
        Err(err) => ClauseOutcome::Invalid(err),
    }
}

fn parse_value<F: SeekerField>(field: F, kind: FieldKind, text: &str) -> Result<ClauseValue> {
    let invalid = || SeekerError::invalid_value(field.as_str(), text, kind.as_str());
    match kind {
        FieldKind::Text => Ok(ClauseValue::Text(text.to_string())),
        FieldKind::Integer => text
            .parse::<i32>()
            .map(|n| ClauseValue::Number(Number::from(n)))
            .map_err(|_| invalid()),
        FieldKind::Float => match text.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(ClauseValue::Number(Number::F64(n))),
            _ => Err(invalid()),
        },
    }
}

/// Compiles a whole filter expression.
///
/// An empty or blank expression compiles to the empty query, which matches
/// every record. Ignored clauses are logged at `debug` level and skipped; the
/// first invalid clause is returned as an error.
pub fn compile<F: SeekerField>(expr: &str) -> Result<Query<F>> {
    let mut query = Query::new();
    if expr.trim().is_empty() {
        return Ok(query);
    }

    for raw in expr.split(CLAUSE_SEPARATOR) {
        let raw = raw.trim();
        match compile_clause::<F>(raw) {
            ClauseOutcome::Compiled(clause) => query = query.and_clause(clause),
            ClauseOutcome::Ignored(reason) => {
                tracing::debug!(clause = raw, %reason, "ignoring filter clause");
            }
            ClauseOutcome::Invalid(err) => return Err(err),
        }
    }

    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Col {
        Name,
        Players,
        Rating,
        Rank,
    }

    impl SeekerField for Col {
        fn parse_field(name: &str) -> Option<Self> {
            match name.to_ascii_lowercase().as_str() {
                "name" => Some(Col::Name),
                "players" => Some(Col::Players),
                "rating" => Some(Col::Rating),
                "rank" => Some(Col::Rank),
                _ => None,
            }
        }

        fn kind(self) -> Option<FieldKind> {
            match self {
                Col::Name => Some(FieldKind::Text),
                Col::Players => Some(FieldKind::Integer),
                Col::Rating => Some(FieldKind::Float),
                Col::Rank => None,
            }
        }

        fn as_str(self) -> &'static str {
            match self {
                Col::Name => "name",
                Col::Players => "players",
                Col::Rating => "rating",
                Col::Rank => "rank",
            }
        }
    }

    fn compiled(raw: &str) -> Clause<Col> {
        match compile_clause::<Col>(raw) {
            ClauseOutcome::Compiled(clause) => clause,
            other => panic!("expected {raw:?} to compile, got {other:?}"),
        }
    }

    #[test]
    fn compiles_numeric_clauses() {
        assert_eq!(compiled("players > 2"), Clause::new(Col::Players, Op::Gt, 2i64));
        assert_eq!(
            compiled("rating>=7"),
            Clause::new(Col::Rating, Op::Gte, 7.0f64)
        );
        assert_eq!(
            compiled("  RATING  <=  6.5 "),
            Clause::new(Col::Rating, Op::Lte, 6.5f64)
        );
    }

    #[test]
    fn compiles_text_clauses() {
        assert_eq!(compiled("name == Go"), Clause::new(Col::Name, Op::Eq, "Go"));
        assert_eq!(compiled("name != Go"), Clause::new(Col::Name, Op::Ne, "Go"));
        assert_eq!(
            compiled("name ~= go fish"),
            Clause::new(Col::Name, Op::Contains, "go fish")
        );
    }

    #[test]
    fn ignores_clause_without_operator() {
        assert_eq!(
            compile_clause::<Col>("players 2"),
            ClauseOutcome::Ignored(Skip::NoOperator)
        );
    }

    #[test]
    fn ignores_malformed_split() {
        assert_eq!(
            compile_clause::<Col>("players >"),
            ClauseOutcome::Ignored(Skip::MalformedSplit)
        );
        assert_eq!(
            compile_clause::<Col>(">= 3"),
            ClauseOutcome::Ignored(Skip::MalformedSplit)
        );
        assert_eq!(
            compile_clause::<Col>("players >= 3 >= 4"),
            ClauseOutcome::Ignored(Skip::MalformedSplit)
        );
    }

    #[test]
    fn ignores_unknown_and_unqueryable_fields() {
        assert_eq!(
            compile_clause::<Col>("weight > 3"),
            ClauseOutcome::Ignored(Skip::UnknownField("weight".to_string()))
        );
        assert_eq!(
            compile_clause::<Col>("rank < 10"),
            ClauseOutcome::Ignored(Skip::UnknownField("rank".to_string()))
        );
    }

    #[test]
    fn ignores_operator_the_kind_does_not_support() {
        assert_eq!(
            compile_clause::<Col>("name > Go"),
            ClauseOutcome::Ignored(Skip::UnsupportedOperator {
                field: "name",
                op: Op::Gt
            })
        );
        assert_eq!(
            compile_clause::<Col>("players ~= 2"),
            ClauseOutcome::Ignored(Skip::UnsupportedOperator {
                field: "players",
                op: Op::Contains
            })
        );
    }

    #[test]
    fn bad_number_is_invalid() {
        assert_eq!(
            compile_clause::<Col>("players > two"),
            ClauseOutcome::Invalid(SeekerError::invalid_value("players", "two", "integer"))
        );
        // Integers do not accept a fractional part.
        assert!(matches!(
            compile_clause::<Col>("players > 2.5"),
            ClauseOutcome::Invalid(_)
        ));
        assert!(matches!(
            compile_clause::<Col>("rating >= high"),
            ClauseOutcome::Invalid(_)
        ));
    }

    #[test]
    fn integer_out_of_i32_range_is_invalid() {
        assert_eq!(
            compile_clause::<Col>("players > 3000000000"),
            ClauseOutcome::Invalid(SeekerError::invalid_value(
                "players",
                "3000000000",
                "integer"
            ))
        );
        assert!(matches!(
            compile_clause::<Col>("players < -2147483649"),
            ClauseOutcome::Invalid(_)
        ));
        assert_eq!(
            compiled("players <= 2147483647"),
            Clause::new(Col::Players, Op::Lte, i32::MAX)
        );
    }

    #[test]
    fn non_finite_float_is_invalid() {
        for value in ["inf", "-inf", "infinity", "NaN", "1e400"] {
            assert_eq!(
                compile_clause::<Col>(&format!("rating < {value}")),
                ClauseOutcome::Invalid(SeekerError::invalid_value("rating", value, "number")),
                "{value}"
            );
        }
        assert_eq!(
            compiled("rating >= 1e2"),
            Clause::new(Col::Rating, Op::Gte, 100.0)
        );
    }

    #[test]
    fn empty_expression_is_identity() {
        assert!(compile::<Col>("").unwrap().is_empty());
        assert!(compile::<Col>("   ").unwrap().is_empty());
    }

    #[test]
    fn compile_joins_clauses() {
        let query = compile::<Col>("players >= 2, rating > 7, name ~= go").unwrap();
        assert_eq!(query.clauses().len(), 3);
    }

    #[test]
    fn compile_skips_bad_clauses_but_keeps_good_ones() {
        let query = compile::<Col>("players >= 2, bogus, weight < 3, name > x").unwrap();
        assert_eq!(query.clauses(), &[Clause::new(Col::Players, Op::Gte, 2i64)]);
    }

    #[test]
    fn compile_fails_on_invalid_clause() {
        let err = compile::<Col>("name ~= go, players > lots").unwrap_err();
        assert_eq!(err, SeekerError::invalid_value("players", "lots", "integer"));
    }

    #[test]
    fn skip_display() {
        assert_eq!(Skip::NoOperator.to_string(), "no operator");
        assert_eq!(
            Skip::UnknownField("x".into()).to_string(),
            "unknown field 'x'"
        );
        assert_eq!(
            Skip::UnsupportedOperator {
                field: "name",
                op: Op::Gt
            }
            .to_string(),
            "operator '>' does not apply to name"
        );
    }
}
