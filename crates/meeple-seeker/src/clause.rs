//! Clause types for query predicates.
//!
//! A [`Clause`] represents a single filter predicate: a field, an operator,
//! and a comparison value.

use crate::op::Op;
use crate::value::{Number, Value};

/// A single filter predicate.
///
/// # Example
///
/// ```
/// use meeple_seeker::{Clause, ClauseValue, Op, Value};
///
/// let clause = Clause::new("name", Op::Contains, "go");
/// assert!(clause.matches(&Value::String("Go Fish")));
/// assert!(!clause.matches(&Value::String("Chess")));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Clause<F> {
    /// The field to compare.
    pub field: F,
    /// The comparison operator.
    pub op: Op,
    /// The value to compare against.
    pub value: ClauseValue,
}

impl<F> Clause<F> {
    /// Creates a new clause.
    pub fn new(field: F, op: Op, value: impl Into<ClauseValue>) -> Self {
        Clause {
            field,
            op,
            value: value.into(),
        }
    }

    /// Evaluates this clause against a field value.
    ///
    /// Returns `false` if the value doesn't match or if the types are
    /// incompatible.
    pub fn matches(&self, field_value: &Value<'_>) -> bool {
        match (&self.value, field_value) {
            (ClauseValue::Text(pattern), Value::String(s)) => self.match_text(s, pattern),
            (ClauseValue::Number(clause_num), Value::Number(field_num)) => {
                self.match_number(*field_num, *clause_num)
            }
            // A missing field never matches.
            (_, Value::None) => false,
            _ => false,
        }
    }

    fn match_text(&self, field: &str, pattern: &str) -> bool {
        match self.op {
            Op::Eq => field.eq_ignore_ascii_case(pattern),
            Op::Ne => !field.eq_ignore_ascii_case(pattern),
            Op::Contains => field
                .to_ascii_lowercase()
                .contains(&pattern.to_ascii_lowercase()),
            _ => false,
        }
    }

    fn match_number(&self, field: Number, clause: Number) -> bool {
        match field.compare(clause) {
            Some(ordering) => self.op.eval_ordering(ordering),
            // NaN: only `!=` holds.
            None => self.op == Op::Ne,
        }
    }
}

/// Owned value stored in a clause.
///
/// Unlike [`Value`], which borrows from the record, `ClauseValue` owns its
/// data so compiled queries can outlive the expression text.
#[derive(Debug, Clone, PartialEq)]
pub enum ClauseValue {
    /// Text value.
    Text(String),
    /// Numeric value.
    Number(Number),
}

impl From<String> for ClauseValue {
    fn from(s: String) -> Self {
        ClauseValue::Text(s)
    }
}

impl From<&str> for ClauseValue {
    fn from(s: &str) -> Self {
        ClauseValue::Text(s.to_string())
    }
}

impl From<Number> for ClauseValue {
    fn from(n: Number) -> Self {
        ClauseValue::Number(n)
    }
}

impl From<i32> for ClauseValue {
    fn from(n: i32) -> Self {
        ClauseValue::Number(Number::from(n))
    }
}

impl From<i64> for ClauseValue {
    fn from(n: i64) -> Self {
        ClauseValue::Number(Number::from(n))
    }
}

impl From<f64> for ClauseValue {
    fn from(n: f64) -> Self {
        ClauseValue::Number(Number::from(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_eq_ignores_case() {
        let clause = Clause::new("name", Op::Eq, "go");
        assert!(clause.matches(&Value::String("Go")));
        assert!(clause.matches(&Value::String("GO")));
        assert!(!clause.matches(&Value::String("golang")));
    }

    #[test]
    fn text_ne() {
        let clause = Clause::new("name", Op::Ne, "go");
        assert!(!clause.matches(&Value::String("Go")));
        assert!(clause.matches(&Value::String("Chess")));
    }

    #[test]
    fn text_contains_ignores_case() {
        let clause = Clause::new("name", Op::Contains, "GO");
        assert!(clause.matches(&Value::String("Go Fish")));
        assert!(clause.matches(&Value::String("golang")));
        assert!(clause.matches(&Value::String("Tango")));
        assert!(!clause.matches(&Value::String("Chess")));
    }

    #[test]
    fn text_ordering_ops_never_match() {
        let clause = Clause::new("name", Op::Gt, "a");
        assert!(!clause.matches(&Value::String("b")));
    }

    #[test]
    fn number_comparisons() {
        let clause_gt = Clause::new("count", Op::Gt, 10i64);
        assert!(clause_gt.matches(&Value::Number(Number::I64(11))));
        assert!(!clause_gt.matches(&Value::Number(Number::I64(10))));

        let clause_gte = Clause::new("count", Op::Gte, 10i64);
        assert!(clause_gte.matches(&Value::Number(Number::I64(10))));
        assert!(!clause_gte.matches(&Value::Number(Number::I64(9))));

        let clause_lt = Clause::new("count", Op::Lt, 10i64);
        assert!(clause_lt.matches(&Value::Number(Number::I64(9))));
        assert!(!clause_lt.matches(&Value::Number(Number::I64(10))));

        let clause_lte = Clause::new("count", Op::Lte, 10i64);
        assert!(clause_lte.matches(&Value::Number(Number::I64(10))));
        assert!(!clause_lte.matches(&Value::Number(Number::I64(11))));

        let clause_eq = Clause::new("count", Op::Eq, 10i64);
        assert!(clause_eq.matches(&Value::Number(Number::I64(10))));

        let clause_ne = Clause::new("count", Op::Ne, 10i64);
        assert!(clause_ne.matches(&Value::Number(Number::I64(3))));
    }

    #[test]
    fn float_comparisons() {
        let clause = Clause::new("rating", Op::Gte, 7.0f64);
        assert!(clause.matches(&Value::Number(Number::F64(7.5))));
        assert!(clause.matches(&Value::Number(Number::F64(7.0))));
        assert!(!clause.matches(&Value::Number(Number::F64(6.99))));
    }

    #[test]
    fn nan_only_satisfies_ne() {
        let nan = Value::Number(Number::F64(f64::NAN));
        assert!(!Clause::new("rating", Op::Eq, 1.0f64).matches(&nan));
        assert!(!Clause::new("rating", Op::Gt, 1.0f64).matches(&nan));
        assert!(!Clause::new("rating", Op::Lte, 1.0f64).matches(&nan));
        assert!(Clause::new("rating", Op::Ne, 1.0f64).matches(&nan));
    }

    #[test]
    fn none_value_never_matches() {
        assert!(!Clause::new("name", Op::Eq, "test").matches(&Value::None));
        assert!(!Clause::new("name", Op::Ne, "test").matches(&Value::None));
    }

    #[test]
    fn type_mismatch_doesnt_match() {
        let clause = Clause::new("name", Op::Eq, "42");
        assert!(!clause.matches(&Value::Number(Number::I64(42))));
    }
}
