//! Runtime value types for field comparison.
//!
//! The [`Value`] enum is what a record hands back for one of its fields. It
//! borrows text from the record and carries numbers by value.

use std::cmp::Ordering;

/// Runtime value for comparison, borrowed from the source record.
///
/// # Example
///
/// ```
/// use meeple_seeker::{Number, Value};
///
/// struct Game {
///     name: String,
///     rating: f64,
/// }
///
/// fn rating(game: &Game) -> Value<'_> {
///     Value::Number(Number::F64(game.rating))
/// }
///
/// fn name(game: &Game) -> Value<'_> {
///     Value::String(&game.name)
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// Text value (borrowed).
    String(&'a str),
    /// Numeric value.
    Number(Number),
    /// Field not present or not queryable.
    None,
}

/// Numeric value in the field's native representation.
///
/// Integer fields compare as `i64`, floating point fields as `f64`. Mixed
/// comparisons fall back to `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers.
    ///
    /// Returns `None` when either side is NaN.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::F64(a), Number::F64(b)) => a.partial_cmp(&b),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }

    /// Total ordering used for sorting. NaN sorts after every number.
    pub fn total_cmp(self, other: Number) -> Ordering {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => a.cmp(&b),
            _ => self.to_f64().total_cmp(&other.to_f64()),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::I64(n as i64)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::I64(n)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::F64(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_comparisons_same_type() {
        assert_eq!(
            Number::I64(5).compare(Number::I64(10)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Number::I64(10).compare(Number::I64(5)),
            Some(Ordering::Greater)
        );
        assert_eq!(
            Number::F64(7.5).compare(Number::F64(7.5)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn number_comparisons_mixed_types() {
        assert_eq!(
            Number::I64(7).compare(Number::F64(7.0)),
            Some(Ordering::Equal)
        );
        assert_eq!(
            Number::F64(6.5).compare(Number::I64(7)),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn number_nan_comparison() {
        assert_eq!(Number::F64(f64::NAN).compare(Number::F64(1.0)), None);
        assert_eq!(Number::F64(1.0).compare(Number::F64(f64::NAN)), None);
    }

    #[test]
    fn total_cmp_places_nan_last() {
        assert_eq!(
            Number::F64(f64::NAN).total_cmp(Number::F64(f64::INFINITY)),
            Ordering::Greater
        );
        assert_eq!(Number::I64(2).total_cmp(Number::I64(3)), Ordering::Less);
        assert_eq!(Number::I64(2).total_cmp(Number::F64(2.0)), Ordering::Equal);
    }

    #[test]
    fn float_equality_is_exact() {
        assert_ne!(
            Number::F64(0.1 + 0.2).compare(Number::F64(0.3)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn number_conversions() {
        assert_eq!(Number::from(42i32), Number::I64(42));
        assert_eq!(Number::from(4.5f64), Number::F64(4.5));
    }
}
