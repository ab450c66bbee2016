//! Compiled queries and their execution.
//!
//! A [`Query`] is the conjunction of its clauses. It is usually produced by
//! [`compile`](crate::compile) from a filter expression, but can also be
//! built directly.

use crate::clause::{Clause, ClauseValue};
use crate::op::Op;
use crate::traits::Seekable;

/// A conjunction of clauses over one record type's fields.
///
/// An empty query matches every record.
///
/// # Example
///
/// ```
/// use meeple_seeker::{FieldKind, Number, Op, Query, Seekable, SeekerField, Value};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Col { Pages }
///
/// impl SeekerField for Col {
///     fn parse_field(name: &str) -> Option<Self> {
///         name.eq_ignore_ascii_case("pages").then_some(Col::Pages)
///     }
///     fn kind(self) -> Option<FieldKind> { Some(FieldKind::Integer) }
///     fn as_str(self) -> &'static str { "pages" }
/// }
///
/// struct Book { pages: i64 }
///
/// impl Seekable for Book {
///     type Field = Col;
///     fn seeker_field_value(&self, _: Col) -> Value<'_> {
///         Value::Number(Number::I64(self.pages))
///     }
/// }
///
/// let books = vec![Book { pages: 120 }, Book { pages: 480 }];
/// let query = Query::new().and(Col::Pages, Op::Gt, 200i64);
///
/// assert_eq!(query.count(&books), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Query<F> {
    clauses: Vec<Clause<F>>,
}

impl<F> Default for Query<F> {
    fn default() -> Self {
        Query {
            clauses: Vec::new(),
        }
    }
}

impl<F> Query<F> {
    /// Creates a new empty query.
    pub fn new() -> Self {
        Query::default()
    }

    /// Adds a clause. All clauses must match for a record to be included.
    pub fn and(mut self, field: F, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.clauses.push(Clause::new(field, op, value));
        self
    }

    /// Adds an already built clause.
    pub fn and_clause(mut self, clause: Clause<F>) -> Self {
        self.clauses.push(clause);
        self
    }

    /// Returns the clauses.
    pub fn clauses(&self) -> &[Clause<F>] {
        &self.clauses
    }

    /// Returns `true` if this query has no clauses (matches everything).
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

impl<F: Copy> Query<F> {
    /// Tests if a single record matches this query.
    pub fn matches<T>(&self, item: &T) -> bool
    where
        T: Seekable<Field = F>,
    {
        self.clauses
            .iter()
            .all(|clause| clause.matches(&item.seeker_field_value(clause.field)))
    }

    /// Filters records, returning references to the matching ones in input
    /// order.
    pub fn filter<'a, T, I>(&self, items: I) -> Vec<&'a T>
    where
        T: Seekable<Field = F> + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        items
            .into_iter()
            .filter(|item| self.matches(*item))
            .collect()
    }

    /// Filters and clones matching records.
    pub fn filter_cloned<'a, T, I>(&self, items: I) -> Vec<T>
    where
        T: Seekable<Field = F> + Clone + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        self.filter(items).into_iter().cloned().collect()
    }

    /// Counts the number of matching records.
    pub fn count<'a, T, I>(&self, items: I) -> usize
    where
        T: Seekable<Field = F> + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        items
            .into_iter()
            .filter(|item| self.matches(*item))
            .count()
    }
}
