//! Sort direction and the comparator factory.
//!
//! [`comparator`] turns a field identifier into an ordering over records.
//! Numeric fields order numerically; text fields order case-insensitively.
//! Unlike filtering, sorting has no tolerant fallback: a field that is not
//! queryable is an [`SeekerError::UnsupportedSortAttribute`].

use std::cmp::Ordering;

use crate::error::{Result, SeekerError};
use crate::traits::{Seekable, SeekerField};
use crate::value::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// `Asc` when `ascending` is true, `Desc` otherwise.
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Dir::Asc
        } else {
            Dir::Desc
        }
    }

    /// Applies this direction to an ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated sort key: a sortable field and a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy<F> {
    /// The field to sort by.
    pub field: F,
    /// The sort direction.
    pub dir: Dir,
}

impl<F: SeekerField> OrderBy<F> {
    /// Creates an ordering, rejecting fields that cannot be sorted on.
    pub fn new(field: F, dir: Dir) -> Result<Self> {
        match field.kind() {
            Some(_) => Ok(OrderBy { field, dir }),
            None => Err(SeekerError::UnsupportedSortAttribute(
                field.as_str().to_string(),
            )),
        }
    }

    /// Resolves a field name and creates an ordering for it.
    pub fn parse(name: &str, dir: Dir) -> Result<Self> {
        let field = F::parse_field(name.trim())
            .ok_or_else(|| SeekerError::UnsupportedSortAttribute(name.trim().to_string()))?;
        OrderBy::new(field, dir)
    }

    /// Compares two records according to this ordering.
    pub fn compare<T>(&self, a: &T, b: &T) -> Ordering
    where
        T: Seekable<Field = F>,
    {
        let ordering = match (
            a.seeker_field_value(self.field),
            b.seeker_field_value(self.field),
        ) {
            // Total order so NaN cannot break the sort.
            (Value::Number(a), Value::Number(b)) => a.total_cmp(b),
            (a, b) => compare_values(&a, &b).unwrap_or(Ordering::Equal),
        };
        self.dir.apply(ordering)
    }
}

/// Compares two values of the same kind.
///
/// Text compares case-insensitively. `None` sorts after everything else.
/// Returns `None` if the kinds differ or a number is NaN.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Option<Ordering> {
    match (a, b) {
        (Value::String(a), Value::String(b)) => Some(cmp_ignore_ascii_case(a, b)),
        (Value::Number(a), Value::Number(b)) => a.compare(*b),

        (Value::None, Value::None) => Some(Ordering::Equal),
        (Value::None, _) => Some(Ordering::Greater),
        (_, Value::None) => Some(Ordering::Less),

        _ => None,
    }
}

/// Lexicographic comparison after folding ASCII case.
pub fn cmp_ignore_ascii_case(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

/// Returns a comparator over records for `field`.
///
/// # Example
///
/// ```
/// # use meeple_seeker::{FieldKind, Number, Seekable, SeekerField, Value};
/// # #[derive(Debug, Clone, Copy, PartialEq)]
/// # enum Col { Pages }
/// # impl SeekerField for Col {
/// #     fn parse_field(name: &str) -> Option<Self> {
/// #         name.eq_ignore_ascii_case("pages").then_some(Col::Pages)
/// #     }
/// #     fn kind(self) -> Option<FieldKind> { Some(FieldKind::Integer) }
/// #     fn as_str(self) -> &'static str { "pages" }
/// # }
/// # struct Book { pages: i64 }
/// # impl Seekable for Book {
/// #     type Field = Col;
/// #     fn seeker_field_value(&self, _: Col) -> Value<'_> {
/// #         Value::Number(Number::I64(self.pages))
/// #     }
/// # }
/// use meeple_seeker::{comparator, Dir};
///
/// let mut books = vec![Book { pages: 300 }, Book { pages: 90 }];
/// books.sort_by(comparator(Col::Pages, Dir::Asc).unwrap());
/// assert_eq!(books[0].pages, 90);
/// ```
pub fn comparator<T>(field: T::Field, dir: Dir) -> Result<impl Fn(&T, &T) -> Ordering>
where
    T: Seekable,
{
    let order = OrderBy::new(field, dir)?;
    Ok(move |a: &T, b: &T| order.compare(a, b))
}

/// Like [`comparator`], but resolves the field from its name first.
///
/// Unknown names are reported as unsupported sort attributes.
pub fn comparator_for<T>(name: &str, dir: Dir) -> Result<impl Fn(&T, &T) -> Ordering>
where
    T: Seekable,
{
    let order = OrderBy::<T::Field>::parse(name, dir)?;
    Ok(move |a: &T, b: &T| order.compare(a, b))
}

/// Sorts `items` in place by `field`. The sort is stable.
pub fn sort_by<T>(items: &mut [T], field: T::Field, dir: Dir) -> Result<()>
where
    T: Seekable,
{
    let order = OrderBy::new(field, dir)?;
    items.sort_by(|a, b| order.compare(a, b));
    Ok(())
}
