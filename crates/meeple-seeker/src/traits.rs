//! Traits connecting a record type to the query engine.
//!
//! A record implements [`Seekable`], naming its attribute identifier type
//! through [`SeekerField`]. The engine never sees the record's storage; it
//! only asks for one [`Value`] per field.

use crate::value::Value;

/// The comparison kind of a queryable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// A 32-bit integer, compared as `i64`.
    Integer,
    /// A finite `f64`.
    Float,
    /// Compared as case-insensitive text.
    Text,
}

impl FieldKind {
    /// Returns the display name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Integer => "integer",
            FieldKind::Float => "number",
            FieldKind::Text => "text",
        }
    }
}

/// Identifier for one attribute of a record type.
///
/// # Example
///
/// ```
/// use meeple_seeker::{FieldKind, SeekerField};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Column {
///     Title,
///     Pages,
///     Isbn,
/// }
///
/// impl SeekerField for Column {
///     fn parse_field(name: &str) -> Option<Self> {
///         match name.to_ascii_lowercase().as_str() {
///             "title" => Some(Column::Title),
///             "pages" => Some(Column::Pages),
///             "isbn" => Some(Column::Isbn),
///             _ => None,
///         }
///     }
///
///     fn kind(self) -> Option<FieldKind> {
///         match self {
///             Column::Title => Some(FieldKind::Text),
///             Column::Pages => Some(FieldKind::Integer),
///             // Known column, but not queryable.
///             Column::Isbn => None,
///         }
///     }
///
///     fn as_str(self) -> &'static str {
///         match self {
///             Column::Title => "title",
///             Column::Pages => "pages",
///             Column::Isbn => "isbn",
///         }
///     }
/// }
///
/// assert_eq!(Column::parse_field("PAGES"), Some(Column::Pages));
/// ```
pub trait SeekerField: Copy + std::fmt::Debug {
    /// Resolves an attribute name as written in a filter expression.
    ///
    /// Implementations are expected to match case-insensitively.
    fn parse_field(name: &str) -> Option<Self>;

    /// Returns how this field is compared, or `None` if the field can be
    /// neither filtered nor sorted on.
    fn kind(self) -> Option<FieldKind>;

    /// Returns the canonical name of this field.
    fn as_str(self) -> &'static str;
}

/// Trait for record types that can be filtered and sorted.
pub trait Seekable {
    /// The attribute identifier type of this record.
    type Field: SeekerField;

    /// Returns the value of a field for comparison.
    ///
    /// Fields whose [`SeekerField::kind`] is `None` may return
    /// [`Value::None`].
    fn seeker_field_value(&self, field: Self::Field) -> Value<'_>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum ItemField {
        Name,
        Count,
        Secret,
    }

    impl SeekerField for ItemField {
        fn parse_field(name: &str) -> Option<Self> {
            match name.to_ascii_lowercase().as_str() {
                "name" => Some(ItemField::Name),
                "count" => Some(ItemField::Count),
                "secret" => Some(ItemField::Secret),
                _ => None,
            }
        }

        fn kind(self) -> Option<FieldKind> {
            match self {
                ItemField::Name => Some(FieldKind::Text),
                ItemField::Count => Some(FieldKind::Integer),
                ItemField::Secret => None,
            }
        }

        fn as_str(self) -> &'static str {
            match self {
                ItemField::Name => "name",
                ItemField::Count => "count",
                ItemField::Secret => "secret",
            }
        }
    }

    struct TestItem {
        name: String,
        count: i32,
    }

    impl Seekable for TestItem {
        type Field = ItemField;

        fn seeker_field_value(&self, field: ItemField) -> Value<'_> {
            match field {
                ItemField::Name => Value::String(&self.name),
                ItemField::Count => Value::Number(Number::from(self.count)),
                ItemField::Secret => Value::None,
            }
        }
    }

    #[test]
    fn seekable_manual_impl() {
        let item = TestItem {
            name: "test".to_string(),
            count: 42,
        };

        assert_eq!(
            item.seeker_field_value(ItemField::Name),
            Value::String("test")
        );
        assert_eq!(
            item.seeker_field_value(ItemField::Count),
            Value::Number(Number::I64(42))
        );
        assert_eq!(item.seeker_field_value(ItemField::Secret), Value::None);
    }

    #[test]
    fn field_parsing_ignores_case() {
        assert_eq!(ItemField::parse_field("NAME"), Some(ItemField::Name));
        assert_eq!(ItemField::parse_field("Count"), Some(ItemField::Count));
        assert_eq!(ItemField::parse_field("missing"), None);
    }

    #[test]
    fn kind_names() {
        assert_eq!(FieldKind::Integer.as_str(), "integer");
        assert_eq!(FieldKind::Float.as_str(), "number");
        assert_eq!(FieldKind::Text.as_str(), "text");
    }
}
