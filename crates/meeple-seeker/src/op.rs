//! Comparison operators and their textual tokens.
//!
//! The [`Op`] enum is the operator lexicon of the filter language. Each
//! operator owns a token (`>=`, `~=`, ...) and [`Op::find_in`] resolves which
//! token a raw clause uses.

use std::cmp::Ordering;

/// Comparison operator for a filter clause.
///
/// Operators are grouped by the field kinds they support:
/// - **Universal**: `Eq`, `Ne`
/// - **Numeric**: `Gt`, `Gte`, `Lt`, `Lte`
/// - **Text**: `Contains`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `>=`
    Gte,
    /// `<=`
    Lte,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `~=`, substring containment. Text only.
    Contains,
    /// `>`
    Gt,
    /// `<`
    Lt,
}

impl Op {
    /// Every operator, in the order tokens are matched against a clause.
    ///
    /// Two-character tokens come before `>` and `<` so that `>=` is never
    /// read as `>`.
    pub const PRECEDENCE: [Op; 7] = [
        Op::Gte,
        Op::Lte,
        Op::Eq,
        Op::Ne,
        Op::Contains,
        Op::Gt,
        Op::Lt,
    ];

    /// Returns the token this operator is written as.
    pub fn token(self) -> &'static str {
        match self {
            Op::Gte => ">=",
            Op::Lte => "<=",
            Op::Eq => "==",
            Op::Ne => "!=",
            Op::Contains => "~=",
            Op::Gt => ">",
            Op::Lt => "<",
        }
    }

    /// Returns the first operator, in [`Op::PRECEDENCE`] order, whose token
    /// occurs anywhere in `clause`.
    ///
    /// This does not look at the operands; `"name > 3"` resolves to `Gt`
    /// even though the field is text.
    pub fn find_in(clause: &str) -> Option<Op> {
        Op::PRECEDENCE
            .into_iter()
            .find(|op| clause.contains(op.token()))
    }

    /// Returns `true` if this operator is valid for text comparisons.
    pub fn is_text_op(self) -> bool {
        matches!(self, Op::Eq | Op::Ne | Op::Contains)
    }

    /// Returns `true` if this operator is valid for numeric comparisons.
    pub fn is_number_op(self) -> bool {
        !matches!(self, Op::Contains)
    }

    /// Evaluates a comparison given an ordering result.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            Op::Eq => ordering == Ordering::Equal,
            Op::Ne => ordering != Ordering::Equal,
            Op::Gt => ordering == Ordering::Greater,
            Op::Gte => ordering != Ordering::Less,
            Op::Lt => ordering == Ordering::Less,
            Op::Lte => ordering != Ordering::Greater,
            Op::Contains => false,
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}
