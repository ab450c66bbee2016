//! Address classification for the game list.
//!
//! An address is what a user types to pick games out of an ordered list of
//! candidates. It is classified once, trying each form in a fixed order:
//!
//! | Form | Example | Selects |
//! |------|---------|---------|
//! | Wildcard | `all` | every candidate |
//! | Name | `Go Fish` | the candidate with that name (case-insensitive) |
//! | Range | `2-5` | candidates 2 through 5, inclusive, 1-based |
//! | Index | `3` | candidate 3, 1-based |
//!
//! A name wins over the numeric forms, so a game literally called `"1"` is
//! selected by name rather than by position.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ListError, Result};

/// The address that selects every candidate.
pub const WILDCARD: &str = "ALL";

static RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\s*-\s*(\d+)$").expect("range pattern is valid"));

/// A classified address, resolved against a specific candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Address {
    /// Every candidate.
    All,
    /// The candidate at this 0-based position, matched by name.
    Name(usize),
    /// 1-based inclusive bounds; `end` is already clamped to the list length.
    Range { start: usize, end: usize },
    /// A single 1-based position.
    Index(usize),
}

impl Address {
    /// Classifies `input` against the candidate `names`, in order.
    ///
    /// Fails when the input matches no form or a numeric form falls outside
    /// the candidate list. A range whose end overshoots is clamped instead.
    pub fn resolve<S: AsRef<str>>(input: &str, names: &[S]) -> Result<Address> {
        let input = input.trim();
        let len = names.len();

        let address = if is_wildcard(input) {
            Address::All
        } else if let Some(pos) = names
            .iter()
            .position(|name| name.as_ref().trim().eq_ignore_ascii_case(input))
        {
            Address::Name(pos)
        } else if let Some(caps) = RANGE.captures(input) {
            let (Ok(start), Ok(end)) = (caps[1].parse::<u64>(), caps[2].parse::<u64>()) else {
                return Err(ListError::NotFound(input.to_string()));
            };
            if start == 0 || start > end || start > len as u64 {
                return Err(ListError::InvalidRange { start, end, len });
            }
            Address::Range {
                start: start as usize,
                end: end.min(len as u64) as usize,
            }
        } else if let Ok(index) = input.parse::<i64>() {
            if index < 1 || index > len as i64 {
                return Err(ListError::IndexOutOfRange { index, len });
            }
            Address::Index(index as usize)
        } else {
            return Err(ListError::NotFound(input.to_string()));
        };

        tracing::trace!(input, ?address, candidates = len, "resolved address");
        Ok(address)
    }

    /// The 0-based positions this address selects in a list of `len`.
    pub fn positions(self, len: usize) -> Range<usize> {
        match self {
            Address::All => 0..len,
            Address::Name(pos) => pos..pos + 1,
            Address::Range { start, end } => start - 1..end,
            Address::Index(index) => index - 1..index,
        }
    }
}

/// Returns `true` if `input` is the wildcard address, ignoring case and
/// surrounding whitespace.
pub fn is_wildcard(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(WILDCARD)
}
