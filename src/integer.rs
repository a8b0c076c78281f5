//! Integers of unbounded width as they appear in route text.
//!
//! Route input never limits the size of an integer: a fuel tag may be any
//! integer, and a huge compartment number or header value is a valid integer
//! that is merely out of range. Values that fit in `i64` are stored as such;
//! anything wider is kept as canonical decimal text (no `+`, no leading
//! zeros), so two tokens denoting the same number always compare equal.

use std::num::IntErrorKind;

#[derive(Clone, PartialEq, Eq, Hash)]
enum Repr {
    Small(i64),
    /// Canonical decimal text of a value outside the `i64` range.
    Wide(Box<str>),
}

/// A whole number of any size, compared by value.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Integer(Repr);

impl Integer {
    pub const fn from_i64(value: i64) -> Self {
        Self(Repr::Small(value))
    }

    /// Parse a decimal token with an optional sign.
    ///
    /// Returns `None` if the token is not an integer at all.
    pub fn parse(token: &str) -> Option<Self> {
        match token.parse::<i64>() {
            Ok(value) => Some(Self::from_i64(value)),
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                Some(Self::wide(token))
            }
            Err(_) => None,
        }
    }

    /// The value as `i64`, if it fits.
    pub fn as_i64(&self) -> Option<i64> {
        match self.0 {
            Repr::Small(value) => Some(value),
            Repr::Wide(_) => None,
        }
    }

    /// The value as `usize`, if it is non-negative and fits.
    pub fn to_usize(&self) -> Option<usize> {
        self.as_i64().and_then(|v| usize::try_from(v).ok())
    }

    // Only called on tokens `i64` rejected for overflow, so the digits are
    // valid and not all zero.
    fn wide(token: &str) -> Self {
        let (negative, digits) = match token.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, token.strip_prefix('+').unwrap_or(token)),
        };
        let digits = digits.trim_start_matches('0');
        let text = if negative {
            format!("-{digits}")
        } else {
            digits.to_string()
        };
        Self(Repr::Wide(text.into_boxed_str()))
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl PartialEq<i64> for Integer {
    fn eq(&self, other: &i64) -> bool {
        self.as_i64() == Some(*other)
    }
}

impl std::fmt::Display for Integer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Repr::Small(value) => write!(f, "{value}"),
            Repr::Wide(text) => f.write_str(text),
        }
    }
}

impl std::fmt::Debug for Integer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}
