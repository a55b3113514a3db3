use serde::{Deserialize, Serialize};
use std::fmt;

/// Rank of a major-arcana card as stored upstream: a number or free text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CardNumber {
    Number(i64),
    Text(String),
}

impl CardNumber {
    /// Value used for ordering.
    ///
    /// Text is read with [`parse_leading_int`]; anything unparseable counts as 0.
    #[must_use]
    pub fn sort_value(&self) -> i64 {
        match self {
            CardNumber::Number(n) => *n,
            CardNumber::Text(s) => parse_leading_int(s).unwrap_or(0),
        }
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardNumber::Number(n) => write!(f, "{n}"),
            CardNumber::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for CardNumber {
    fn from(value: i64) -> Self {
        CardNumber::Number(value)
    }
}

impl From<&str> for CardNumber {
    fn from(value: &str) -> Self {
        CardNumber::Text(value.to_owned())
    }
}

/// Reads an optionally signed base-10 integer prefix, ignoring leading
/// whitespace and any trailing garbage (`"7abc"` is 7, `"3.5"` is 3).
///
/// Returns `None` when no digit follows the optional sign. Digit runs too
/// long for `i64` saturate at the bound instead of failing.
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let mut digits = rest.bytes().take_while(u8::is_ascii_digit).peekable();
    digits.peek()?;
    let value = digits.fold(0_i64, |acc, d| {
        let d = i64::from(d - b'0');
        if negative {
            acc.saturating_mul(10).saturating_sub(d)
        } else {
            acc.saturating_mul(10).saturating_add(d)
        }
    });
    Some(value)
}
