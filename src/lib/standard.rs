//! The C++ ISO standard levels and the tokens that request them
use core::fmt;
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{CppstdError, Result};

/// The GNU dialect marker that can prefix any standard token (`gnu17`)
pub const GNU_PREFIX: &str = "gnu";

/// The C++ ISO standard levels of the language.
///
/// The declaration order is the chronological order of the standards, so the derived
/// [`Ord`] is the comparison used everywhere a level is checked against another one.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum LanguageLevel {
    CPP98,
    CPP11,
    CPP14,
    CPP17,
    CPP20,
    CPP23,
    CPP26,
}

/// Every known level, with the canonical token first and the pre-publication
/// aliases accepted for it after.
///
/// New standards are added here and nowhere else.
pub const KNOWN_LEVELS: &[(LanguageLevel, &str, &[&str])] = &[
    (LanguageLevel::CPP98, "98", &["03"]),
    (LanguageLevel::CPP11, "11", &["0x"]),
    (LanguageLevel::CPP14, "14", &["1y"]),
    (LanguageLevel::CPP17, "17", &["1z"]),
    (LanguageLevel::CPP20, "20", &["2a"]),
    (LanguageLevel::CPP23, "23", &["2b"]),
    (LanguageLevel::CPP26, "26", &["2c"]),
];

impl LanguageLevel {
    /// Looks up a bare (non `gnu` prefixed) token in [`KNOWN_LEVELS`]
    pub fn from_token(token: &str) -> Option<Self> {
        KNOWN_LEVELS
            .iter()
            .find(|(_, canonical, aliases)| *canonical == token || aliases.contains(&token))
            .map(|(level, _, _)| *level)
    }

    /// The year the standard was published in
    pub fn year(&self) -> u64 {
        match *self {
            LanguageLevel::CPP98 => 1998,
            LanguageLevel::CPP11 => 2011,
            LanguageLevel::CPP14 => 2014,
            LanguageLevel::CPP17 => 2017,
            LanguageLevel::CPP20 => 2020,
            LanguageLevel::CPP23 => 2023,
            LanguageLevel::CPP26 => 2026,
        }
    }
}

/// The year a bare standard number stands for. `98` is the only one of the last
/// century, other two digit numbers are of this one and longer numbers are
/// already years.
pub fn publication_year(number: u64) -> u64 {
    match number {
        98 => 1998,
        0..=99 => 2000 + number,
        _ => number,
    }
}

impl fmt::Display for LanguageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl AsRef<str> for LanguageLevel {
    fn as_ref(&self) -> &'static str {
        match *self {
            LanguageLevel::CPP98 => "98",
            LanguageLevel::CPP11 => "11",
            LanguageLevel::CPP14 => "14",
            LanguageLevel::CPP17 => "17",
            LanguageLevel::CPP20 => "20",
            LanguageLevel::CPP23 => "23",
            LanguageLevel::CPP26 => "26",
        }
    }
}

/// A parsed standard request, like `17` or `gnu17`.
///
/// ```rust
/// use cppstd::standard::{LanguageLevel, StandardToken};
///
/// let token = StandardToken::parse("gnu2a").unwrap();
/// assert_eq!(token.level, LanguageLevel::CPP20);
/// assert!(token.gnu_extension);
/// assert_eq!(token.to_string(), "gnu20");
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
pub struct StandardToken {
    pub level: LanguageLevel,
    pub gnu_extension: bool,
}

impl StandardToken {
    pub fn new(level: LanguageLevel, gnu_extension: bool) -> Self {
        Self {
            level,
            gnu_extension,
        }
    }

    pub fn parse(token: &str) -> Result<Self> {
        let trimmed = token.trim();
        let (bare, gnu_extension) = match trimmed.strip_prefix(GNU_PREFIX) {
            Some(rest) => (rest, true),
            None => (trimmed, false),
        };

        LanguageLevel::from_token(bare)
            .map(|level| Self::new(level, gnu_extension))
            .ok_or_else(|| CppstdError::UnknownStandard(token.to_string()))
    }
}

/// Orders two tokens by their level alone. The GNU flag never takes part in it.
pub fn compare(a: &StandardToken, b: &StandardToken) -> Ordering {
    a.level.cmp(&b.level)
}

/// A standard given by the caller as a bare number, like the `17` bound of a check.
///
/// It doesn't need to be one of [`KNOWN_LEVELS`]: numbers are ordered by the year
/// they stand for, so a bound on a standard still to come (`42`) can be checked.
///
/// ```rust
/// use cppstd::standard::{self, StandardNumber, StandardToken};
/// use std::cmp::Ordering;
///
/// let gnu14 = StandardToken::parse("gnu14").unwrap();
/// let future = StandardNumber::parse("42").unwrap();
/// assert_eq!(standard::compare_to_number(&gnu14, &future), Ordering::Less);
/// assert!(StandardNumber::parse("gnu17").is_none());
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct StandardNumber {
    digits: String,
    year: u64,
}

impl StandardNumber {
    /// Reads a non empty run of ASCII digits. Anything else, a `gnu` prefix
    /// included, is not a number.
    pub fn parse(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let number = digits.parse::<u64>().ok()?;
        Some(Self {
            digits: digits.to_string(),
            year: publication_year(number),
        })
    }

    pub fn year(&self) -> u64 {
        self.year
    }
}

impl fmt::Display for StandardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

/// Orders a token against a bare number by publication year. The GNU flag never
/// takes part in it.
pub fn compare_to_number(token: &StandardToken, number: &StandardNumber) -> Ordering {
    token.level.year().cmp(&number.year())
}

impl fmt::Display for StandardToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.gnu_extension {
            write!(f, "{GNU_PREFIX}{}", self.level)
        } else {
            write!(f, "{}", self.level)
        }
    }
}

impl std::str::FromStr for StandardToken {
    type Err = CppstdError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
