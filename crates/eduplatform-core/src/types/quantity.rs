use derive_more::Deref;
use serde::Serialize;
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

///
/// ParseQuantityError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum ParseQuantityError {
    #[error("quantity is empty")]
    Empty,

    #[error("'{value}' is not a whole number")]
    InvalidNumber { value: String },

    #[error("unexpected trailing text '{text}'")]
    TrailingText { text: String },

    #[error("unknown unit '{unit}', expected one of: {expected}")]
    UnknownUnit { unit: String, expected: String },
}

///
/// UnitSpec
/// Accepted spellings for one unit plus optional trailing words.
///

struct UnitSpec {
    units: &'static [&'static str],
    trailing: &'static [&'static str],
}

const WEEK_UNITS: UnitSpec = UnitSpec {
    units: &["week", "weeks"],
    trailing: &[],
};

const MINUTE_UNITS: UnitSpec = UnitSpec {
    units: &["min", "mins", "minute", "minutes"],
    trailing: &["read"],
};

// Parse `<n> <unit> [trailing]`; a bare number is accepted as already in the unit.
fn parse_quantity(input: &str, spec: &UnitSpec) -> Result<u16, ParseQuantityError> {
    let mut tokens = input.split_whitespace();
    let Some(number) = tokens.next() else {
        return Err(ParseQuantityError::Empty);
    };
    let value = number
        .parse::<u16>()
        .map_err(|_| ParseQuantityError::InvalidNumber {
            value: number.to_string(),
        })?;

    if let Some(unit) = tokens.next() {
        let unit_lower = unit.to_lowercase();
        if !spec.units.contains(&unit_lower.as_str()) {
            return Err(ParseQuantityError::UnknownUnit {
                unit: unit.to_string(),
                expected: spec.units.join(", "),
            });
        }
    }

    let rest: Vec<&str> = tokens.collect();
    let trailing_ok = match rest.as_slice() {
        [] => true,
        [word] => spec.trailing.contains(&word.to_lowercase().as_str()),
        _ => false,
    };
    if !trailing_ok {
        return Err(ParseQuantityError::TrailingText { text: rest.join(" ") });
    }

    Ok(value)
}

///
/// Weeks
/// Course length, parsed from strings like `"12 weeks"`.
///

#[derive(Clone, Copy, Debug, Default, Deref, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Weeks(u16);

impl Weeks {
    #[must_use]
    pub const fn new(weeks: u16) -> Self {
        Self(weeks)
    }

    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl FromStr for Weeks {
    type Err = ParseQuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_quantity(s, &WEEK_UNITS).map(Self)
    }
}

impl fmt::Display for Weeks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 1 {
            write!(f, "1 week")
        } else {
            write!(f, "{} weeks", self.0)
        }
    }
}

///
/// Minutes
/// Article read time, parsed from strings like `"5 min read"`.
///

#[derive(Clone, Copy, Debug, Default, Deref, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Minutes(u16);

impl Minutes {
    #[must_use]
    pub const fn new(minutes: u16) -> Self {
        Self(minutes)
    }

    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl FromStr for Minutes {
    type Err = ParseQuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_quantity(s, &MINUTE_UNITS).map(Self)
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.0)
    }
}

///
/// TESTS
///
