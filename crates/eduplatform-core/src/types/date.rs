use serde::{Serialize, Serializer};
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;
use time::{Date, format_description::well_known::Iso8601};

///
/// ParseDateError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("'{value}' is not an ISO calendar date (YYYY-MM-DD)")]
pub struct ParseDateError {
    pub value: String,
}

///
/// IsoDate
///
/// Calendar date in `YYYY-MM-DD` form. Orders chronologically.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct IsoDate(Date);

impl IsoDate {
    const TEXT_LEN: usize = "YYYY-MM-DD".len();

    #[must_use]
    pub const fn date(self) -> Date {
        self.0
    }
}

impl From<Date> for IsoDate {
    fn from(date: Date) -> Self {
        Self(date)
    }
}

impl FromStr for IsoDate {
    type Err = ParseDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseDateError {
            value: s.to_string(),
        };

        // the ISO parser also accepts basic, ordinal and week-date forms
        let shaped = s.len() == Self::TEXT_LEN
            && s.bytes().enumerate().all(|(i, b)| match i {
                4 | 7 => b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !shaped {
            return Err(err());
        }

        Date::parse(s, &Iso8601::DATE).map(Self).map_err(|_| err())
    }
}

impl fmt::Display for IsoDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day()
        )
    }
}

impl Serialize for IsoDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

///
/// TESTS
///
