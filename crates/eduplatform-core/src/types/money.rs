use serde::{Serialize, Serializer};
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

///
/// ParseAmountError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum ParseAmountError {
    #[error("amount is empty")]
    Empty,

    #[error("amount '{value}' is not a plain decimal (expected forms like $99 or $89.99)")]
    InvalidFormat { value: String },

    #[error("amount must be a finite, non-negative number")]
    NotFinite,

    #[error("amount '{value}' is too large")]
    Overflow { value: String },

    #[error("amount '{value}' has more than two decimal places")]
    TooManyDecimals { value: String },
}

///
/// Money
///
/// Single-currency amount stored as whole cents. Ordering is numeric, so
/// price sorts never re-parse display strings.
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Money {
    cents: u64,
}

impl Money {
    pub const CURRENCY_SYMBOL: char = '$';

    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    #[must_use]
    pub const fn from_dollars(dollars: u64) -> Self {
        Self {
            cents: dollars.saturating_mul(100),
        }
    }

    #[must_use]
    pub const fn cents(self) -> u64 {
        self.cents
    }

    /// Build an amount from a JSON number such as `89.99`.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn from_decimal(value: f64) -> Result<Self, ParseAmountError> {
        if !value.is_finite() || value < 0.0 {
            return Err(ParseAmountError::NotFinite);
        }

        let scaled = value * 100.0;
        let rounded = scaled.round();
        if (scaled - rounded).abs() > 1e-6 {
            return Err(ParseAmountError::TooManyDecimals {
                value: value.to_string(),
            });
        }
        if rounded >= u64::MAX as f64 {
            return Err(ParseAmountError::Overflow {
                value: value.to_string(),
            });
        }

        Ok(Self::from_cents(rounded as u64))
    }
}

impl FromStr for Money {
    type Err = ParseAmountError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix(Self::CURRENCY_SYMBOL)
            .unwrap_or(trimmed);
        if digits.is_empty() {
            return Err(ParseAmountError::Empty);
        }

        let invalid = || ParseAmountError::InvalidFormat {
            value: trimmed.to_string(),
        };
        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (digits, None),
        };
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let fraction_cents = match fraction {
            None => 0,
            Some(fraction) => {
                if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                if fraction.len() > 2 {
                    return Err(ParseAmountError::TooManyDecimals {
                        value: trimmed.to_string(),
                    });
                }
                let parsed: u64 = fraction.parse().map_err(|_| invalid())?;
                if fraction.len() == 1 { parsed * 10 } else { parsed }
            }
        };

        let overflow = || ParseAmountError::Overflow {
            value: trimmed.to_string(),
        };
        let whole: u64 = whole.parse().map_err(|_| overflow())?;
        let cents = whole
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(fraction_cents))
            .ok_or_else(overflow)?;

        Ok(Self::from_cents(cents))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (whole, fraction) = (self.cents / 100, self.cents % 100);
        if fraction == 0 {
            write!(f, "{}{whole}", Self::CURRENCY_SYMBOL)
        } else {
            write!(f, "{}{whole}.{fraction:02}", Self::CURRENCY_SYMBOL)
        }
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

///
/// TESTS
///
