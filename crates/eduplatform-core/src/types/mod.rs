//! Typed scalar values parsed out of decorated fixture strings.
//!
//! Fixture data stores prices as `"$99"`, durations as `"12 weeks"` and read
//! times as `"5 min read"`. These are converted once at ingestion; the
//! decorated form survives only as each type's `Display` output.

mod date;
mod money;
mod quantity;

pub use date::{IsoDate, ParseDateError};
pub use money::{Money, ParseAmountError};
pub use quantity::{Minutes, ParseQuantityError, Weeks};
