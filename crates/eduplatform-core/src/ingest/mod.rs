//! Fixture ingestion.
//!
//! Raw records mirror the fixture JSON (decorated strings, signed counts,
//! free-text enums). Ingestion converts them into typed entities, recording
//! every conversion failure against the record's path; typed records are
//! then validated in place.
mod raw;

#[cfg(test)]
mod tests;

pub use raw::{RawAmount, RawArticle, RawCourse, RawTutor};

use crate::validate::{Validate, ValidateContext, Validator, check_unique};
use std::{fmt::Display, hash::Hash};

///
/// RawRecord
///

pub trait RawRecord {
    type Id: Display + Eq + Hash;
    type Output: Validate;

    /// Root of this collection's issue paths.
    fn collection_name() -> &'static str;

    fn raw_id(&self) -> Self::Id;

    /// Convert into a typed record, or `None` after reporting why not.
    fn ingest(self, v: &mut Validator) -> Option<Self::Output>;
}

/// Ingest one collection under its collection name.
///
/// Duplicate ids are checked on the raw records so issue indexes always
/// match positions in the source file.
pub fn ingest_collection<R: RawRecord>(v: &mut Validator, raws: Vec<R>) -> Vec<R::Output> {
    v.scoped(R::collection_name(), |v| {
        check_unique(v, "id", &raws, R::raw_id);

        raws.into_iter()
            .enumerate()
            .filter_map(|(index, raw)| {
                v.scoped(index, |v| {
                    let record = raw.ingest(v)?;
                    v.visit(&record);
                    Some(record)
                })
            })
            .collect()
    })
}

// Record a conversion failure at `field`, yielding the value on success.
pub(crate) fn field<T, E: Display>(
    v: &mut Validator,
    field: &'static str,
    result: Result<T, E>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            v.add_issue_at(field.into(), err.to_string());
            None
        }
    }
}

// Signed count from the wire, narrowed to the typed width.
pub(crate) fn count<T: TryFrom<i64>>(v: &mut Validator, name: &'static str, raw: i64) -> Option<T> {
    if raw < 0 {
        v.add_issue_at(name.into(), format!("count {raw} must not be negative"));
        return None;
    }

    let narrowed = T::try_from(raw).ok();
    if narrowed.is_none() {
        v.add_issue_at(name.into(), format!("count {raw} is too large"));
    }

    narrowed
}
