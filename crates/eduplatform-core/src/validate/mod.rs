//! Load-time validation.
//!
//! Validation never stops at the first problem: every issue is recorded
//! against a rendered path (`courses[2].rating`) and the load is rejected
//! once all records have been inspected.
#[cfg(test)]
mod tests;

use crate::{MAX_PERCENT, MAX_RATING};
use std::collections::{BTreeMap, HashMap, hash_map::Entry};
use std::hash::Hash;
use thiserror::Error as ThisError;

///
/// ValidateError
///

#[derive(Debug, ThisError)]
pub enum ValidateError {
    #[error("validation failed with {} issue(s)", count_issues(.0))]
    ValidationFailed(BTreeMap<String, Vec<String>>),
}

fn count_issues(issues: &BTreeMap<String, Vec<String>>) -> usize {
    issues.values().map(Vec::len).sum()
}

// ============================================================================
// Path
// ============================================================================

#[derive(Clone, Debug)]
pub enum PathSegment {
    Empty,
    Field(&'static str),
    Index(usize),
}

impl From<&'static str> for PathSegment {
    fn from(s: &'static str) -> Self {
        Self::Field(s)
    }
}

impl From<usize> for PathSegment {
    fn from(i: usize) -> Self {
        Self::Index(i)
    }
}

fn render_path(path: &[PathSegment], extra: Option<PathSegment>) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let mut first = true;

    for seg in path.iter().cloned().chain(extra) {
        match seg {
            PathSegment::Field(s) => {
                if !first {
                    out.push('.');
                }
                out.push_str(s);
            }
            PathSegment::Index(i) => {
                let _ = write!(out, "[{i}]");
            }
            PathSegment::Empty => continue,
        }
        first = false;
    }

    out
}

// ============================================================================
// ValidateContext
// ============================================================================

/// Narrow interface exposed to records for reporting issues.
pub trait ValidateContext {
    fn add_issue(&mut self, message: String);
    fn add_issue_at(&mut self, seg: PathSegment, message: String);
}

///
/// Validate
/// Record-level checks run after a record has been ingested.
///

pub trait Validate {
    fn validate_self(&self, ctx: &mut dyn ValidateContext);
}

// ============================================================================
// Validator
// ============================================================================

///
/// Validator
///
/// Path-tracking issue collector. Ingestion pushes the collection name and
/// record index, records report field-level issues, and `finish` turns the
/// collected issues into a single rejection.
///

#[derive(Debug, Default)]
pub struct Validator {
    path: Vec<PathSegment>,
    issues: BTreeMap<String, Vec<String>>,
}

impl Validator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with `seg` appended to the current path.
    pub fn scoped<S, R>(&mut self, seg: S, f: impl FnOnce(&mut Self) -> R) -> R
    where
        S: Into<PathSegment>,
    {
        let seg = seg.into();
        let should_push = !matches!(seg, PathSegment::Empty);

        if should_push {
            self.path.push(seg);
        }
        let out = f(self);
        if should_push {
            self.path.pop();
        }

        out
    }

    /// Validate one record at the current path.
    pub fn visit(&mut self, node: &dyn Validate) {
        node.validate_self(self);
    }

    #[must_use]
    pub const fn issues(&self) -> &BTreeMap<String, Vec<String>> {
        &self.issues
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn finish(self) -> Result<(), ValidateError> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(ValidateError::ValidationFailed(self.issues))
        }
    }
}

impl ValidateContext for Validator {
    fn add_issue(&mut self, message: String) {
        let key = render_path(&self.path, None);
        self.issues.entry(key).or_default().push(message);
    }

    fn add_issue_at(&mut self, seg: PathSegment, message: String) {
        let key = render_path(&self.path, Some(seg));
        self.issues.entry(key).or_default().push(message);
    }
}

// ============================================================================
// Checks
// ============================================================================

pub fn check_not_empty(ctx: &mut dyn ValidateContext, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        ctx.add_issue_at(field.into(), "must not be empty".to_string());
    }
}

pub fn check_rating(ctx: &mut dyn ValidateContext, field: &'static str, value: f64) {
    if !(0.0..=MAX_RATING).contains(&value) {
        ctx.add_issue_at(
            field.into(),
            format!("rating {value} is outside [0, {MAX_RATING}]"),
        );
    }
}

pub fn check_percent(ctx: &mut dyn ValidateContext, field: &'static str, value: u8) {
    if value > MAX_PERCENT {
        ctx.add_issue_at(
            field.into(),
            format!("{value} is outside [0, {MAX_PERCENT}]"),
        );
    }
}

/// Report every record whose key repeats an earlier record's key.
///
/// Issues land on the later record (`<collection>[i].id`), naming the index
/// of the first occurrence.
pub fn check_unique<K, T>(
    v: &mut Validator,
    field: &'static str,
    records: &[T],
    key: impl Fn(&T) -> K,
) where
    K: Eq + Hash + std::fmt::Display,
{
    let mut seen: HashMap<K, usize> = HashMap::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        match seen.entry(key(record)) {
            Entry::Occupied(first) => {
                let message = format!(
                    "duplicate {field} {} (first used at [{}])",
                    first.key(),
                    first.get()
                );
                v.scoped(index, |v| v.add_issue_at(field.into(), message));
            }
            Entry::Vacant(slot) => {
                slot.insert(index);
            }
        }
    }
}
