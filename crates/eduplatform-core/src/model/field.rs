use crate::{direction::Direction, query::SortKey};
use std::cmp::Ordering;

///
/// FieldText
/// Borrowed view of one searchable field's text.
///

#[derive(Clone, Copy, Debug)]
pub enum FieldText<'a> {
    One(&'a str),
    Many(&'a [String]),
}

impl FieldText<'_> {
    /// Case-insensitive substring test; `needle` must already be lowercased.
    #[must_use]
    pub fn contains_folded(self, needle: &str) -> bool {
        match self {
            Self::One(text) => contains_folded(text, needle),
            Self::Many(items) => items.iter().any(|text| contains_folded(text, needle)),
        }
    }
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

///
/// SearchField
///

pub struct SearchField<E> {
    pub name: &'static str,
    pub text: fn(&E) -> FieldText<'_>,
}

///
/// SortRule
///
/// One row of an entity's sort table. `compare` orders two entities
/// ascending by the sort value; `direction` says how the key presents it.
///

pub struct SortRule<E> {
    pub key: SortKey,
    pub direction: Direction,
    pub compare: fn(&E, &E) -> Ordering,
}

impl<E> SortRule<E> {
    #[must_use]
    pub fn ordering(&self, left: &E, right: &E) -> Ordering {
        self.direction.apply((self.compare)(left, right))
    }
}
