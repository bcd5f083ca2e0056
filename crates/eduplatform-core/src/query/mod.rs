//! Catalog query engine.
//!
//! A pure, two-phase transform over a borrowed slice of entities: a filter
//! pass (category, level, search) followed by a stable sort pass selected
//! from the entity model's sort table. Entities are never cloned or
//! mutated; the result is an ordered view of references into the input.
mod descriptor;
mod eval;
mod order;

#[cfg(test)]
mod tests;

pub use descriptor::{CatalogQuery, Filter, SortKey};

use crate::{direction::Direction, model::CatalogEntity};

///
/// SortOutcome
/// What the sort phase did with the requested key.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortOutcome {
    /// `SortKey::Original` was requested; input order kept.
    Original,
    /// The key has a rule for this kind and was applied.
    Applied { key: SortKey, direction: Direction },
    /// The kind has no rule for this key; input order kept.
    Unsupported(SortKey),
}

///
/// QueryStats
/// Row counts and sort decision for one execution.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct QueryStats {
    pub entity: &'static str,
    pub rows_scanned: usize,
    pub rows_after_filter: usize,
    pub sort: SortOutcome,
}

///
/// QueryOutput
///

#[derive(Debug)]
pub struct QueryOutput<'a, E> {
    pub rows: Vec<&'a E>,
    pub stats: QueryStats,
}

/// Filter and order `items` according to `query`.
///
/// Total over its domain: an empty result is a valid answer, unknown or
/// unsupported sort keys keep the filtered rows in input order.
#[must_use]
pub fn query<'a, E: CatalogEntity>(items: &'a [E], query: &CatalogQuery) -> Vec<&'a E> {
    execute(items, query).rows
}

/// Like [`query`], also reporting row counts and the sort decision.
#[must_use]
pub fn execute<'a, E: CatalogEntity>(items: &'a [E], query: &CatalogQuery) -> QueryOutput<'a, E> {
    let model = E::MODEL;
    let needle = query.search_needle();

    // Filter.
    let mut rows: Vec<&E> = items
        .iter()
        .filter(|entity| eval::matches(model, entity, query, needle.as_deref()))
        .collect();
    let rows_after_filter = rows.len();

    // Ordering (always after filtering).
    let sort = match query.sort_key {
        SortKey::Original => SortOutcome::Original,
        key => match model.sort_rule(key) {
            Some(rule) => {
                order::apply_order(&mut rows, rule);
                SortOutcome::Applied {
                    key,
                    direction: rule.direction,
                }
            }
            None => SortOutcome::Unsupported(key),
        },
    };

    QueryOutput {
        rows,
        stats: QueryStats {
            entity: model.entity_name,
            rows_scanned: items.len(),
            rows_after_filter,
            sort,
        },
    }
}
