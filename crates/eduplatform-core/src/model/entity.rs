use crate::{
    entity::Level,
    model::field::{SearchField, SortRule},
    query::SortKey,
};
use std::fmt::Debug;

///
/// EntityModel
///
/// Static description of one entity kind as the query engine sees it:
/// which categorical field the category filter targets, whether a level
/// filter applies, which text fields are searchable, and the table mapping
/// sort keys to comparators.
///

pub struct EntityModel<E: 'static> {
    /// Stable external name used in logs.
    pub entity_name: &'static str,
    /// Collection name used as the root of validation paths.
    pub collection_name: &'static str,
    /// Primary categorical field (category / subject).
    pub category: fn(&E) -> &str,
    /// Level accessor; `None` when the kind has no level and level filters are ignored.
    pub level: Option<fn(&E) -> Level>,
    /// Fields matched by the free-text search term.
    pub search_fields: &'static [SearchField<E>],
    /// Supported sort keys; keys absent from this table keep input order.
    pub sorts: &'static [SortRule<E>],
}

impl<E: 'static> EntityModel<E> {
    /// Comparator rule registered for `key`, if this kind supports it.
    #[must_use]
    pub fn sort_rule(&self, key: SortKey) -> Option<&SortRule<E>> {
        self.sorts.iter().find(|rule| rule.key == key)
    }

    #[must_use]
    pub fn supports_sort(&self, key: SortKey) -> bool {
        self.sort_rule(key).is_some()
    }

    /// Sort keys in table order, for diagnostics.
    pub fn sort_keys(&self) -> impl Iterator<Item = SortKey> + '_ {
        self.sorts.iter().map(|rule| rule.key)
    }
}

///
/// CatalogEntity
///
/// Implemented by every record kind the catalog can list. The model is a
/// `'static` table so per-query work never rebuilds field or sort metadata.
///

pub trait CatalogEntity: Debug + Sized + 'static {
    type Id: Copy + Debug + Eq + Ord + std::hash::Hash + std::fmt::Display;

    const MODEL: &'static EntityModel<Self>;

    fn id(&self) -> Self::Id;
}
