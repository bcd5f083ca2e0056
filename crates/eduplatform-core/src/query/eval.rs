use crate::{model::EntityModel, query::CatalogQuery};

///
/// Evaluate the filter phase for one entity.
///
/// Category, level and search predicates are combined by logical AND:
/// - the category filter targets the model's primary categorical field
/// - the level filter is ignored for kinds without a level
/// - an absent needle (empty search term) matches everything
///
/// `needle` must already be lowercased.
///
#[must_use]
pub(crate) fn matches<E: 'static>(
    model: &EntityModel<E>,
    entity: &E,
    query: &CatalogQuery,
    needle: Option<&str>,
) -> bool {
    query.category_filter.matches((model.category)(entity))
        && level_matches(model, entity, query)
        && needle.is_none_or(|needle| search_matches(model, entity, needle))
}

fn level_matches<E: 'static>(model: &EntityModel<E>, entity: &E, query: &CatalogQuery) -> bool {
    match model.level {
        Some(level) => query.level_filter.matches(level(entity).as_str()),
        None => true,
    }
}

// At least one searchable field contains the needle.
fn search_matches<E: 'static>(model: &EntityModel<E>, entity: &E, needle: &str) -> bool {
    model
        .search_fields
        .iter()
        .any(|field| (field.text)(entity).contains_folded(needle))
}
