use crate::{
    catalog::{Catalog, Collection},
    entity::{Article, Course, Tutor},
    model::CatalogEntity,
    query::{CatalogQuery, QueryOutput},
};

///
/// CatalogSession
///
/// Borrowed query handle over a loaded catalog with per-session policy.
/// With `debug` on, every query logs its row counts and sort decision.
///

#[derive(Clone, Copy, Debug)]
pub struct CatalogSession<'a> {
    catalog: &'a Catalog,
    debug: bool,
}

impl<'a> CatalogSession<'a> {
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            debug: false,
        }
    }

    #[must_use]
    pub const fn debug(mut self) -> Self {
        self.debug = true;
        self
    }

    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    #[must_use]
    pub fn courses(&self, q: &CatalogQuery) -> Vec<&'a Course> {
        self.run(self.catalog.courses(), q)
    }

    #[must_use]
    pub fn tutors(&self, q: &CatalogQuery) -> Vec<&'a Tutor> {
        self.run(self.catalog.tutors(), q)
    }

    #[must_use]
    pub fn articles(&self, q: &CatalogQuery) -> Vec<&'a Article> {
        self.run(self.catalog.articles(), q)
    }

    fn run<E: CatalogEntity>(&self, collection: &'a Collection<E>, q: &CatalogQuery) -> Vec<&'a E> {
        let QueryOutput { rows, stats } = collection.execute(q);

        if self.debug {
            tracing::debug!(
                entity = stats.entity,
                search = %q.search_term,
                category = %q.category_filter,
                level = %q.level_filter,
                sort = %q.sort_key,
                scanned = stats.rows_scanned,
                matched = stats.rows_after_filter,
                outcome = ?stats.sort,
                "query executed"
            );
        }

        rows
    }
}

///
/// TESTS
///
