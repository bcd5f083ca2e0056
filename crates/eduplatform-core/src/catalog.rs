//! Loaded, validated catalog.
use crate::{
    Error,
    entity::{Article, Course, Tutor},
    ingest::{RawArticle, RawCourse, RawRecord, RawTutor, ingest_collection},
    model::CatalogEntity,
    query::{CatalogQuery, QueryOutput, execute, query},
    validate::{Validate, ValidateError, Validator, check_unique},
};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

///
/// Collection
///
/// Read-only, validated list of one entity kind in source order, with an
/// id index for detail lookups.
///

#[derive(Debug)]
pub struct Collection<E: CatalogEntity> {
    items: Vec<E>,
    by_id: HashMap<E::Id, usize>,
}

impl<E: CatalogEntity> Collection<E> {
    /// Build from already typed records, running record checks and the
    /// duplicate-id check.
    pub fn new(items: Vec<E>) -> Result<Self, ValidateError>
    where
        E: Validate,
    {
        let mut v = Validator::new();
        v.scoped(E::MODEL.collection_name, |v| {
            check_unique(v, "id", &items, E::id);
            for (index, item) in items.iter().enumerate() {
                v.scoped(index, |v| v.visit(item));
            }
        });
        v.finish()?;

        Ok(Self::from_validated(items))
    }

    fn from_validated(items: Vec<E>) -> Self {
        let by_id = items
            .iter()
            .enumerate()
            .map(|(index, item)| (item.id(), index))
            .collect();

        Self { items, by_id }
    }

    #[must_use]
    pub fn get(&self, id: E::Id) -> Option<&E> {
        self.by_id.get(&id).map(|&index| &self.items[index])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.items.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[E] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn query(&self, q: &CatalogQuery) -> Vec<&E> {
        query(&self.items, q)
    }

    #[must_use]
    pub fn execute(&self, q: &CatalogQuery) -> QueryOutput<'_, E> {
        execute(&self.items, q)
    }
}

impl<'a, E: CatalogEntity> IntoIterator for &'a Collection<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

///
/// CatalogSources
/// JSON text for each collection.
///

#[derive(Clone, Copy, Debug)]
pub struct CatalogSources<'a> {
    pub courses: &'a str,
    pub tutors: &'a str,
    pub articles: &'a str,
}

///
/// Catalog
///

#[derive(Debug)]
pub struct Catalog {
    courses: Collection<Course>,
    tutors: Collection<Tutor>,
    articles: Collection<Article>,
}

impl Catalog {
    /// Decode, ingest, and validate all three collections.
    ///
    /// Decoding fails fast on the first malformed source. Ingestion and
    /// validation issues are collected across every collection before the
    /// load is rejected.
    pub fn from_json(sources: CatalogSources<'_>) -> Result<Self, Error> {
        let raw_courses = decode::<RawCourse>(Course::MODEL.collection_name, sources.courses)?;
        let raw_tutors = decode::<RawTutor>(Tutor::MODEL.collection_name, sources.tutors)?;
        let raw_articles = decode::<RawArticle>(Article::MODEL.collection_name, sources.articles)?;

        let mut v = Validator::new();
        let courses = ingest_collection(&mut v, raw_courses);
        let tutors = ingest_collection(&mut v, raw_tutors);
        let articles = ingest_collection(&mut v, raw_articles);

        if let Err(err) = v.finish() {
            tracing::warn!(error = %err, "catalog load rejected");
            return Err(err.into());
        }

        let catalog = Self {
            courses: Collection::from_validated(courses),
            tutors: Collection::from_validated(tutors),
            articles: Collection::from_validated(articles),
        };
        tracing::info!(
            courses = catalog.courses.len(),
            tutors = catalog.tutors.len(),
            articles = catalog.articles.len(),
            "catalog loaded"
        );

        Ok(catalog)
    }

    #[must_use]
    pub const fn courses(&self) -> &Collection<Course> {
        &self.courses
    }

    #[must_use]
    pub const fn tutors(&self) -> &Collection<Tutor> {
        &self.tutors
    }

    #[must_use]
    pub const fn articles(&self) -> &Collection<Article> {
        &self.articles
    }
}

fn decode<R: RawRecord + DeserializeOwned>(
    source_name: &'static str,
    text: &str,
) -> Result<Vec<R>, Error> {
    serde_json::from_str(text).map_err(|err| {
        tracing::warn!(source = source_name, error = %err, "catalog source is malformed");
        Error::decode(source_name, err)
    })
}

///
/// TESTS
///
