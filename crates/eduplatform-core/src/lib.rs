//! Core runtime for EduPlatform: catalog entities, typed ingestion and
//! validation, and the pure query engine shared by every listing.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod catalog;
pub mod dashboard;
pub mod direction;
pub mod entity;
pub mod error;
pub mod ingest;
pub mod model;
pub mod query;
pub mod session;
pub mod types;
pub mod validate;

// test
#[cfg(test)]
pub(crate) mod test_support;

pub use error::Error;

///
/// CONSTANTS
///

/// Upper bound (inclusive) for every rating in the catalog.
pub const MAX_RATING: f64 = 5.0;

/// Upper bound (inclusive) for percentage fields (popularity, progress).
pub const MAX_PERCENT: u8 = 100;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, loaders, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        catalog::{Catalog, Collection},
        entity::{Article, Course, CourseCategory, Level, Tutor},
        query::{CatalogQuery, Filter, SortKey},
        session::CatalogSession,
        types::{Minutes, Money, Weeks},
    };
}
