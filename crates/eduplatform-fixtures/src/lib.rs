//! Seed data for EduPlatform and loaders for data directories laid out the
//! same way (`courses.json`, `tutors.json`, `articles.json`,
//! `dashboard.json`).
#![warn(unreachable_pub)]

use eduplatform_core::{
    Error,
    catalog::{Catalog, CatalogSources},
    dashboard::Dashboard,
};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

pub const COURSES_FILE: &str = "courses.json";
pub const TUTORS_FILE: &str = "tutors.json";
pub const ARTICLES_FILE: &str = "articles.json";
pub const DASHBOARD_FILE: &str = "dashboard.json";

///
/// SEED
///

pub const SEED_COURSES: &str = include_str!("../data/courses.json");
pub const SEED_TUTORS: &str = include_str!("../data/tutors.json");
pub const SEED_ARTICLES: &str = include_str!("../data/articles.json");
pub const SEED_DASHBOARD: &str = include_str!("../data/dashboard.json");

#[must_use]
pub const fn seed_sources() -> CatalogSources<'static> {
    CatalogSources {
        courses: SEED_COURSES,
        tutors: SEED_TUTORS,
        articles: SEED_ARTICLES,
    }
}

pub fn seed_catalog() -> Result<Catalog, Error> {
    Catalog::from_json(seed_sources())
}

pub fn seed_dashboard() -> Result<Dashboard, Error> {
    Dashboard::from_json(SEED_DASHBOARD)
}

///
/// FixtureError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum FixtureError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Load(#[from] Error),
}

///
/// DataDir
/// Source text read from a data directory.
///

#[derive(Clone, Debug)]
pub struct DataDir {
    root: PathBuf,
    courses: String,
    tutors: String,
    articles: String,
}

impl DataDir {
    /// Read the three catalog files under `root`.
    pub fn read(root: &Path) -> Result<Self, FixtureError> {
        tracing::debug!(root = %root.display(), "reading data directory");

        Ok(Self {
            root: root.to_path_buf(),
            courses: read(root, COURSES_FILE)?,
            tutors: read(root, TUTORS_FILE)?,
            articles: read(root, ARTICLES_FILE)?,
        })
    }

    #[must_use]
    pub fn sources(&self) -> CatalogSources<'_> {
        CatalogSources {
            courses: &self.courses,
            tutors: &self.tutors,
            articles: &self.articles,
        }
    }

    pub fn catalog(&self) -> Result<Catalog, FixtureError> {
        Ok(Catalog::from_json(self.sources())?)
    }

    /// The dashboard is read on demand; listings never need it.
    pub fn dashboard(&self) -> Result<Dashboard, FixtureError> {
        let text = read(&self.root, DASHBOARD_FILE)?;

        Ok(Dashboard::from_json(&text)?)
    }
}

fn read(root: &Path, name: &str) -> Result<String, FixtureError> {
    let path = root.join(name);

    fs::read_to_string(&path).map_err(|source| FixtureError::Io { path, source })
}

///
/// TESTS
///
