//! Catalog record kinds.
//!
//! Records are immutable once ingested: the catalog hands out shared
//! references only, and the query engine reorders views over them.

mod article;
mod course;
mod tutor;

pub use article::{ARTICLE_MODEL, Article, ArticleId};
pub use course::{COURSE_MODEL, Course, CourseCategory, CourseId};
pub use tutor::{TUTOR_MODEL, Tutor, TutorId};

use serde::{Serialize, Serializer};
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

///
/// UnknownVariant
/// A closed-set text value did not name a known variant.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("unknown {kind} '{value}', expected one of: {expected}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

///
/// Level
///
/// Course difficulty. Ordinal for display (`Beginner < Advanced`), matched by
/// exact name when filtering.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl FromStr for Level {
    type Err = UnknownVariant;

    // fixtures carry both "beginner" and "Beginner"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant {
                kind: "level",
                value: s.to_string(),
                expected: "beginner, intermediate, advanced",
            })
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

///
/// TESTS
///
