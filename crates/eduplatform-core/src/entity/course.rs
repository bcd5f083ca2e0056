use crate::{
    direction::Direction,
    entity::{Level, UnknownVariant},
    model::{CatalogEntity, EntityModel, FieldText, SearchField, SortRule},
    query::SortKey,
    types::{Money, Weeks},
    validate::{Validate, ValidateContext, check_not_empty, check_percent, check_rating},
};
use derive_more::{Deref, Display, FromStr};
use serde::{Deserialize, Serialize, Serializer};
use std::{fmt, str::FromStr};

///
/// CourseId
///

#[derive(
    Clone,
    Copy,
    Debug,
    Deref,
    Deserialize,
    Display,
    Eq,
    FromStr,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct CourseId(u32);

impl CourseId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

///
/// CourseCategory
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[remain::sorted]
pub enum CourseCategory {
    Business,
    Design,
    Programming,
    Science,
}

impl CourseCategory {
    pub const ALL: [Self; 4] = [
        Self::Programming,
        Self::Design,
        Self::Business,
        Self::Science,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Design => "design",
            Self::Programming => "programming",
            Self::Science => "science",
        }
    }
}

impl FromStr for CourseCategory {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "course category",
                value: s.to_string(),
                expected: "programming, design, business, science",
            })
    }
}

impl fmt::Display for CourseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CourseCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

///
/// Course
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub category: CourseCategory,
    pub level: Level,
    pub duration: Weeks,
    pub price: Money,
    pub original_price: Option<Money>,
    pub rating: f64,
    pub reviews: u32,
    pub students: u32,
    /// Percentage, 0-100.
    pub popularity: u8,
    pub instructor: String,
    pub tags: Vec<String>,
}

impl Course {
    /// Discount against `original_price`, when the course is on sale.
    #[must_use]
    pub fn discount(&self) -> Option<Money> {
        self.original_price
            .filter(|original| *original > self.price)
            .map(|original| Money::from_cents(original.cents() - self.price.cents()))
    }
}

impl CatalogEntity for Course {
    type Id = CourseId;

    const MODEL: &'static EntityModel<Self> = &COURSE_MODEL;

    fn id(&self) -> CourseId {
        self.id
    }
}

impl Validate for Course {
    fn validate_self(&self, ctx: &mut dyn ValidateContext) {
        check_not_empty(ctx, "title", &self.title);
        check_not_empty(ctx, "description", &self.description);
        check_not_empty(ctx, "instructor", &self.instructor);
        check_rating(ctx, "rating", self.rating);
        check_percent(ctx, "popularity", self.popularity);
    }
}

///
/// MODEL
///

fn category(course: &Course) -> &str {
    course.category.as_str()
}

const fn level(course: &Course) -> Level {
    course.level
}

fn title(course: &Course) -> FieldText<'_> {
    FieldText::One(&course.title)
}

fn description(course: &Course) -> FieldText<'_> {
    FieldText::One(&course.description)
}

fn instructor(course: &Course) -> FieldText<'_> {
    FieldText::One(&course.instructor)
}

fn tags(course: &Course) -> FieldText<'_> {
    FieldText::Many(&course.tags)
}

pub static COURSE_MODEL: EntityModel<Course> = EntityModel {
    entity_name: "course",
    collection_name: "courses",
    category,
    level: Some(level),
    search_fields: &[
        SearchField {
            name: "title",
            text: title,
        },
        SearchField {
            name: "description",
            text: description,
        },
        SearchField {
            name: "instructor",
            text: instructor,
        },
        SearchField {
            name: "tags",
            text: tags,
        },
    ],
    sorts: &[
        SortRule {
            key: SortKey::Popularity,
            direction: Direction::Desc,
            compare: |a: &Course, b: &Course| a.popularity.cmp(&b.popularity),
        },
        SortRule {
            key: SortKey::Rating,
            direction: Direction::Desc,
            compare: |a: &Course, b: &Course| a.rating.total_cmp(&b.rating),
        },
        SortRule {
            key: SortKey::Students,
            direction: Direction::Desc,
            compare: |a: &Course, b: &Course| a.students.cmp(&b.students),
        },
        SortRule {
            key: SortKey::PriceLow,
            direction: Direction::Asc,
            compare: |a: &Course, b: &Course| a.price.cmp(&b.price),
        },
        SortRule {
            key: SortKey::PriceHigh,
            direction: Direction::Desc,
            compare: |a: &Course, b: &Course| a.price.cmp(&b.price),
        },
    ],
};
