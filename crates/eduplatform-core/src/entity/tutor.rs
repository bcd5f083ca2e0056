use crate::{
    direction::Direction,
    model::{CatalogEntity, EntityModel, FieldText, SearchField, SortRule},
    query::SortKey,
    types::Money,
    validate::{Validate, ValidateContext, check_not_empty, check_rating},
};
use derive_more::{Deref, Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// TutorId
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
pub struct TutorId(u32);

impl TutorId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

///
/// Tutor
///
/// `subject` plays the role of the category for filtering.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tutor {
    pub id: TutorId,
    pub name: String,
    pub subject: String,
    pub bio: String,
    pub rating: f64,
    pub students: u32,
    /// Number of courses taught.
    pub courses: u32,
    pub specialties: Vec<String>,
    pub hourly_rate: Money,
}

impl CatalogEntity for Tutor {
    type Id = TutorId;

    const MODEL: &'static EntityModel<Self> = &TUTOR_MODEL;

    fn id(&self) -> TutorId {
        self.id
    }
}

impl Validate for Tutor {
    fn validate_self(&self, ctx: &mut dyn ValidateContext) {
        check_not_empty(ctx, "name", &self.name);
        check_not_empty(ctx, "subject", &self.subject);
        check_rating(ctx, "rating", self.rating);
    }
}

///
/// MODEL
///

fn subject(tutor: &Tutor) -> &str {
    &tutor.subject
}

fn name(tutor: &Tutor) -> FieldText<'_> {
    FieldText::One(&tutor.name)
}

fn subject_text(tutor: &Tutor) -> FieldText<'_> {
    FieldText::One(&tutor.subject)
}

fn bio(tutor: &Tutor) -> FieldText<'_> {
    FieldText::One(&tutor.bio)
}

fn specialties(tutor: &Tutor) -> FieldText<'_> {
    FieldText::Many(&tutor.specialties)
}

pub static TUTOR_MODEL: EntityModel<Tutor> = EntityModel {
    entity_name: "tutor",
    collection_name: "tutors",
    category: subject,
    level: None,
    search_fields: &[
        SearchField {
            name: "name",
            text: name,
        },
        SearchField {
            name: "subject",
            text: subject_text,
        },
        SearchField {
            name: "bio",
            text: bio,
        },
        SearchField {
            name: "specialties",
            text: specialties,
        },
    ],
    sorts: &[
        SortRule {
            key: SortKey::Rating,
            direction: Direction::Desc,
            compare: |a: &Tutor, b: &Tutor| a.rating.total_cmp(&b.rating),
        },
        SortRule {
            key: SortKey::Students,
            direction: Direction::Desc,
            compare: |a: &Tutor, b: &Tutor| a.students.cmp(&b.students),
        },
        SortRule {
            key: SortKey::CourseCount,
            direction: Direction::Desc,
            compare: |a: &Tutor, b: &Tutor| a.courses.cmp(&b.courses),
        },
        SortRule {
            key: SortKey::PriceLow,
            direction: Direction::Asc,
            compare: |a: &Tutor, b: &Tutor| a.hourly_rate.cmp(&b.hourly_rate),
        },
        SortRule {
            key: SortKey::PriceHigh,
            direction: Direction::Desc,
            compare: |a: &Tutor, b: &Tutor| a.hourly_rate.cmp(&b.hourly_rate),
        },
    ],
};
