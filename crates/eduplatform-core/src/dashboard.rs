//! Learner dashboard.
//!
//! Mock progress data for one learner: profile stats, current enrolments,
//! learning goals, and a recommended-courses list that is queried through
//! the same engine as the catalog.
use crate::{
    Error, MAX_PERCENT,
    direction::Direction,
    entity::Level,
    ingest::{RawAmount, RawRecord, count, field, ingest_collection},
    model::{CatalogEntity, EntityModel, FieldText, SearchField, SortRule},
    query::{CatalogQuery, SortKey, query},
    types::{IsoDate, Money},
    validate::{
        Validate, ValidateContext, Validator, check_not_empty, check_percent, check_rating,
    },
};
use derive_more::{Deref, Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// LearnerStats
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerStats {
    pub enrolled_courses: u32,
    pub hours_learned: u32,
    pub certificates: u32,
    /// Consecutive days with activity.
    pub current_streak: u32,
}

///
/// Learner
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Learner {
    pub name: String,
    pub stats: LearnerStats,
}

///
/// Enrolment
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrolment {
    pub id: u32,
    pub title: String,
    pub instructor: String,
    /// Percentage, 0-100.
    pub progress: u8,
    pub next_lesson: String,
    pub category: String,
    pub level: Level,
}

impl Enrolment {
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.progress >= MAX_PERCENT
    }
}

impl Validate for Enrolment {
    fn validate_self(&self, ctx: &mut dyn ValidateContext) {
        check_not_empty(ctx, "title", &self.title);
        check_percent(ctx, "progress", self.progress);
    }
}

///
/// LearningGoal
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningGoal {
    pub id: u32,
    pub title: String,
    pub target_date: IsoDate,
    pub progress: u8,
    /// Titles of the courses that count toward this goal.
    pub courses: Vec<String>,
}

impl LearningGoal {
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.progress >= MAX_PERCENT
    }
}

impl Validate for LearningGoal {
    fn validate_self(&self, ctx: &mut dyn ValidateContext) {
        check_not_empty(ctx, "title", &self.title);
        check_percent(ctx, "progress", self.progress);
    }
}

///
/// RecommendedId
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
pub struct RecommendedId(u32);

impl RecommendedId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

///
/// RecommendedCourse
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedCourse {
    pub id: RecommendedId,
    pub title: String,
    pub instructor: String,
    pub rating: f64,
    pub students: u32,
    pub price: Money,
    pub category: String,
}

impl CatalogEntity for RecommendedCourse {
    type Id = RecommendedId;

    const MODEL: &'static EntityModel<Self> = &RECOMMENDED_MODEL;

    fn id(&self) -> RecommendedId {
        self.id
    }
}

impl Validate for RecommendedCourse {
    fn validate_self(&self, ctx: &mut dyn ValidateContext) {
        check_not_empty(ctx, "title", &self.title);
        check_rating(ctx, "rating", self.rating);
    }
}

fn category(course: &RecommendedCourse) -> &str {
    &course.category
}

fn title(course: &RecommendedCourse) -> FieldText<'_> {
    FieldText::One(&course.title)
}

fn instructor(course: &RecommendedCourse) -> FieldText<'_> {
    FieldText::One(&course.instructor)
}

pub static RECOMMENDED_MODEL: EntityModel<RecommendedCourse> = EntityModel {
    entity_name: "recommended_course",
    collection_name: "recommendedCourses",
    category,
    level: None,
    search_fields: &[
        SearchField {
            name: "title",
            text: title,
        },
        SearchField {
            name: "instructor",
            text: instructor,
        },
    ],
    sorts: &[
        SortRule {
            key: SortKey::Rating,
            direction: Direction::Desc,
            compare: |a: &RecommendedCourse, b: &RecommendedCourse| a.rating.total_cmp(&b.rating),
        },
        SortRule {
            key: SortKey::Students,
            direction: Direction::Desc,
            compare: |a: &RecommendedCourse, b: &RecommendedCourse| a.students.cmp(&b.students),
        },
        SortRule {
            key: SortKey::PriceLow,
            direction: Direction::Asc,
            compare: |a: &RecommendedCourse, b: &RecommendedCourse| a.price.cmp(&b.price),
        },
        SortRule {
            key: SortKey::PriceHigh,
            direction: Direction::Desc,
            compare: |a: &RecommendedCourse, b: &RecommendedCourse| a.price.cmp(&b.price),
        },
    ],
};

// ============================================================================
// Raw records
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDashboard {
    learner: Learner,
    #[serde(default)]
    enrolled_courses: Vec<RawEnrolment>,
    #[serde(default)]
    learning_goals: Vec<RawGoal>,
    #[serde(default)]
    recommended_courses: Vec<RawRecommended>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEnrolment {
    id: u32,
    title: String,
    instructor: String,
    progress: i64,
    next_lesson: String,
    category: String,
    level: String,
}

impl RawRecord for RawEnrolment {
    type Id = u32;
    type Output = Enrolment;

    fn collection_name() -> &'static str {
        "enrolledCourses"
    }

    fn raw_id(&self) -> u32 {
        self.id
    }

    fn ingest(self, v: &mut Validator) -> Option<Enrolment> {
        let progress = count(v, "progress", self.progress);
        let level = field(v, "level", self.level.parse());

        Some(Enrolment {
            id: self.id,
            title: self.title,
            instructor: self.instructor,
            progress: progress?,
            next_lesson: self.next_lesson,
            category: self.category,
            level: level?,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGoal {
    id: u32,
    title: String,
    target_date: String,
    progress: i64,
    #[serde(default)]
    courses: Vec<String>,
}

impl RawRecord for RawGoal {
    type Id = u32;
    type Output = LearningGoal;

    fn collection_name() -> &'static str {
        "learningGoals"
    }

    fn raw_id(&self) -> u32 {
        self.id
    }

    fn ingest(self, v: &mut Validator) -> Option<LearningGoal> {
        let target_date = field(v, "targetDate", self.target_date.parse());
        let progress = count(v, "progress", self.progress);

        Some(LearningGoal {
            id: self.id,
            title: self.title,
            target_date: target_date?,
            progress: progress?,
            courses: self.courses,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecommended {
    id: RecommendedId,
    title: String,
    instructor: String,
    rating: f64,
    students: i64,
    price: RawAmount,
    category: String,
}

impl RawRecord for RawRecommended {
    type Id = RecommendedId;
    type Output = RecommendedCourse;

    fn collection_name() -> &'static str {
        RecommendedCourse::MODEL.collection_name
    }

    fn raw_id(&self) -> RecommendedId {
        self.id
    }

    fn ingest(self, v: &mut Validator) -> Option<RecommendedCourse> {
        let students = count(v, "students", self.students);
        let price = field(v, "price", self.price.to_money());

        Some(RecommendedCourse {
            id: self.id,
            title: self.title,
            instructor: self.instructor,
            rating: self.rating,
            students: students?,
            price: price?,
            category: self.category,
        })
    }
}

// ============================================================================
// Dashboard
// ============================================================================

///
/// DashboardSummary
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary<'a> {
    pub learner: &'a str,
    pub enrolled: usize,
    /// Mean enrolment progress; 0 with no enrolments.
    pub average_progress: f64,
    pub goals_completed: usize,
    /// Incomplete enrolment with the highest progress; earliest wins ties.
    pub closest_to_completion: Option<&'a Enrolment>,
}

///
/// Dashboard
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub learner: Learner,
    pub enrolled_courses: Vec<Enrolment>,
    pub learning_goals: Vec<LearningGoal>,
    pub recommended_courses: Vec<RecommendedCourse>,
}

impl Dashboard {
    const SOURCE_NAME: &'static str = "dashboard";

    /// Decode and validate a dashboard document.
    pub fn from_json(text: &str) -> Result<Self, Error> {
        let raw: RawDashboard =
            serde_json::from_str(text).map_err(|err| Error::decode(Self::SOURCE_NAME, err))?;

        let mut v = Validator::new();
        v.scoped("learner", |v| check_not_empty(v, "name", &raw.learner.name));
        let enrolled_courses = ingest_collection(&mut v, raw.enrolled_courses);
        let learning_goals = ingest_collection(&mut v, raw.learning_goals);
        let recommended_courses = ingest_collection(&mut v, raw.recommended_courses);

        if let Err(err) = v.finish() {
            tracing::warn!(error = %err, "dashboard load rejected");
            return Err(err.into());
        }
        tracing::info!(
            enrolled = enrolled_courses.len(),
            goals = learning_goals.len(),
            recommended = recommended_courses.len(),
            "dashboard loaded"
        );

        Ok(Self {
            learner: raw.learner,
            enrolled_courses,
            learning_goals,
            recommended_courses,
        })
    }

    #[must_use]
    pub fn summary(&self) -> DashboardSummary<'_> {
        let enrolled = self.enrolled_courses.len();
        let total: u32 = self
            .enrolled_courses
            .iter()
            .map(|course| u32::from(course.progress))
            .sum();
        let average_progress = if enrolled == 0 {
            0.0
        } else {
            f64::from(total) / f64::from(u32::try_from(enrolled).unwrap_or(u32::MAX))
        };

        // max_by_key keeps the last maximum; reverse so the earliest wins
        let closest_to_completion = self
            .enrolled_courses
            .iter()
            .rev()
            .filter(|course| !course.is_complete())
            .max_by_key(|course| course.progress);

        DashboardSummary {
            learner: &self.learner.name,
            enrolled,
            average_progress,
            goals_completed: self
                .learning_goals
                .iter()
                .filter(|goal| goal.is_complete())
                .count(),
            closest_to_completion,
        }
    }

    #[must_use]
    pub fn recommended(&self, q: &CatalogQuery) -> Vec<&RecommendedCourse> {
        query(&self.recommended_courses, q)
    }
}

///
/// TESTS
///
