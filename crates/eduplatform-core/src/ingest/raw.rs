use crate::{
    entity::{Article, ArticleId, Course, CourseId, Tutor, TutorId},
    ingest::{RawRecord, count, field},
    model::CatalogEntity,
    types::{Money, ParseAmountError},
    validate::Validator,
};
use serde::Deserialize;

///
/// RawAmount
/// Price as found in fixtures: `"$99"` or a bare number `89.99`.
///

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

impl RawAmount {
    pub fn to_money(&self) -> Result<Money, ParseAmountError> {
        match self {
            Self::Number(value) => Money::from_decimal(*value),
            Self::Text(text) => text.parse(),
        }
    }
}

///
/// RawCourse
///

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCourse {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub level: String,
    pub duration: String,
    pub price: RawAmount,
    #[serde(default)]
    pub original_price: Option<RawAmount>,
    pub rating: f64,
    #[serde(default)]
    pub reviews: i64,
    pub students: i64,
    #[serde(default)]
    pub popularity: i64,
    pub instructor: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl RawRecord for RawCourse {
    type Id = CourseId;
    type Output = Course;

    fn collection_name() -> &'static str {
        Course::MODEL.collection_name
    }

    fn raw_id(&self) -> CourseId {
        self.id
    }

    fn ingest(self, v: &mut Validator) -> Option<Course> {
        // convert every field before bailing so all issues are reported
        let category = field(v, "category", self.category.parse());
        let level = field(v, "level", self.level.parse());
        let duration = field(v, "duration", self.duration.parse());
        let price = field(v, "price", self.price.to_money());
        let original_price = match &self.original_price {
            Some(raw) => field(v, "originalPrice", raw.to_money()).map(Some),
            None => Some(None),
        };
        let reviews = count(v, "reviews", self.reviews);
        let students = count(v, "students", self.students);
        let popularity = count(v, "popularity", self.popularity);

        Some(Course {
            id: self.id,
            title: self.title,
            description: self.description,
            category: category?,
            level: level?,
            duration: duration?,
            price: price?,
            original_price: original_price?,
            rating: self.rating,
            reviews: reviews?,
            students: students?,
            popularity: popularity?,
            instructor: self.instructor,
            tags: self.tags,
        })
    }
}

///
/// RawTutor
///

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTutor {
    pub id: TutorId,
    pub name: String,
    pub subject: String,
    pub bio: String,
    pub rating: f64,
    pub students: i64,
    pub courses: i64,
    #[serde(default)]
    pub specialties: Vec<String>,
    pub hourly_rate: RawAmount,
}

impl RawRecord for RawTutor {
    type Id = TutorId;
    type Output = Tutor;

    fn collection_name() -> &'static str {
        Tutor::MODEL.collection_name
    }

    fn raw_id(&self) -> TutorId {
        self.id
    }

    fn ingest(self, v: &mut Validator) -> Option<Tutor> {
        let students = count(v, "students", self.students);
        let courses = count(v, "courses", self.courses);
        let hourly_rate = field(v, "hourlyRate", self.hourly_rate.to_money());

        Some(Tutor {
            id: self.id,
            name: self.name,
            subject: self.subject,
            bio: self.bio,
            rating: self.rating,
            students: students?,
            courses: courses?,
            specialties: self.specialties,
            hourly_rate: hourly_rate?,
        })
    }
}

///
/// RawArticle
///

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    pub id: ArticleId,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub date: String,
    pub category: String,
    pub views: i64,
    pub read_time: String,
}

impl RawRecord for RawArticle {
    type Id = ArticleId;
    type Output = Article;

    fn collection_name() -> &'static str {
        Article::MODEL.collection_name
    }

    fn raw_id(&self) -> ArticleId {
        self.id
    }

    fn ingest(self, v: &mut Validator) -> Option<Article> {
        let date = field(v, "date", self.date.parse());
        let views = count(v, "views", self.views);
        let read_time = field(v, "readTime", self.read_time.parse());

        Some(Article {
            id: self.id,
            title: self.title,
            excerpt: self.excerpt,
            author: self.author,
            date: date?,
            category: self.category,
            views: views?,
            read_time: read_time?,
        })
    }
}
