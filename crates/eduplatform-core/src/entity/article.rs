use crate::{
    direction::Direction,
    model::{CatalogEntity, EntityModel, FieldText, SearchField, SortRule},
    query::SortKey,
    types::{IsoDate, Minutes},
    validate::{Validate, ValidateContext, check_not_empty},
};
use derive_more::{Deref, Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// ArticleId
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
pub struct ArticleId(u32);

impl ArticleId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

///
/// Article
/// Blog post summary as listed on the blog index.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub date: IsoDate,
    pub category: String,
    pub views: u32,
    pub read_time: Minutes,
}

impl CatalogEntity for Article {
    type Id = ArticleId;

    const MODEL: &'static EntityModel<Self> = &ARTICLE_MODEL;

    fn id(&self) -> ArticleId {
        self.id
    }
}

impl Validate for Article {
    fn validate_self(&self, ctx: &mut dyn ValidateContext) {
        check_not_empty(ctx, "title", &self.title);
        check_not_empty(ctx, "author", &self.author);
        check_not_empty(ctx, "category", &self.category);
    }
}

///
/// MODEL
///

fn category(article: &Article) -> &str {
    &article.category
}

fn title(article: &Article) -> FieldText<'_> {
    FieldText::One(&article.title)
}

fn excerpt(article: &Article) -> FieldText<'_> {
    FieldText::One(&article.excerpt)
}

fn author(article: &Article) -> FieldText<'_> {
    FieldText::One(&article.author)
}

pub static ARTICLE_MODEL: EntityModel<Article> = EntityModel {
    entity_name: "article",
    collection_name: "articles",
    category,
    level: None,
    search_fields: &[
        SearchField {
            name: "title",
            text: title,
        },
        SearchField {
            name: "excerpt",
            text: excerpt,
        },
        SearchField {
            name: "author",
            text: author,
        },
    ],
    sorts: &[
        SortRule {
            key: SortKey::Popularity,
            direction: Direction::Desc,
            compare: |a: &Article, b: &Article| a.views.cmp(&b.views),
        },
        SortRule {
            key: SortKey::Newest,
            direction: Direction::Desc,
            compare: |a: &Article, b: &Article| a.date.cmp(&b.date),
        },
        SortRule {
            key: SortKey::Oldest,
            direction: Direction::Asc,
            compare: |a: &Article, b: &Article| a.date.cmp(&b.date),
        },
    ],
};
