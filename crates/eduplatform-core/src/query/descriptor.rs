use serde::{Deserialize, Serialize};
use std::fmt;

///
/// SortKey
///
/// Listing sort options. Each entity kind registers the subset it supports;
/// `Original` and any key a kind does not register keep input order.
/// Parsing is lenient: unknown names map to `Original`.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(from = "String", into = "&'static str")]
#[remain::sorted]
pub enum SortKey {
    CourseCount,
    Newest,
    Oldest,
    #[default]
    Original,
    Popularity,
    PriceHigh,
    PriceLow,
    Rating,
    Students,
}

impl SortKey {
    pub const ALL: [Self; 9] = [
        Self::Original,
        Self::Popularity,
        Self::Rating,
        Self::Students,
        Self::CourseCount,
        Self::PriceLow,
        Self::PriceHigh,
        Self::Newest,
        Self::Oldest,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CourseCount => "courses",
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Original => "original",
            Self::Popularity => "popularity",
            Self::PriceHigh => "price-high",
            Self::PriceLow => "price-low",
            Self::Rating => "rating",
            Self::Students => "students",
        }
    }

    /// Resolve a sort name; anything unrecognised means "no reordering".
    #[must_use]
    pub fn parse_lenient(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == name)
            .unwrap_or_default()
    }
}

impl From<&str> for SortKey {
    fn from(name: &str) -> Self {
        Self::parse_lenient(name)
    }
}

impl From<String> for SortKey {
    fn from(name: String) -> Self {
        Self::parse_lenient(&name)
    }
}

impl From<SortKey> for &'static str {
    fn from(key: SortKey) -> Self {
        key.as_str()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// Filter
///
/// Exact-match filter over a categorical field. The literal `"all"`
/// disables the filter.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(from = "String", into = "String")]
pub enum Filter {
    #[default]
    All,
    Only(String),
}

impl Filter {
    pub const ALL: &'static str = "all";

    /// Filter on `value`; passing `"all"` still yields `Filter::All`.
    #[must_use]
    pub fn only(value: impl Into<String>) -> Self {
        Self::from(value.into())
    }

    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => Self::ALL,
            Self::Only(value) => value,
        }
    }
}

impl From<String> for Filter {
    fn from(value: String) -> Self {
        if value == Self::ALL {
            Self::All
        } else {
            Self::Only(value)
        }
    }
}

impl From<&str> for Filter {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Filter> for String {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::All => Filter::ALL.to_string(),
            Filter::Only(value) => value,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// CatalogQuery
///
/// Query descriptor owned by the caller and passed by value (or reference)
/// into the engine on every recompute. Every field has a safe default: an
/// empty search term matches everything, `"all"` filters pass everything,
/// and the default sort keeps input order.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogQuery {
    pub search_term: String,
    pub category_filter: Filter,
    /// Applies only to kinds that carry a level; ignored otherwise.
    pub level_filter: Filter,
    pub sort_key: SortKey,
}

impl CatalogQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    #[must_use]
    pub fn category(mut self, filter: impl Into<Filter>) -> Self {
        self.category_filter = filter.into();
        self
    }

    #[must_use]
    pub fn level(mut self, filter: impl Into<Filter>) -> Self {
        self.level_filter = filter.into();
        self
    }

    #[must_use]
    pub fn sort(mut self, key: impl Into<SortKey>) -> Self {
        self.sort_key = key.into();
        self
    }

    /// Lowercased search needle, or `None` when the term is empty.
    #[must_use]
    pub(crate) fn search_needle(&self) -> Option<String> {
        (!self.search_term.is_empty()).then(|| self.search_term.to_lowercase())
    }
}
