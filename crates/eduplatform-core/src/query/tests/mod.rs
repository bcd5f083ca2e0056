
use crate::{
    direction::Direction,
    entity::{
        ARTICLE_MODEL, Article, COURSE_MODEL, Course, CourseCategory, Level, TUTOR_MODEL, Tutor,
    },
    query::{CatalogQuery, Filter, SortKey, SortOutcome, execute, query},
    test_support::{article, sample_courses, tutor},
    types::Money,
};

fn course_ids(rows: &[&Course]) -> Vec<u32> {
    rows.iter().map(|course| *course.id).collect()
}

fn tutor_ids(rows: &[&Tutor]) -> Vec<u32> {
    rows.iter().map(|tutor| *tutor.id).collect()
}

fn article_ids(rows: &[&Article]) -> Vec<u32> {
    rows.iter().map(|article| *article.id).collect()
}

#[test]
fn category_filter_keeps_matching_courses_in_input_order() {
    let courses = sample_courses();
    let rows = query(&courses, &CatalogQuery::new().category("programming"));

    assert_eq!(course_ids(&rows), [1, 4]);
    assert!(
        rows.iter()
            .all(|course| course.category == CourseCategory::Programming)
    );
}

#[test]
fn search_matches_case_insensitively_across_fields() {
    let courses = sample_courses();

    for term in ["data", "DATA", "Data Sci"] {
        let rows = query(&courses, &CatalogQuery::new().search(term));
        assert_eq!(course_ids(&rows), [4], "term {term:?}");
    }

    // instructor and tags are searchable too
    let rows = query(&courses, &CatalogQuery::new().search("emily"));
    assert_eq!(course_ids(&rows), [6]);
    let rows = query(&courses, &CatalogQuery::new().search("FIGMA"));
    assert_eq!(course_ids(&rows), [2]);
}

#[test]
fn empty_search_term_matches_everything() {
    let courses = sample_courses();
    let rows = query(&courses, &CatalogQuery::new().search(""));

    assert_eq!(course_ids(&rows), [1, 2, 3, 4, 5, 6]);
}

#[test]
fn price_low_sorts_strictly_ascending() {
    let courses = sample_courses();
    let rows = query(&courses, &CatalogQuery::new().sort(SortKey::PriceLow));

    let prices: Vec<Money> = rows.iter().map(|course| course.price).collect();
    assert_eq!(
        prices,
        [69, 79, 99, 129, 149, 199].map(Money::from_dollars)
    );
    assert_eq!(course_ids(&rows), [5, 2, 1, 3, 4, 6]);
}

#[test]
fn price_high_sorts_descending() {
    let courses = sample_courses();
    let rows = query(&courses, &CatalogQuery::new().sort("price-high"));

    assert_eq!(course_ids(&rows), [6, 4, 3, 1, 2, 5]);
}

#[test]
fn rating_ties_keep_input_order() {
    let courses = sample_courses();
    let rows = query(&courses, &CatalogQuery::new().sort(SortKey::Rating));

    // 4.9: 3 before 6, 4.8: 1 before 4
    assert_eq!(course_ids(&rows), [3, 6, 1, 4, 2, 5]);
}

#[test]
fn category_and_search_combine_with_and() {
    let courses = sample_courses();
    let rows = query(
        &courses,
        &CatalogQuery::new().category("science").search("quantum"),
    );
    assert_eq!(course_ids(&rows), [6]);

    let rows = query(
        &courses,
        &CatalogQuery::new().category("business").search("zzz-no-match"),
    );
    assert!(rows.is_empty());
}

#[test]
fn level_filter_matches_exact_level_name() {
    let courses = sample_courses();

    let rows = query(&courses, &CatalogQuery::new().level("intermediate"));
    assert_eq!(course_ids(&rows), [1, 3]);

    let rows = query(
        &courses,
        &CatalogQuery::new().level(Level::Advanced.as_str()).sort(SortKey::Students),
    );
    assert_eq!(course_ids(&rows), [4, 6]);

    // exact match: display casing does not match
    let rows = query(&courses, &CatalogQuery::new().level("Intermediate"));
    assert!(rows.is_empty());
}

#[test]
fn level_filter_is_ignored_for_kinds_without_level() {
    let tutors = vec![tutor(1, "Ada"), tutor(2, "Grace")];
    let rows = query(&tutors, &CatalogQuery::new().level("advanced"));

    assert_eq!(tutor_ids(&rows), [1, 2]);
}

#[test]
fn all_sentinel_is_literal() {
    assert_eq!(Filter::from("all"), Filter::All);
    assert_eq!(Filter::only("all"), Filter::All);
    assert_eq!(Filter::from("All"), Filter::Only("All".to_string()));

    let courses = sample_courses();
    assert!(query(&courses, &CatalogQuery::new().category("All")).is_empty());
}

#[test]
fn unknown_sort_names_keep_input_order() {
    let courses = sample_courses();
    let out = execute(&courses, &CatalogQuery::new().sort("trending"));

    assert_eq!(course_ids(&out.rows), [1, 2, 3, 4, 5, 6]);
    assert_eq!(out.stats.sort, SortOutcome::Original);
}

#[test]
fn unsupported_sort_keys_keep_input_order() {
    let courses = sample_courses();
    let out = execute(
        &courses,
        &CatalogQuery::new().category("business").sort(SortKey::Newest),
    );

    assert_eq!(course_ids(&out.rows), [3, 5]);
    assert_eq!(out.stats.sort, SortOutcome::Unsupported(SortKey::Newest));
}

#[test]
fn stats_report_counts_and_applied_rule() {
    let courses = sample_courses();
    let out = execute(
        &courses,
        &CatalogQuery::new().category("programming").sort(SortKey::Popularity),
    );

    assert_eq!(out.stats.entity, "course");
    assert_eq!(out.stats.rows_scanned, 6);
    assert_eq!(out.stats.rows_after_filter, 2);
    assert_eq!(
        out.stats.sort,
        SortOutcome::Applied {
            key: SortKey::Popularity,
            direction: Direction::Desc,
        }
    );
    assert_eq!(course_ids(&out.rows), [4, 1]);
}

#[test]
fn tutors_sort_by_course_count_and_hourly_rate() {
    let tutors = vec![
        Tutor {
            courses: 8,
            hourly_rate: Money::from_dollars(60),
            ..tutor(1, "Sarah")
        },
        Tutor {
            courses: 15,
            hourly_rate: Money::from_dollars(45),
            ..tutor(2, "Mark")
        },
        Tutor {
            courses: 8,
            hourly_rate: Money::from_dollars(75),
            ..tutor(3, "Emily")
        },
    ];

    let rows = query(&tutors, &CatalogQuery::new().sort(SortKey::CourseCount));
    assert_eq!(tutor_ids(&rows), [2, 1, 3]);

    let rows = query(&tutors, &CatalogQuery::new().sort(SortKey::PriceLow));
    assert_eq!(tutor_ids(&rows), [2, 1, 3]);

    let rows = query(&tutors, &CatalogQuery::new().sort(SortKey::PriceHigh));
    assert_eq!(tutor_ids(&rows), [3, 1, 2]);

    // tutors have no popularity rule
    let out = execute(&tutors, &CatalogQuery::new().sort(SortKey::Popularity));
    assert_eq!(out.stats.sort, SortOutcome::Unsupported(SortKey::Popularity));
}

#[test]
fn tutor_subject_is_the_category() {
    let tutors = vec![
        tutor(1, "Ada"),
        Tutor {
            subject: "Physics".to_string(),
            ..tutor(2, "Emily")
        },
    ];
    let rows = query(&tutors, &CatalogQuery::new().category("Physics"));

    assert_eq!(tutor_ids(&rows), [2]);
}

#[test]
fn tutor_search_covers_bio_and_specialties() {
    let tutors = vec![
        Tutor {
            specialties: vec!["Calculus".to_string(), "Linear Algebra".to_string()],
            ..tutor(1, "Sarah")
        },
        Tutor {
            bio: "Former NASA consultant.".to_string(),
            ..tutor(2, "Ahmed")
        },
        tutor(3, "Mark"),
    ];

    // only reachable through one entry of the specialties list
    let rows = query(&tutors, &CatalogQuery::new().search("linear alg"));
    assert_eq!(tutor_ids(&rows), [1]);

    let rows = query(&tutors, &CatalogQuery::new().search("nasa"));
    assert_eq!(tutor_ids(&rows), [2]);

    // subject is searchable as well as filterable
    let rows = query(&tutors, &CatalogQuery::new().search("MATHEMATICS"));
    assert_eq!(tutor_ids(&rows), [1, 2, 3]);
}

#[test]
fn article_search_covers_excerpt_and_author() {
    let articles = vec![
        Article {
            excerpt: "Proven techniques for remote environments.".to_string(),
            ..article(1, "Study Strategies", "2024-01-12")
        },
        Article {
            author: "Dr. Robert Adams".to_string(),
            ..article(2, "Psychology of Learning", "2024-01-08")
        },
        article(3, "Online Communities", "2023-12-28"),
    ];

    let rows = query(&articles, &CatalogQuery::new().search("REMOTE"));
    assert_eq!(article_ids(&rows), [1]);

    let rows = query(&articles, &CatalogQuery::new().search("robert"));
    assert_eq!(article_ids(&rows), [2]);

    // category is a filter, not a search field
    let rows = query(&articles, &CatalogQuery::new().search("study tips"));
    assert!(rows.is_empty());
}

#[test]
fn sort_tables_list_supported_keys() {
    let keys: Vec<SortKey> = COURSE_MODEL.sort_keys().collect();
    assert_eq!(
        keys,
        [
            SortKey::Popularity,
            SortKey::Rating,
            SortKey::Students,
            SortKey::PriceLow,
            SortKey::PriceHigh,
        ]
    );

    assert!(TUTOR_MODEL.supports_sort(SortKey::CourseCount));
    assert!(!TUTOR_MODEL.supports_sort(SortKey::Popularity));
    assert!(ARTICLE_MODEL.supports_sort(SortKey::Oldest));
    assert!(!ARTICLE_MODEL.supports_sort(SortKey::Original));
}

#[test]
fn articles_sort_by_date_and_views() {
    let articles = vec![
        Article {
            views: 980,
            ..article(1, "Study Strategies", "2024-01-12")
        },
        Article {
            views: 3200,
            ..article(2, "Programming for Beginners", "2024-01-03")
        },
        Article {
            views: 1250,
            ..article(3, "Future of Online Learning", "2024-01-15")
        },
    ];

    let newest = query(&articles, &CatalogQuery::new().sort(SortKey::Newest));
    assert_eq!(article_ids(&newest), [3, 1, 2]);

    let oldest = query(&articles, &CatalogQuery::new().sort(SortKey::Oldest));
    assert_eq!(article_ids(&oldest), [2, 1, 3]);

    let popular = query(&articles, &CatalogQuery::new().sort(SortKey::Popularity));
    assert_eq!(article_ids(&popular), [2, 3, 1]);
}

#[test]
fn query_is_pure() {
    let courses = sample_courses();
    let snapshot = courses.clone();
    let q = CatalogQuery::new().search("e").sort(SortKey::Rating);

    let first = query(&courses, &q);
    let second = query(&courses, &q);

    assert_eq!(first, second);
    assert_eq!(courses, snapshot);
}

#[test]
fn query_descriptor_deserializes_leniently() {
    let q: CatalogQuery = serde_json::from_str(
        r#"{"searchTerm":"data","categoryFilter":"all","sortKey":"bogus"}"#,
    )
    .unwrap();
    assert_eq!(q, CatalogQuery::new().search("data"));

    let q: CatalogQuery = serde_json::from_str("{}").unwrap();
    assert_eq!(q, CatalogQuery::default());

    let q: CatalogQuery =
        serde_json::from_str(r#"{"levelFilter":"beginner","sortKey":"price-low"}"#).unwrap();
    assert_eq!(q.level_filter, Filter::only("beginner"));
    assert_eq!(q.sort_key, SortKey::PriceLow);

    let json = serde_json::to_string(&CatalogQuery::new().sort(SortKey::CourseCount)).unwrap();
    assert_eq!(
        json,
        r#"{"searchTerm":"","categoryFilter":"all","levelFilter":"all","sortKey":"courses"}"#
    );
}
