use super::*;
use crate::{entity::Course, types::Money};
use serde_json::json;

fn raw_courses(value: serde_json::Value) -> Vec<RawCourse> {
    serde_json::from_value(value).expect("raw courses")
}

fn course_json(id: u32) -> serde_json::Value {
    json!({
        "id": id,
        "title": "React Development Masterclass",
        "description": "Learn modern React development.",
        "category": "programming",
        "level": "intermediate",
        "duration": "12 weeks",
        "price": "$99",
        "rating": 4.8,
        "students": 2500,
        "instructor": "John Doe"
    })
}

fn ingest_courses(value: serde_json::Value) -> (Vec<Course>, Validator) {
    let mut v = Validator::new();
    let courses = ingest_collection(&mut v, raw_courses(value));
    (courses, v)
}

#[test]
fn clean_record_ingests_with_typed_fields() {
    let (courses, v) = ingest_courses(json!([course_json(1)]));

    assert!(v.is_clean(), "{:?}", v.issues());
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].price, Money::from_dollars(99));
    assert_eq!(*courses[0].duration, 12);
    assert_eq!(courses[0].popularity, 0);
    assert!(courses[0].tags.is_empty());
}

#[test]
fn numeric_and_text_prices_agree() {
    let mut numeric = course_json(1);
    numeric["price"] = json!(89.99);
    let mut text = course_json(2);
    text["price"] = json!("$89.99");

    let (courses, v) = ingest_courses(json!([numeric, text]));

    assert!(v.is_clean());
    assert_eq!(courses[0].price, courses[1].price);
    assert_eq!(courses[0].price.cents(), 8999);
}

#[test]
fn every_bad_field_is_reported_on_its_path() {
    let mut bad = course_json(1);
    bad["category"] = json!("Programming");
    bad["price"] = json!("€99");
    bad["students"] = json!(-5);

    let (courses, v) = ingest_courses(json!([course_json(0), bad]));

    assert_eq!(courses.len(), 1);
    let issues = v.issues();
    assert!(issues.contains_key("courses[1].category"));
    assert!(issues.contains_key("courses[1].price"));
    assert!(issues.contains_key("courses[1].students"));
    assert_eq!(issues.len(), 3);
}

#[test]
fn record_checks_run_after_conversion() {
    let mut bad = course_json(1);
    bad["rating"] = json!(7.5);
    bad["popularity"] = json!(140);

    let (_, v) = ingest_courses(json!([bad]));

    let issues = v.issues();
    assert_eq!(
        issues["courses[0].rating"],
        vec!["rating 7.5 is outside [0, 5]".to_string()]
    );
    assert!(issues.contains_key("courses[0].popularity"));
}

#[test]
fn oversized_count_is_reported() {
    let mut bad = course_json(1);
    bad["popularity"] = json!(1000);

    let (courses, v) = ingest_courses(json!([bad]));

    assert!(courses.is_empty());
    assert_eq!(
        v.issues()["courses[0].popularity"],
        vec!["count 1000 is too large".to_string()]
    );
}

#[test]
fn duplicate_ids_are_reported_against_the_later_record() {
    let (_, v) = ingest_courses(json!([course_json(7), course_json(8), course_json(7)]));

    assert_eq!(
        v.issues()["courses[2].id"],
        vec!["duplicate id 7 (first used at [0])".to_string()]
    );
}

#[test]
fn article_fields_parse_from_display_text() {
    let raws: Vec<RawArticle> = serde_json::from_value(json!([{
        "id": 1,
        "title": "Study Habits",
        "excerpt": "How to study.",
        "author": "Dr. Lisa Park",
        "date": "2024-01-15",
        "category": "Study Tips",
        "views": 1250,
        "readTime": "5 min read"
    }, {
        "id": 2,
        "title": "Bad Date",
        "excerpt": "x",
        "author": "y",
        "date": "15/01/2024",
        "category": "Study Tips",
        "views": 1,
        "readTime": "soon"
    }]))
    .expect("raw articles");

    let mut v = Validator::new();
    let articles = ingest_collection(&mut v, raws);

    assert_eq!(articles.len(), 1);
    assert_eq!(*articles[0].read_time, 5);
    assert_eq!(articles[0].date.to_string(), "2024-01-15");
    assert!(v.issues().contains_key("articles[1].date"));
    assert!(v.issues().contains_key("articles[1].readTime"));
}

#[test]
fn tutor_hourly_rate_is_required_money() {
    let raws: Vec<RawTutor> = serde_json::from_value(json!([{
        "id": 1,
        "name": "Dr. John Smith",
        "subject": "Computer Science",
        "bio": "Expert in algorithms.",
        "rating": 4.9,
        "students": 2500,
        "courses": 12,
        "specialties": ["Algorithms"],
        "hourlyRate": "$1,200"
    }]))
    .expect("raw tutors");

    let mut v = Validator::new();
    let tutors = ingest_collection(&mut v, raws);

    assert!(tutors.is_empty());
    assert!(v.issues().contains_key("tutors[0].hourlyRate"));
}
