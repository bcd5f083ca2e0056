use super::*;

struct Probe {
    name: &'static str,
    rating: f64,
    progress: u8,
}

impl Validate for Probe {
    fn validate_self(&self, ctx: &mut dyn ValidateContext) {
        check_not_empty(ctx, "name", self.name);
        check_rating(ctx, "rating", self.rating);
        check_percent(ctx, "progress", self.progress);
    }
}

#[test]
fn clean_records_finish_ok() {
    let mut v = Validator::new();
    v.scoped("probes", |v| {
        v.scoped(0, |v| {
            v.visit(&Probe {
                name: "ok",
                rating: 5.0,
                progress: 100,
            });
        });
    });

    assert!(v.is_clean());
    assert!(v.finish().is_ok());
}

#[test]
fn issues_are_keyed_by_rendered_path() {
    let mut v = Validator::new();
    v.scoped("probes", |v| {
        v.scoped(3, |v| {
            v.visit(&Probe {
                name: "  ",
                rating: 5.5,
                progress: 101,
            });
        });
    });

    let keys: Vec<&str> = v.issues().keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        ["probes[3].name", "probes[3].progress", "probes[3].rating"]
    );

    let Err(ValidateError::ValidationFailed(issues)) = v.finish() else {
        panic!("expected a rejected load");
    };
    assert_eq!(issues["probes[3].rating"], ["rating 5.5 is outside [0, 5]"]);
}

#[test]
fn negative_and_nan_ratings_are_rejected() {
    let mut v = Validator::new();
    check_rating(&mut v, "low", -0.1);
    check_rating(&mut v, "nan", f64::NAN);
    check_rating(&mut v, "edge", 0.0);

    assert!(v.issues().contains_key("low"));
    assert!(v.issues().contains_key("nan"));
    assert!(!v.issues().contains_key("edge"));
}

#[test]
fn duplicate_keys_are_reported_on_the_later_record() {
    let ids = [1_u32, 2, 1, 3, 2];
    let mut v = Validator::new();
    v.scoped("courses", |v| check_unique(v, "id", &ids, |id| *id));

    let issues = v.issues();
    assert_eq!(issues.len(), 2);
    assert_eq!(issues["courses[2].id"], ["duplicate id 1 (first used at [0])"]);
    assert_eq!(issues["courses[4].id"], ["duplicate id 2 (first used at [1])"]);
}

#[test]
fn error_message_counts_every_issue() {
    let mut v = Validator::new();
    v.add_issue("first".to_string());
    v.add_issue("second".to_string());
    v.add_issue_at("field".into(), "third".to_string());

    let err = v.finish().unwrap_err();
    assert_eq!(err.to_string(), "validation failed with 3 issue(s)");
}
