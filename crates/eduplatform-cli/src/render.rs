use crate::error::CliError;
use eduplatform_core::{
    dashboard::{DashboardSummary, RecommendedCourse},
    entity::{Article, Course, Tutor},
};
use serde::Serialize;
use std::fmt::Write;

pub const NO_RESULTS: &str = "no results";

///
/// Line
/// One-line plain rendering of a listed record.
///

pub trait Line {
    fn line(&self) -> String;
}

impl Line for Course {
    fn line(&self) -> String {
        format!(
            "{:>3}  {}  [{} / {}]  {}  {}  rating {}  {} students  by {}",
            self.id,
            self.title,
            self.category,
            self.level,
            self.price,
            self.duration,
            self.rating,
            self.students,
            self.instructor
        )
    }
}

impl Line for Tutor {
    fn line(&self) -> String {
        format!(
            "{:>3}  {}  [{}]  rating {}  {} students  {} courses  {}/hour",
            self.id,
            self.name,
            self.subject,
            self.rating,
            self.students,
            self.courses,
            self.hourly_rate
        )
    }
}

impl Line for Article {
    fn line(&self) -> String {
        format!(
            "{:>3}  {}  [{}]  {}  {}  {} views  by {}",
            self.id,
            self.title,
            self.category,
            self.date,
            self.read_time,
            self.views,
            self.author
        )
    }
}

impl Line for RecommendedCourse {
    fn line(&self) -> String {
        format!(
            "{:>3}  {}  [{}]  {}  rating {}  {} students  by {}",
            self.id,
            self.title,
            self.category,
            self.price,
            self.rating,
            self.students,
            self.instructor
        )
    }
}

/// Render a listing; empty listings still produce output.
pub fn listing<T: Line + Serialize>(rows: &[&T], json: bool) -> Result<String, CliError> {
    if json {
        return Ok(serde_json::to_string_pretty(rows)?);
    }
    if rows.is_empty() {
        return Ok(NO_RESULTS.to_string());
    }

    Ok(rows.iter().map(|row| row.line()).collect::<Vec<_>>().join("\n"))
}

pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn course_detail(course: &Course) -> String {
    let mut out = format!(
        "{}\n{}\n\ncategory:   {}\nlevel:      {}\nduration:   {}\nprice:      {}",
        course.title,
        course.description,
        course.category,
        course.level,
        course.duration,
        course.price
    );
    if let Some(discount) = course.discount() {
        let _ = write!(out, " (save {discount})");
    }
    let _ = write!(
        out,
        "\nrating:     {} ({} reviews)\nstudents:   {}\ninstructor: {}",
        course.rating, course.reviews, course.students, course.instructor
    );
    if !course.tags.is_empty() {
        let _ = write!(out, "\ntags:       {}", course.tags.join(", "));
    }

    out
}

pub fn tutor_detail(tutor: &Tutor) -> String {
    let mut out = format!(
        concat!(
            "{}\n{}\n\nsubject:    {}\nrating:     {}\nstudents:   {}\n",
            "courses:    {}\nrate:       {}/hour",
        ),
        tutor.name,
        tutor.bio,
        tutor.subject,
        tutor.rating,
        tutor.students,
        tutor.courses,
        tutor.hourly_rate
    );
    if !tutor.specialties.is_empty() {
        let _ = write!(out, "\nspecialties: {}", tutor.specialties.join(", "));
    }

    out
}

pub fn article_detail(article: &Article) -> String {
    format!(
        "{}\n{}\n\nauthor:     {}\ndate:       {}\ncategory:   {}\nviews:      {}\nread time:  {}",
        article.title,
        article.excerpt,
        article.author,
        article.date,
        article.category,
        article.views,
        article.read_time
    )
}

pub fn summary(summary: &DashboardSummary<'_>) -> String {
    let mut out = format!(
        concat!(
            "learner:           {}\nenrolled courses:  {}\n",
            "average progress:  {:.1}%\ngoals completed:   {}",
        ),
        summary.learner,
        summary.enrolled,
        summary.average_progress,
        summary.goals_completed
    );
    if let Some(course) = summary.closest_to_completion {
        let _ = write!(
            out,
            "\nclosest to finish: {} ({}%, next: {})",
            course.title, course.progress, course.next_lesson
        );
    }

    out
}
