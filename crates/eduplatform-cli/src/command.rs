use crate::{
    cli::{Cli, Command, ListingArgs, RecordKind},
    error::CliError,
    render,
};
use eduplatform_config::Config;
use eduplatform_core::{
    catalog::Catalog,
    dashboard::{Dashboard, DashboardSummary, LearnerStats, RecommendedCourse},
    entity::{Article, ArticleId, Course, CourseId, Tutor, TutorId},
    model::{CatalogEntity, EntityModel},
    query::{CatalogQuery, Filter, SortKey},
    session::CatalogSession,
};
use eduplatform_fixtures::{DataDir, seed_catalog, seed_dashboard};
use serde::Serialize;
use std::path::PathBuf;

///
/// Source
/// Where catalog data comes from: a data directory or the bundled seed.
///

pub enum Source {
    Dir(DataDir),
    Seed,
}

impl Source {
    /// `--data-dir` wins over `[catalog] data_dir`.
    pub fn resolve(flag: Option<PathBuf>, config: &Config) -> Result<Self, CliError> {
        match flag.or_else(|| config.catalog.data_dir.clone()) {
            Some(dir) => Ok(Self::Dir(DataDir::read(&dir)?)),
            None => Ok(Self::Seed),
        }
    }

    fn catalog(&self) -> Result<Catalog, CliError> {
        match self {
            Self::Dir(data) => Ok(data.catalog()?),
            Self::Seed => Ok(seed_catalog()?),
        }
    }

    fn dashboard(&self) -> Result<Dashboard, CliError> {
        match self {
            Self::Dir(data) => Ok(data.dashboard()?),
            Self::Seed => Ok(seed_dashboard()?),
        }
    }
}

/// Run one command, returning the text to print on success.
pub fn run(cli: Cli, config: &Config) -> Result<String, CliError> {
    let source = Source::resolve(cli.data_dir, config)?;
    let debug = cli.debug || config.query.debug;
    let json = cli.json;

    match cli.command {
        Command::Courses {
            listing,
            category,
            level,
        } => {
            let catalog = source.catalog()?;
            let q = listing_query::<Course>(&listing, category, level, config.query.course_sort);

            render::listing(&session(&catalog, debug).courses(&q), json)
        }
        Command::Tutors { listing, subject } => {
            let catalog = source.catalog()?;
            let q = listing_query::<Tutor>(&listing, subject, None, config.query.tutor_sort);

            render::listing(&session(&catalog, debug).tutors(&q), json)
        }
        Command::Articles { listing, category } => {
            let catalog = source.catalog()?;
            let q = listing_query::<Article>(&listing, category, None, config.query.article_sort);

            render::listing(&session(&catalog, debug).articles(&q), json)
        }
        Command::Show { kind, id } => show(&source.catalog()?, kind, id, json),
        Command::Validate => validate(&source, json),
        Command::Dashboard { listing, category } => {
            let dashboard = source.dashboard()?;
            let q = listing_query::<RecommendedCourse>(&listing, category, None, SortKey::Original);

            dashboard_view(&dashboard, &q, json)
        }
    }
}

fn session(catalog: &Catalog, debug: bool) -> CatalogSession<'_> {
    let session = CatalogSession::new(catalog);
    if debug { session.debug() } else { session }
}

fn listing_query<E: CatalogEntity>(
    listing: &ListingArgs,
    category: Option<String>,
    level: Option<String>,
    default_sort: SortKey,
) -> CatalogQuery {
    let sort_key = listing
        .sort
        .as_deref()
        .map_or(default_sort, SortKey::parse_lenient);

    if let Some(note) = unsupported_sort(E::MODEL, sort_key) {
        tracing::warn!(entity = E::MODEL.entity_name, "{note}");
    }

    CatalogQuery {
        search_term: listing.search.clone().unwrap_or_default(),
        category_filter: category.map_or(Filter::All, Filter::from),
        level_filter: level.map_or(Filter::All, Filter::from),
        sort_key,
    }
}

// Note for a sort key this listing ignores, naming the keys it does support.
fn unsupported_sort<E: 'static>(model: &EntityModel<E>, key: SortKey) -> Option<String> {
    if key == SortKey::Original || model.supports_sort(key) {
        return None;
    }

    let supported: Vec<&str> = model.sort_keys().map(SortKey::as_str).collect();

    Some(format!(
        "sort '{key}' does not apply to {}; keeping source order (supported: {})",
        model.collection_name,
        supported.join(", ")
    ))
}

fn show(catalog: &Catalog, kind: RecordKind, id: u32, json: bool) -> Result<String, CliError> {
    let not_found = |kind| CliError::NotFound { kind, id };

    match kind {
        RecordKind::Course => {
            let course = catalog
                .courses()
                .get(CourseId::new(id))
                .ok_or_else(|| not_found("course"))?;

            if json {
                render::json(course)
            } else {
                Ok(render::course_detail(course))
            }
        }
        RecordKind::Tutor => {
            let tutor = catalog
                .tutors()
                .get(TutorId::new(id))
                .ok_or_else(|| not_found("tutor"))?;

            if json {
                render::json(tutor)
            } else {
                Ok(render::tutor_detail(tutor))
            }
        }
        RecordKind::Article => {
            let article = catalog
                .articles()
                .get(ArticleId::new(id))
                .ok_or_else(|| not_found("article"))?;

            if json {
                render::json(article)
            } else {
                Ok(render::article_detail(article))
            }
        }
    }
}

#[derive(Serialize)]
struct ValidateReport {
    courses: usize,
    tutors: usize,
    articles: usize,
    enrolled_courses: usize,
    learning_goals: usize,
    recommended_courses: usize,
}

// Rejections propagate as errors; main prints their issues.
fn validate(source: &Source, json: bool) -> Result<String, CliError> {
    let catalog = source.catalog()?;
    let dashboard = source.dashboard()?;

    let report = ValidateReport {
        courses: catalog.courses().len(),
        tutors: catalog.tutors().len(),
        articles: catalog.articles().len(),
        enrolled_courses: dashboard.enrolled_courses.len(),
        learning_goals: dashboard.learning_goals.len(),
        recommended_courses: dashboard.recommended_courses.len(),
    };
    if json {
        return render::json(&report);
    }

    Ok(format!(
        "ok: {} courses, {} tutors, {} articles, {} enrolments, {} goals, {} recommendations",
        report.courses,
        report.tutors,
        report.articles,
        report.enrolled_courses,
        report.learning_goals,
        report.recommended_courses
    ))
}

fn dashboard_view(dashboard: &Dashboard, q: &CatalogQuery, json: bool) -> Result<String, CliError> {
    let summary = dashboard.summary();
    let recommended = dashboard.recommended(q);

    if json {
        #[derive(Serialize)]
        struct View<'a> {
            stats: &'a LearnerStats,
            summary: DashboardSummary<'a>,
            recommended: Vec<&'a RecommendedCourse>,
        }

        return render::json(&View {
            stats: &dashboard.learner.stats,
            summary,
            recommended,
        });
    }

    Ok(format!(
        "{}\n\nrecommended:\n{}",
        render::summary(&summary),
        render::listing(&recommended, false)?
    ))
}

///
/// TESTS
///
