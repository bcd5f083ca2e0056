use crate::{
    entity::{Article, ArticleId, Course, CourseCategory, CourseId, Level, Tutor, TutorId},
    types::{Minutes, Money, Weeks},
};

///
/// Baseline records for tests; override fields with struct update syntax.
///

pub(crate) fn course(id: u32, title: &str) -> Course {
    Course {
        id: CourseId::new(id),
        title: title.to_string(),
        description: format!("About {title}."),
        category: CourseCategory::Programming,
        level: Level::Beginner,
        duration: Weeks::new(8),
        price: Money::from_dollars(99),
        original_price: None,
        rating: 4.5,
        reviews: 10,
        students: 100,
        popularity: 50,
        instructor: "Staff".to_string(),
        tags: Vec::new(),
    }
}

pub(crate) fn tutor(id: u32, name: &str) -> Tutor {
    Tutor {
        id: TutorId::new(id),
        name: name.to_string(),
        subject: "Mathematics".to_string(),
        bio: format!("{name} teaches."),
        rating: 4.5,
        students: 100,
        courses: 1,
        specialties: Vec::new(),
        hourly_rate: Money::from_dollars(40),
    }
}

pub(crate) fn article(id: u32, title: &str, date: &str) -> Article {
    Article {
        id: ArticleId::new(id),
        title: title.to_string(),
        excerpt: format!("Excerpt for {title}."),
        author: "Staff Writer".to_string(),
        date: date.parse().expect("test date"),
        category: "Study Tips".to_string(),
        views: 100,
        read_time: Minutes::new(5),
    }
}

/// The six-course listing used by the course page.
pub(crate) fn sample_courses() -> Vec<Course> {
    vec![
        Course {
            description: "Learn modern React development with hooks, context, and best practices."
                .to_string(),
            level: Level::Intermediate,
            duration: Weeks::new(12),
            rating: 4.8,
            students: 2500,
            popularity: 92,
            instructor: "John Doe".to_string(),
            tags: vec!["react".to_string(), "javascript".to_string()],
            ..course(1, "React Development Masterclass")
        },
        Course {
            description: "Master the principles of user interface and user experience design."
                .to_string(),
            category: CourseCategory::Design,
            price: Money::from_dollars(79),
            rating: 4.7,
            students: 1800,
            popularity: 81,
            instructor: "Jane Smith".to_string(),
            tags: vec!["ux".to_string(), "figma".to_string()],
            ..course(2, "UI/UX Design Fundamentals")
        },
        Course {
            description: "Develop strategic thinking and management skills for modern business."
                .to_string(),
            category: CourseCategory::Business,
            level: Level::Intermediate,
            price: Money::from_dollars(129),
            rating: 4.9,
            students: 3200,
            popularity: 88,
            instructor: "Mike Johnson".to_string(),
            tags: vec!["strategy".to_string(), "leadership".to_string()],
            ..course(3, "Business Strategy & Management")
        },
        Course {
            description: "Comprehensive guide to data science using Python and machine learning."
                .to_string(),
            level: Level::Advanced,
            price: Money::from_dollars(149),
            rating: 4.8,
            students: 4100,
            popularity: 95,
            instructor: "Sarah Wilson".to_string(),
            tags: vec!["python".to_string(), "machine learning".to_string()],
            ..course(4, "Data Science with Python")
        },
        Course {
            description: "Learn effective digital marketing strategies and tools.".to_string(),
            category: CourseCategory::Business,
            price: Money::from_dollars(69),
            rating: 4.6,
            students: 1500,
            popularity: 74,
            instructor: "Tom Brown".to_string(),
            tags: vec!["marketing".to_string(), "seo".to_string()],
            ..course(5, "Digital Marketing Essentials")
        },
        Course {
            description: "Explore the fascinating world of quantum physics and mechanics."
                .to_string(),
            category: CourseCategory::Science,
            level: Level::Advanced,
            price: Money::from_dollars(199),
            rating: 4.9,
            students: 800,
            popularity: 67,
            instructor: "Dr. Emily Chen".to_string(),
            tags: vec!["physics".to_string(), "quantum".to_string()],
            ..course(6, "Physics: Quantum Mechanics")
        },
    ]
}
