use std::sync::Arc;

use dashboard_core::model::{Course, CourseError, CourseId};

mod builtin;

pub use builtin::builtin_courses;

/// Read-only access to the course catalog.
///
/// The catalog is fixed in-memory data, validated once at construction and
/// never mutated afterwards.
#[derive(Clone)]
pub struct CatalogService {
    courses: Arc<Vec<Course>>,
}

impl CatalogService {
    #[must_use]
    pub fn new(courses: Vec<Course>) -> Self {
        Self {
            courses: Arc::new(courses),
        }
    }

    /// Builds the service over the built-in demo catalog.
    ///
    /// # Errors
    ///
    /// Returns `CourseError` if the built-in data fails course validation.
    pub fn builtin() -> Result<Self, CourseError> {
        Ok(Self::new(builtin_courses()?))
    }

    /// All courses in catalog order.
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Fetch a course by id.
    ///
    /// Returns `None` when the id is unknown; an unknown course is a state
    /// for the caller to render, not an error.
    #[must_use]
    pub fn get(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|course| course.id() == id)
    }

    /// Courses whose title, category, or instructor matches the query,
    /// case-insensitively. A blank query returns the whole catalog.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Course> {
        self.courses
            .iter()
            .filter(|course| course.matches_query(query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_six_courses_in_order() {
        let catalog = CatalogService::builtin().unwrap();
        let ids: Vec<u64> = catalog.courses().iter().map(|c| c.id().value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn builtin_catalog_lesson_counts() {
        let catalog = CatalogService::builtin().unwrap();
        let counts: Vec<usize> = catalog
            .courses()
            .iter()
            .map(Course::total_lessons)
            .collect();
        assert_eq!(counts, vec![8, 10, 9, 12, 8, 10]);
    }

    #[test]
    fn get_returns_course_for_known_id() {
        let catalog = CatalogService::builtin().unwrap();
        let course = catalog.get(CourseId::new(3)).unwrap();
        assert_eq!(course.title(), "React for Beginners");
        assert_eq!(course.instructor(), "Emily Rodriguez");
    }

    #[test]
    fn get_returns_none_for_unknown_id() {
        let catalog = CatalogService::builtin().unwrap();
        assert!(catalog.get(CourseId::new(999)).is_none());
    }

    #[test]
    fn search_matches_title_category_and_instructor() {
        let catalog = CatalogService::builtin().unwrap();

        let by_title = catalog.search("react");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id(), CourseId::new(3));

        let by_category = catalog.search("learning");
        assert!(by_category.len() >= 2);

        let by_instructor = catalog.search("nakamura");
        assert_eq!(by_instructor.len(), 1);
        assert_eq!(by_instructor[0].id(), CourseId::new(5));
    }

    #[test]
    fn search_with_blank_query_returns_everything() {
        let catalog = CatalogService::builtin().unwrap();
        assert_eq!(catalog.search("  ").len(), catalog.courses().len());
    }

    #[test]
    fn search_with_no_match_returns_empty() {
        let catalog = CatalogService::builtin().unwrap();
        assert!(catalog.search("woodworking").is_empty());
    }
}
