use std::collections::HashSet;

use thiserror::Error;

use crate::model::ids::{CourseId, LessonId};
use crate::model::lesson::Lesson;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("course title cannot be empty")]
    EmptyTitle,

    #[error("course instructor cannot be empty")]
    EmptyInstructor,

    #[error("course category cannot be empty")]
    EmptyCategory,

    #[error("course must contain at least one lesson")]
    NoLessons,

    #[error("duplicate lesson id {0} within course")]
    DuplicateLessonId(LessonId),
}

//
// ─── COURSE ────────────────────────────────────────────────────────────────────
//

/// A named unit of instructional content composed of ordered lessons.
///
/// Courses are immutable after construction; per-user completion state is
/// tracked separately against the lesson ids exposed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: CourseId,
    title: String,
    description: String,
    instructor: String,
    category: String,
    lessons: Vec<Lesson>,
}

impl Course {
    /// Creates a new course.
    ///
    /// Title, instructor, and category are trimmed and must be non-empty.
    /// The lesson list must be non-empty and lesson ids must be unique
    /// within the course.
    ///
    /// # Errors
    ///
    /// Returns `CourseError` if any field fails validation.
    pub fn new(
        id: CourseId,
        title: impl Into<String>,
        description: impl Into<String>,
        instructor: impl Into<String>,
        category: impl Into<String>,
        lessons: Vec<Lesson>,
    ) -> Result<Self, CourseError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(CourseError::EmptyTitle);
        }

        let instructor = instructor.into();
        if instructor.trim().is_empty() {
            return Err(CourseError::EmptyInstructor);
        }

        let category = category.into();
        if category.trim().is_empty() {
            return Err(CourseError::EmptyCategory);
        }

        if lessons.is_empty() {
            return Err(CourseError::NoLessons);
        }

        let mut seen = HashSet::with_capacity(lessons.len());
        for lesson in &lessons {
            if !seen.insert(lesson.id) {
                return Err(CourseError::DuplicateLessonId(lesson.id));
            }
        }

        Ok(Self {
            id,
            title: title.trim().to_owned(),
            description: description.into().trim().to_owned(),
            instructor: instructor.trim().to_owned(),
            category: category.trim().to_owned(),
            lessons,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> CourseId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    /// Number of lessons in this course. Always at least 1.
    #[must_use]
    pub fn total_lessons(&self) -> usize {
        self.lessons.len()
    }

    /// Looks up a lesson by id.
    #[must_use]
    pub fn lesson(&self, id: LessonId) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| lesson.id == id)
    }

    /// Returns true when the course contains a lesson with the given id.
    #[must_use]
    pub fn contains_lesson(&self, id: LessonId) -> bool {
        self.lesson(id).is_some()
    }

    /// Case-insensitive match against title, category, or instructor.
    ///
    /// A query that is empty after trimming matches every course.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&needle)
            || self.category.to_lowercase().contains(&needle)
            || self.instructor.to_lowercase().contains(&needle)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::lesson::LessonKind;

    fn lesson(id: u64) -> Lesson {
        Lesson::new(
            LessonId::new(id),
            format!("Lesson {id}"),
            "10 min",
            LessonKind::Video,
        )
    }

    fn build_course(lessons: Vec<Lesson>) -> Result<Course, CourseError> {
        Course::new(
            CourseId::new(1),
            "AI Fundamentals",
            "Core principles of AI.",
            "Dr. Sarah Chen",
            "Artificial Intelligence",
            lessons,
        )
    }

    #[test]
    fn course_new_rejects_empty_title() {
        let err = Course::new(
            CourseId::new(1),
            "   ",
            "desc",
            "Someone",
            "Category",
            vec![lesson(1)],
        )
        .unwrap_err();
        assert_eq!(err, CourseError::EmptyTitle);
    }

    #[test]
    fn course_new_rejects_empty_instructor() {
        let err = Course::new(
            CourseId::new(1),
            "Title",
            "desc",
            " ",
            "Category",
            vec![lesson(1)],
        )
        .unwrap_err();
        assert_eq!(err, CourseError::EmptyInstructor);
    }

    #[test]
    fn course_new_rejects_empty_lesson_list() {
        let err = build_course(Vec::new()).unwrap_err();
        assert_eq!(err, CourseError::NoLessons);
    }

    #[test]
    fn course_new_rejects_duplicate_lesson_ids() {
        let err = build_course(vec![lesson(1), lesson(2), lesson(1)]).unwrap_err();
        assert_eq!(err, CourseError::DuplicateLessonId(LessonId::new(1)));
    }

    #[test]
    fn course_trims_text_fields() {
        let course = Course::new(
            CourseId::new(2),
            "  Machine Learning Basics  ",
            "  Build a solid foundation.  ",
            "  Prof. James Liu ",
            " Machine Learning ",
            vec![lesson(1)],
        )
        .unwrap();

        assert_eq!(course.title(), "Machine Learning Basics");
        assert_eq!(course.description(), "Build a solid foundation.");
        assert_eq!(course.instructor(), "Prof. James Liu");
        assert_eq!(course.category(), "Machine Learning");
    }

    #[test]
    fn course_lesson_lookup() {
        let course = build_course(vec![lesson(1), lesson(2), lesson(3)]).unwrap();
        assert_eq!(course.total_lessons(), 3);
        assert!(course.contains_lesson(LessonId::new(2)));
        assert!(course.lesson(LessonId::new(99)).is_none());
    }

    #[test]
    fn course_matches_query_on_title_category_instructor() {
        let course = build_course(vec![lesson(1)]).unwrap();
        assert!(course.matches_query("fundamentals"));
        assert!(course.matches_query("ARTIFICIAL"));
        assert!(course.matches_query("chen"));
        assert!(!course.matches_query("cooking"));
    }

    #[test]
    fn course_matches_blank_query() {
        let course = build_course(vec![lesson(1)]).unwrap();
        assert!(course.matches_query(""));
        assert!(course.matches_query("   "));
    }
}
