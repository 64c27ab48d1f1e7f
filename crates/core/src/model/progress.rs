use std::collections::BTreeSet;
use std::fmt;

use crate::model::course::Course;
use crate::model::ids::LessonId;

//
// ─── COMPLETED LESSONS ─────────────────────────────────────────────────────────
//

/// The set of lessons a user has marked complete within one course.
///
/// Backed by an ordered set: membership is what matters, and the persisted
/// form is a sorted sequence of lesson ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletedLessons(BTreeSet<LessonId>);

impl CompletedLessons {
    /// Creates an empty completed set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a completed set from raw ids, discarding duplicates.
    #[must_use]
    pub fn from_ids(ids: impl IntoIterator<Item = LessonId>) -> Self {
        Self(ids.into_iter().collect())
    }

    /// Flips the completion state of a lesson.
    ///
    /// Removes the id if present, inserts it otherwise. Toggling the same id
    /// twice restores the original set. Returns true when the lesson is
    /// complete after the toggle.
    pub fn toggle(&mut self, lesson: LessonId) -> bool {
        if self.0.remove(&lesson) {
            false
        } else {
            self.0.insert(lesson);
            true
        }
    }

    #[must_use]
    pub fn contains(&self, lesson: LessonId) -> bool {
        self.0.contains(&lesson)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates completed lesson ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = LessonId> + '_ {
        self.0.iter().copied()
    }

    /// Returns the completed ids as a sorted vector, the persisted form.
    #[must_use]
    pub fn to_ids(&self) -> Vec<LessonId> {
        self.0.iter().copied().collect()
    }

    /// Drops ids that do not belong to the given course.
    ///
    /// Stale ids can appear when stored progress outlives a catalog change.
    /// Returns the number of ids removed.
    pub fn retain_known(&mut self, course: &Course) -> usize {
        let before = self.0.len();
        self.0.retain(|id| course.contains_lesson(*id));
        before - self.0.len()
    }
}

//
// ─── PROGRESS DERIVATION ───────────────────────────────────────────────────────
//

/// Derives a display percentage from completed and total lesson counts.
///
/// Rounds half away from zero, matching `7/8 -> 88` and `1/8 -> 13`.
/// A zero total yields 0; validated courses always have at least one lesson.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[allow(clippy::cast_precision_loss)]
pub fn progress_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total);
    let percent = (completed as f64 / total as f64 * 100.0).round();
    percent as u8
}

/// Qualitative label derived from a progress percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    NotStarted,
    JustStarted,
    InProgress,
    AlmostDone,
    Completed,
}

impl Badge {
    /// Maps a percentage to its badge.
    ///
    /// Buckets: 0, (0, 30), [30, 70), [70, 100), 100. Exact threshold values
    /// land in the higher bucket (30 is "In Progress", 70 is "Almost Done").
    #[must_use]
    pub fn from_percent(percent: u8) -> Self {
        match percent {
            0 => Self::NotStarted,
            1..=29 => Self::JustStarted,
            30..=69 => Self::InProgress,
            70..=99 => Self::AlmostDone,
            _ => Self::Completed,
        }
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Badge::NotStarted => "Not Started",
            Badge::JustStarted => "Just Started",
            Badge::InProgress => "In Progress",
            Badge::AlmostDone => "Almost Done",
            Badge::Completed => "Completed",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Percentage and badge for one course, derived from counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    pub percent: u8,
    pub badge: Badge,
}

impl ProgressSummary {
    /// Derives a summary from completed and total lesson counts.
    #[must_use]
    pub fn from_counts(completed: usize, total: usize) -> Self {
        let percent = progress_percent(completed, total);
        Self {
            percent,
            badge: Badge::from_percent(percent),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::course::Course;
    use crate::model::ids::CourseId;
    use crate::model::lesson::{Lesson, LessonKind};

    fn course_with_lessons(ids: &[u64]) -> Course {
        let lessons = ids
            .iter()
            .map(|id| {
                Lesson::new(
                    LessonId::new(*id),
                    format!("Lesson {id}"),
                    "10 min",
                    LessonKind::Video,
                )
            })
            .collect();
        Course::new(
            CourseId::new(1),
            "Course",
            "",
            "Instructor",
            "Category",
            lessons,
        )
        .unwrap()
    }

    #[test]
    fn toggle_twice_is_identity() {
        let original = CompletedLessons::from_ids([LessonId::new(1), LessonId::new(4)]);
        let mut set = original.clone();
        set.toggle(LessonId::new(2));
        set.toggle(LessonId::new(2));
        assert_eq!(set, original);

        set.toggle(LessonId::new(4));
        set.toggle(LessonId::new(4));
        assert_eq!(set, original);
    }

    #[test]
    fn toggle_reports_new_state() {
        let mut set = CompletedLessons::new();
        assert!(set.toggle(LessonId::new(3)));
        assert!(set.contains(LessonId::new(3)));
        assert!(!set.toggle(LessonId::new(3)));
        assert!(set.is_empty());
    }

    #[test]
    fn from_ids_discards_duplicates() {
        let set = CompletedLessons::from_ids([
            LessonId::new(2),
            LessonId::new(2),
            LessonId::new(1),
        ]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.to_ids(), vec![LessonId::new(1), LessonId::new(2)]);
    }

    #[test]
    fn to_ids_is_sorted() {
        let mut set = CompletedLessons::new();
        set.toggle(LessonId::new(9));
        set.toggle(LessonId::new(1));
        set.toggle(LessonId::new(5));
        assert_eq!(
            set.to_ids(),
            vec![LessonId::new(1), LessonId::new(5), LessonId::new(9)]
        );
    }

    #[test]
    fn retain_known_drops_stale_ids() {
        let course = course_with_lessons(&[1, 2, 3]);
        let mut set = CompletedLessons::from_ids([
            LessonId::new(1),
            LessonId::new(3),
            LessonId::new(7),
            LessonId::new(8),
        ]);
        let dropped = set.retain_known(&course);
        assert_eq!(dropped, 2);
        assert_eq!(set.to_ids(), vec![LessonId::new(1), LessonId::new(3)]);
    }

    #[test]
    fn percent_rounds_half_away_from_zero() {
        assert_eq!(progress_percent(1, 8), 13);
        assert_eq!(progress_percent(7, 8), 88);
        assert_eq!(progress_percent(6, 8), 75);
        assert_eq!(progress_percent(0, 8), 0);
        assert_eq!(progress_percent(8, 8), 100);
    }

    #[test]
    fn percent_clamps_overfull_sets() {
        assert_eq!(progress_percent(9, 8), 100);
    }

    #[test]
    fn percent_of_empty_total_is_zero() {
        assert_eq!(progress_percent(0, 0), 0);
    }

    #[test]
    fn badge_boundary_table() {
        assert_eq!(Badge::from_percent(0), Badge::NotStarted);
        assert_eq!(Badge::from_percent(1), Badge::JustStarted);
        assert_eq!(Badge::from_percent(29), Badge::JustStarted);
        assert_eq!(Badge::from_percent(30), Badge::InProgress);
        assert_eq!(Badge::from_percent(69), Badge::InProgress);
        assert_eq!(Badge::from_percent(70), Badge::AlmostDone);
        assert_eq!(Badge::from_percent(99), Badge::AlmostDone);
        assert_eq!(Badge::from_percent(100), Badge::Completed);
    }

    #[test]
    fn badge_labels() {
        assert_eq!(Badge::NotStarted.label(), "Not Started");
        assert_eq!(Badge::JustStarted.label(), "Just Started");
        assert_eq!(Badge::InProgress.label(), "In Progress");
        assert_eq!(Badge::AlmostDone.label(), "Almost Done");
        assert_eq!(Badge::Completed.label(), "Completed");
        assert_eq!(Badge::Completed.to_string(), "Completed");
    }

    #[test]
    fn summary_walkthrough_eight_lesson_course() {
        let course = course_with_lessons(&[1, 2, 3, 4, 5, 6, 7, 8]);
        let mut set = CompletedLessons::new();

        let summary = ProgressSummary::from_counts(set.len(), course.total_lessons());
        assert_eq!(summary.percent, 0);
        assert_eq!(summary.badge, Badge::NotStarted);

        set.toggle(LessonId::new(3));
        let summary = ProgressSummary::from_counts(set.len(), course.total_lessons());
        assert_eq!(summary.percent, 13);
        assert_eq!(summary.badge, Badge::JustStarted);

        for id in [1, 2, 4, 5, 6] {
            set.toggle(LessonId::new(id));
        }
        let summary = ProgressSummary::from_counts(set.len(), course.total_lessons());
        assert_eq!(summary.percent, 75);
        assert_eq!(summary.badge, Badge::AlmostDone);

        set.toggle(LessonId::new(7));
        set.toggle(LessonId::new(8));
        let summary = ProgressSummary::from_counts(set.len(), course.total_lessons());
        assert_eq!(summary.percent, 100);
        assert_eq!(summary.badge, Badge::Completed);

        set.toggle(LessonId::new(3));
        let summary = ProgressSummary::from_counts(set.len(), course.total_lessons());
        assert_eq!(summary.percent, 88);
        assert_eq!(summary.badge, Badge::AlmostDone);
    }
}
