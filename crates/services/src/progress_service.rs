use std::sync::Arc;

use dashboard_core::Clock;
use dashboard_core::model::{
    Badge, CompletedLessons, Course, CourseId, LessonId, ProgressSummary,
};
use storage::keys;
use storage::repository::KeyValueRepository;

//
// ─── VIEWS ─────────────────────────────────────────────────────────────────────
//

/// Progress state for one course, derived from the completed-lesson set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseProgress {
    pub course_id: CourseId,
    pub completed: CompletedLessons,
    pub percent: u8,
    pub badge: Badge,
    pub remaining: usize,
}

impl CourseProgress {
    /// Derives the display values from a course and its completed set.
    #[must_use]
    pub fn derive(course: &Course, completed: CompletedLessons) -> Self {
        let summary = ProgressSummary::from_counts(completed.len(), course.total_lessons());
        let remaining = course.total_lessons().saturating_sub(completed.len());
        Self {
            course_id: course.id(),
            completed,
            percent: summary.percent,
            badge: summary.badge,
            remaining,
        }
    }
}

/// Aggregated view of progress across the catalog, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardOverview {
    pub courses: Vec<CourseProgress>,
    pub average_percent: u8,
    pub completed_courses: usize,
}

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// Durable per-course record of which lessons the user has marked complete.
///
/// Storage failures never escape this service: reads degrade to the empty
/// set, writes are dropped with a logged warning, and the returned in-memory
/// state stays authoritative either way.
#[derive(Clone)]
pub struct ProgressService {
    clock: Clock,
    kv: Arc<dyn KeyValueRepository>,
}

impl ProgressService {
    #[must_use]
    pub fn new(clock: Clock, kv: Arc<dyn KeyValueRepository>) -> Self {
        Self { clock, kv }
    }

    /// Loads the completed-lesson set for a course.
    ///
    /// An absent key, an unreadable backend, or an unparseable payload all
    /// yield the empty set; stored lesson ids the course does not contain
    /// are dropped. Every degradation is logged as a warning.
    pub async fn completed(&self, course: &Course) -> CompletedLessons {
        let key = keys::course_completed(course.id());
        let raw = match self.kv.get(&key).await {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("progress read failed for {key}: {err}");
                return CompletedLessons::new();
            }
        };
        let Some(raw) = raw else {
            return CompletedLessons::new();
        };
        let ids: Vec<LessonId> = match serde_json::from_str(&raw) {
            Ok(ids) => ids,
            Err(err) => {
                log::warn!("discarding unreadable progress payload for {key}: {err}");
                return CompletedLessons::new();
            }
        };
        let mut completed = CompletedLessons::from_ids(ids);
        let dropped = completed.retain_known(course);
        if dropped > 0 {
            log::warn!("dropped {dropped} stale lesson ids for {key}");
        }
        completed
    }

    /// Flips one lesson's completion state and persists the new set.
    ///
    /// Toggling twice restores the original state. A lesson id the course
    /// does not contain is ignored with a warning. A failed write leaves the
    /// returned state intact; the next toggle writes the full set again.
    pub async fn toggle(&self, course: &Course, lesson: LessonId) -> CourseProgress {
        let mut completed = self.completed(course).await;
        if course.contains_lesson(lesson) {
            completed.toggle(lesson);
            self.save(course.id(), &completed).await;
        } else {
            log::warn!(
                "ignoring toggle of unknown lesson {lesson} in course {}",
                course.id()
            );
        }
        CourseProgress::derive(course, completed)
    }

    /// Current progress for one course.
    pub async fn course_progress(&self, course: &Course) -> CourseProgress {
        let completed = self.completed(course).await;
        CourseProgress::derive(course, completed)
    }

    /// Progress for every given course plus the dashboard aggregates.
    pub async fn overview(&self, courses: &[Course]) -> DashboardOverview {
        let mut progress = Vec::with_capacity(courses.len());
        for course in courses {
            progress.push(self.course_progress(course).await);
        }
        let average_percent = average_percent(&progress);
        let completed_courses = progress.iter().filter(|p| p.percent == 100).count();
        DashboardOverview {
            courses: progress,
            average_percent,
            completed_courses,
        }
    }

    async fn save(&self, course_id: CourseId, completed: &CompletedLessons) {
        let key = keys::course_completed(course_id);
        let payload = match serde_json::to_string(&completed.to_ids()) {
            Ok(payload) => payload,
            Err(err) => {
                log::warn!("failed to encode progress payload for {key}: {err}");
                return;
            }
        };
        if let Err(err) = self.kv.put(&key, &payload, self.clock.now()).await {
            log::warn!("progress write failed for {key}: {err}");
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[allow(clippy::cast_precision_loss)]
fn average_percent(progress: &[CourseProgress]) -> u8 {
    if progress.is_empty() {
        return 0;
    }
    let total: u32 = progress.iter().map(|p| u32::from(p.percent)).sum();
    (f64::from(total) / progress.len() as f64).round() as u8
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
