mod course;
mod ids;
mod lesson;
mod progress;
mod session;
mod theme;

pub use ids::{CourseId, LessonId, ParseIdError};

pub use course::{Course, CourseError};
pub use lesson::{Lesson, LessonKind, LessonKindError};
pub use progress::{Badge, CompletedLessons, ProgressSummary, progress_percent};
pub use session::{LoginDraft, LoginError, MIN_PASSWORD_LEN, Session};
pub use theme::{ParseThemeError, Theme};
