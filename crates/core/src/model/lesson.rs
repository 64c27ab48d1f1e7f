use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::ids::LessonId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors that can occur when working with lesson kinds.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LessonKindError {
    #[error("unknown lesson kind: {0}")]
    Unknown(String),
}

//
// ─── LESSON KIND ───────────────────────────────────────────────────────────────
//

/// Content type of a lesson.
///
/// Stored and displayed using the lowercase wire strings
/// `video`, `article`, and `quiz`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonKind {
    /// Recorded video content.
    Video,
    /// Written article content.
    Article,
    /// Interactive knowledge check.
    Quiz,
}

impl LessonKind {
    /// Returns the lowercase wire string for this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LessonKind::Video => "video",
            LessonKind::Article => "article",
            LessonKind::Quiz => "quiz",
        }
    }
}

impl fmt::Display for LessonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LessonKind {
    type Err = LessonKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "video" => Ok(Self::Video),
            "article" => Ok(Self::Article),
            "quiz" => Ok(Self::Quiz),
            other => Err(LessonKindError::Unknown(other.to_string())),
        }
    }
}

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

/// An atomic content item within a course.
///
/// Lessons are immutable catalog data; completion state lives in the
/// progress store, keyed by `LessonId`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub id: LessonId,
    pub title: String,
    pub duration: String,
    pub kind: LessonKind,
}

impl Lesson {
    #[must_use]
    pub fn new(
        id: LessonId,
        title: impl Into<String>,
        duration: impl Into<String>,
        kind: LessonKind,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            duration: duration.into(),
            kind,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
