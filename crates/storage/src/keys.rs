//! Key layout of the persisted dashboard state.
//!
//! Every durable value lives under one of these string keys. Values are
//! JSON or plain strings; the repository layer treats them as opaque.

use dashboard_core::model::CourseId;

/// Login flag; holds the string literal `"true"` when a session exists.
pub const LOGGED_IN: &str = "isLoggedIn";

/// Email of the logged-in user.
pub const USER_EMAIL: &str = "userEmail";

/// Persisted UI theme, `"light"` or `"dark"`.
pub const THEME: &str = "ai-dashboard-theme";

/// Key holding the completed-lesson ids for one course, as a sorted JSON
/// array of integers.
#[must_use]
pub fn course_completed(course: CourseId) -> String {
    format!("course-{course}-completed")
}
