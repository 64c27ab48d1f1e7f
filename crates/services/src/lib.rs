#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog;
pub mod error;
pub mod progress_service;
pub mod session_service;
pub mod theme_service;

pub use dashboard_core::Clock;

pub use app_services::AppServices;
pub use catalog::CatalogService;
pub use error::AppServicesError;
pub use progress_service::{CourseProgress, DashboardOverview, ProgressService};
pub use session_service::SessionService;
pub use theme_service::ThemeService;
