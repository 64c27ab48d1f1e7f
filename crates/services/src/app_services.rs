use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::catalog::CatalogService;
use crate::error::AppServicesError;
use crate::progress_service::ProgressService;
use crate::session_service::SessionService;
use crate::theme_service::ThemeService;

/// Assembles the dashboard services over one shared storage backend.
#[derive(Clone)]
pub struct AppServices {
    catalog: CatalogService,
    progress: Arc<ProgressService>,
    session: Arc<SessionService>,
    theme: Arc<ThemeService>,
}

impl AppServices {
    /// Build services over an existing storage handle and the built-in
    /// catalog.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the built-in catalog fails validation.
    pub fn from_storage(clock: Clock, storage: &Storage) -> Result<Self, AppServicesError> {
        let catalog = CatalogService::builtin()?;
        let progress = Arc::new(ProgressService::new(clock, Arc::clone(&storage.kv)));
        let session = Arc::new(SessionService::new(clock, Arc::clone(&storage.kv)));
        let theme = Arc::new(ThemeService::new(clock, Arc::clone(&storage.kv)));

        Ok(Self {
            catalog,
            progress,
            session,
            theme,
        })
    }

    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or catalog
    /// construction fails.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::from_storage(clock, &storage)
    }

    /// Build services over in-memory storage, for tests and prototyping.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if catalog construction fails.
    pub fn new_in_memory(clock: Clock) -> Result<Self, AppServicesError> {
        Self::from_storage(clock, &Storage::in_memory())
    }

    #[must_use]
    pub fn catalog(&self) -> &CatalogService {
        &self.catalog
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn session(&self) -> Arc<SessionService> {
        Arc::clone(&self.session)
    }

    #[must_use]
    pub fn theme(&self) -> Arc<ThemeService> {
        Arc::clone(&self.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use dashboard_core::model::{CourseId, LessonId};
    use dashboard_core::time::fixed_clock;

    #[tokio::test]
    async fn in_memory_services_share_one_store() {
        let services = AppServices::new_in_memory(fixed_clock()).unwrap();
        let course = services.catalog().get(CourseId::new(1)).unwrap().clone();

        let progress = services.progress();
        progress.toggle(&course, LessonId::new(1)).await;

        let reread = progress.course_progress(&course).await;
        assert_eq!(reread.percent, 13);
    }
}
