use std::sync::Arc;

use dashboard_core::Clock;
use dashboard_core::model::Theme;
use storage::keys;
use storage::repository::KeyValueRepository;

/// Persisted UI theme preference.
///
/// An absent, unreadable, or unrecognized stored value falls back to the
/// light theme; a failed write is logged and the returned theme stands.
#[derive(Clone)]
pub struct ThemeService {
    clock: Clock,
    kv: Arc<dyn KeyValueRepository>,
}

impl ThemeService {
    #[must_use]
    pub fn new(clock: Clock, kv: Arc<dyn KeyValueRepository>) -> Self {
        Self { clock, kv }
    }

    /// Returns the persisted theme, defaulting to light.
    pub async fn current(&self) -> Theme {
        let stored = match self.kv.get(keys::THEME).await {
            Ok(stored) => stored,
            Err(err) => {
                log::warn!("failed to read theme: {err}");
                return Theme::default();
            }
        };
        let Some(stored) = stored else {
            return Theme::default();
        };
        match stored.parse() {
            Ok(theme) => theme,
            Err(err) => {
                log::warn!("discarding stored theme: {err}");
                Theme::default()
            }
        }
    }

    /// Persists the given theme, best-effort, and returns it.
    pub async fn set(&self, theme: Theme) -> Theme {
        if let Err(err) = self
            .kv
            .put(keys::THEME, theme.as_str(), self.clock.now())
            .await
        {
            log::warn!("failed to persist theme: {err}");
        }
        theme
    }

    /// Flips between light and dark and persists the result.
    pub async fn toggle(&self) -> Theme {
        let next = self.current().await.toggled();
        self.set(next).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use dashboard_core::time::fixed_clock;
    use storage::repository::InMemoryRepository;

    fn service(repo: InMemoryRepository) -> ThemeService {
        ThemeService::new(fixed_clock(), Arc::new(repo))
    }

    #[tokio::test]
    async fn current_defaults_to_light() {
        let service = service(InMemoryRepository::new());
        assert_eq!(service.current().await, Theme::Light);
    }

    #[tokio::test]
    async fn toggle_persists_the_flipped_theme() {
        let repo = InMemoryRepository::new();
        let service = service(repo.clone());

        assert_eq!(service.toggle().await, Theme::Dark);
        let stored = repo.get(keys::THEME).await.unwrap();
        assert_eq!(stored.as_deref(), Some("dark"));

        assert_eq!(service.toggle().await, Theme::Light);
        let stored = repo.get(keys::THEME).await.unwrap();
        assert_eq!(stored.as_deref(), Some("light"));
    }

    #[tokio::test]
    async fn unrecognized_stored_value_falls_back_to_light() {
        let repo = InMemoryRepository::new();
        repo.put(keys::THEME, "solarized", fixed_clock().now())
            .await
            .unwrap();

        let service = service(repo);
        assert_eq!(service.current().await, Theme::Light);
    }

    #[tokio::test]
    async fn set_overwrites_previous_choice() {
        let repo = InMemoryRepository::new();
        let service = service(repo.clone());

        service.set(Theme::Dark).await;
        service.set(Theme::Light).await;
        let stored = repo.get(keys::THEME).await.unwrap();
        assert_eq!(stored.as_deref(), Some("light"));
    }
}
