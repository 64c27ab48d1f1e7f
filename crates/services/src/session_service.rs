use std::sync::Arc;

use dashboard_core::Clock;
use dashboard_core::model::{LoginDraft, LoginError, Session};
use storage::keys;
use storage::repository::KeyValueRepository;

/// Value stored under the login flag while a session exists.
const LOGGED_IN_VALUE: &str = "true";

/// Simulated login session persisted in the key-value store.
///
/// Validation failures are the caller's to render; storage failures are
/// logged and the in-memory session stays valid for the process lifetime.
#[derive(Clone)]
pub struct SessionService {
    clock: Clock,
    kv: Arc<dyn KeyValueRepository>,
}

impl SessionService {
    #[must_use]
    pub fn new(clock: Clock, kv: Arc<dyn KeyValueRepository>) -> Self {
        Self { clock, kv }
    }

    /// Validates the credentials and records the session.
    ///
    /// # Errors
    ///
    /// Returns `LoginError` if the email or password fails validation.
    pub async fn login(&self, draft: LoginDraft) -> Result<Session, LoginError> {
        let session = draft.validate()?;

        let now = self.clock.now();
        if let Err(err) = self.kv.put(keys::LOGGED_IN, LOGGED_IN_VALUE, now).await {
            log::warn!("failed to persist login flag: {err}");
        }
        if let Err(err) = self.kv.put(keys::USER_EMAIL, session.email(), now).await {
            log::warn!("failed to persist user email: {err}");
        }

        Ok(session)
    }

    /// Returns the persisted session, if one exists.
    ///
    /// Only the exact stored literal `"true"` counts as logged in; anything
    /// else, including a storage read failure, reads as logged out.
    pub async fn current(&self) -> Option<Session> {
        let flag = match self.kv.get(keys::LOGGED_IN).await {
            Ok(flag) => flag,
            Err(err) => {
                log::warn!("failed to read login flag: {err}");
                return None;
            }
        };
        if flag.as_deref() != Some(LOGGED_IN_VALUE) {
            return None;
        }

        let email = match self.kv.get(keys::USER_EMAIL).await {
            Ok(email) => email.unwrap_or_default(),
            Err(err) => {
                log::warn!("failed to read user email: {err}");
                String::new()
            }
        };
        Some(Session::resume(email))
    }

    /// True when a persisted session exists. This is the auth-gate read;
    /// enforcement belongs to the caller.
    pub async fn is_logged_in(&self) -> bool {
        self.current().await.is_some()
    }

    /// Clears the persisted session, best-effort.
    pub async fn logout(&self) {
        if let Err(err) = self.kv.remove(keys::LOGGED_IN).await {
            log::warn!("failed to clear login flag: {err}");
        }
        if let Err(err) = self.kv.remove(keys::USER_EMAIL).await {
            log::warn!("failed to clear user email: {err}");
        }
    }
}
