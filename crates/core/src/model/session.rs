use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LoginError {
    #[error("email is required")]
    EmptyEmail,

    #[error("enter a valid email address")]
    InvalidEmail,

    #[error("password is required")]
    EmptyPassword,

    #[error("password must be at least 6 characters")]
    PasswordTooShort,
}

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

//
// ─── LOGIN ─────────────────────────────────────────────────────────────────────
//

/// Raw login form input, validated into a `Session`.
#[derive(Debug, Clone, Default)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

impl LoginDraft {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Validates the draft into an authenticated session.
    ///
    /// The password is checked for shape only and then discarded; there is
    /// no credential verification in this system.
    ///
    /// # Errors
    ///
    /// Returns `LoginError` describing the first failing field.
    pub fn validate(self) -> Result<Session, LoginError> {
        let email = self.email.trim().to_owned();
        if email.is_empty() {
            return Err(LoginError::EmptyEmail);
        }
        if !is_valid_email(&email) {
            return Err(LoginError::InvalidEmail);
        }

        if self.password.is_empty() {
            return Err(LoginError::EmptyPassword);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(LoginError::PasswordTooShort);
        }

        Ok(Session { email })
    }
}

/// A logged-in user, identified by email only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    email: String,
}

impl Session {
    /// Rebuilds a session from a persisted email without re-validation.
    ///
    /// Stored sessions predate the current validation rules; what was
    /// persisted is taken at face value.
    #[must_use]
    pub fn resume(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Checks the `local@host.tld` shape: no whitespace, a single `@` with a
/// non-empty local part, and a dot with non-empty sides in the domain.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_well_formed_credentials() {
        let session = LoginDraft::new("you@example.com", "hunter22")
            .validate()
            .unwrap();
        assert_eq!(session.email(), "you@example.com");
    }

    #[test]
    fn validate_trims_email() {
        let session = LoginDraft::new("  you@example.com  ", "hunter22")
            .validate()
            .unwrap();
        assert_eq!(session.email(), "you@example.com");
    }

    #[test]
    fn validate_rejects_empty_email() {
        let err = LoginDraft::new("   ", "hunter22").validate().unwrap_err();
        assert_eq!(err, LoginError::EmptyEmail);
    }

    #[test]
    fn validate_rejects_malformed_email() {
        for email in [
            "plainaddress",
            "missing-domain@",
            "@missing-local.com",
            "no-tld@example",
            "dot-at-end@example.",
            "two@@example.com",
            "spaces in@example.com",
        ] {
            let err = LoginDraft::new(email, "hunter22").validate().unwrap_err();
            assert_eq!(err, LoginError::InvalidEmail, "email: {email}");
        }
    }

    #[test]
    fn validate_rejects_empty_password() {
        let err = LoginDraft::new("you@example.com", "").validate().unwrap_err();
        assert_eq!(err, LoginError::EmptyPassword);
    }

    #[test]
    fn validate_rejects_short_password() {
        let err = LoginDraft::new("you@example.com", "12345")
            .validate()
            .unwrap_err();
        assert_eq!(err, LoginError::PasswordTooShort);
    }

    #[test]
    fn resume_takes_stored_email_at_face_value() {
        let session = Session::resume("whatever");
        assert_eq!(session.email(), "whatever");
    }
}
