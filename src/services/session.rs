use crate::models::errors::SessionError;
use regex::Regex;
use std::sync::OnceLock;

pub const MIN_PASSWORD_LEN: usize = 6;

/// A locally accepted session. Credentials are validated for shape only and
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
}

impl Session {
    pub fn greeting(&self) -> String {
        format!("Welcome, {}", self.username)
    }
}

fn email_re() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"))
}

pub fn login(username: &str, password: &str) -> Result<Session, SessionError> {
    if username.is_empty() || password.is_empty() {
        return Err(SessionError::MissingCredentials);
    }
    Ok(Session {
        username: username.to_string(),
    })
}

pub fn register(username: &str, email: &str, password: &str) -> Result<Session, SessionError> {
    if username.trim().is_empty() {
        return Err(SessionError::MissingUsername);
    }
    if email.trim().is_empty() || !email_re().is_match(email) {
        return Err(SessionError::InvalidEmail);
    }
    if password.trim().is_empty() || password.chars().count() < MIN_PASSWORD_LEN {
        return Err(SessionError::WeakPassword);
    }
    Ok(Session {
        username: username.to_string(),
    })
}
