use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Subject '{subject}' unavailable: {reason}")]
    SourceUnavailable { subject: String, reason: String },
    #[error("Malformed entry at position {position} in subject '{subject}': {reason}")]
    MalformedEntry {
        subject: String,
        position: usize,
        reason: String,
    },
    #[error("All {attempted} subject queries failed")]
    AllSourcesFailed { attempted: usize },
}

impl CatalogError {
    pub fn unavailable(subject: &str, reason: impl ToString) -> Self {
        CatalogError::SourceUnavailable {
            subject: subject.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn malformed(subject: &str, position: usize, reason: &str) -> Self {
        CatalogError::MalformedEntry {
            subject: subject.to_string(),
            position,
            reason: reason.to_string(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Please fill in both fields")]
    MissingCredentials,
    #[error("Username is required")]
    MissingUsername,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password must be at least 6 characters")]
    WeakPassword,
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("AVAILABILITY_RATIO must be within [0, 1], got {0}")]
    RatioOutOfRange(f64),
    #[error("SUBJECT_LIMIT must be greater than zero")]
    ZeroLimit,
    #[error("CATALOG_SUBJECTS must name at least one subject")]
    NoSubjects,
}
