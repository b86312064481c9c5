use crate::models::book::BookRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize, Serialize, Debug)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SubjectFailure {
    pub subject: String,
    pub reason: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RenderedBook {
    pub render_key: String,
    #[serde(flatten)]
    pub record: BookRecord,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub run_id: Uuid,
    pub fetched_at: DateTime<Utc>,
    pub count: usize,
    pub skipped_entries: usize,
    pub books: Vec<RenderedBook>,
    pub diagnostics: Vec<SubjectFailure>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogErrorResponse {
    pub error: String,
    pub diagnostics: Vec<SubjectFailure>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InteractionResponse {
    pub count: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegistrationRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SessionResponse {
    pub username: String,
    pub greeting: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
