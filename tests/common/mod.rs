#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use catalog_service::models::book::AvailabilityStatus;
use catalog_service::models::errors::CatalogError;
use catalog_service::models::payload::{AuthorRef, SubjectPayload, WorkEntry};
use catalog_service::services::aggregate::Aggregator;
use catalog_service::services::normalize::{FixedStatus, Normalizer};
use catalog_service::services::source::CatalogSource;
use catalog_service::utils::cover::COVERS_BASE_URL;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub enum Reply {
    Works(Vec<WorkEntry>),
    Fail,
    Delayed(Duration, Vec<WorkEntry>),
}

#[derive(Default)]
pub struct StubSource {
    replies: HashMap<String, Reply>,
    calls: AtomicUsize,
}

impl StubSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, subject: &str, reply: Reply) -> Self {
        self.replies.insert(subject.to_string(), reply);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for StubSource {
    async fn fetch_subject(
        &self,
        subject: &str,
        limit: usize,
    ) -> Result<SubjectPayload, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let works = match self.replies.get(subject) {
            Some(Reply::Works(works)) => works.clone(),
            Some(Reply::Delayed(delay, works)) => {
                tokio::time::sleep(*delay).await;
                works.clone()
            }
            Some(Reply::Fail) | None => {
                return Err(CatalogError::unavailable(subject, "connection refused"))
            }
        };
        Ok(SubjectPayload::from_entries(
            subject,
            works.into_iter().take(limit).collect(),
        ))
    }
}

pub fn work(key: &str, title: &str) -> WorkEntry {
    WorkEntry {
        key: Some(key.to_string()),
        title: Some(title.to_string()),
        first_sentence: None,
        authors: Some(vec![AuthorRef {
            key: None,
            name: Some("Anonymous".to_string()),
        }]),
        cover_id: None,
    }
}

pub fn works(prefix: &str, count: usize) -> Vec<WorkEntry> {
    (0..count)
        .map(|i| work(&format!("/works/{}{}W", prefix, i), &format!("{} {}", prefix, i)))
        .collect()
}

pub fn subjects(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

pub fn aggregator(source: Arc<StubSource>, names: &[&str], limit: usize) -> Aggregator {
    let normalizer = Normalizer::new(
        COVERS_BASE_URL,
        Arc::new(FixedStatus(AvailabilityStatus::Available)),
    );
    Aggregator::new(source, normalizer, subjects(names), limit)
}

#[derive(Deserialize)]
struct LimitParams {
    limit: usize,
}

async fn subject_listing(Path(file): Path<String>, Query(params): Query<LimitParams>) -> Response {
    let subject = file.strip_suffix(".json").unwrap_or(&file).to_string();
    match subject.as_str() {
        "broken" => (StatusCode::INTERNAL_SERVER_ERROR, "upstream error").into_response(),
        "garbled" => (StatusCode::OK, "<html>not json</html>").into_response(),
        _ => {
            let works: Vec<_> = (0..params.limit)
                .map(|i| {
                    json!({
                        "key": format!("/works/OL{}W", i),
                        "title": format!("{} volume {}", subject, i),
                        "authors": [{"key": "/authors/OL1A", "name": "Someone"}],
                        "cover_id": 1000 + i
                    })
                })
                .collect();
            axum::Json(json!({ "name": subject, "work_count": works.len(), "works": works }))
                .into_response()
        }
    }
}

/// Serves `/subjects/{subject}.json` on an ephemeral local port. `broken`
/// answers 500 and `garbled` answers with a non-JSON body.
pub async fn spawn_catalog_stub() -> SocketAddr {
    let app = Router::new().route("/subjects/:file", get(subject_listing));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}
