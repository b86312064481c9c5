use crate::models::book::BookRecord;
use crate::models::errors::CatalogError;
use crate::models::responses::SubjectFailure;
use crate::services::normalize::{NormalizedBatch, Normalizer};
use crate::services::source::CatalogSource;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub run_id: Uuid,
    pub fetched_at: DateTime<Utc>,
    pub records: Vec<BookRecord>,
    pub skipped_entries: usize,
    pub diagnostics: Vec<SubjectFailure>,
}

#[derive(Debug, Clone)]
pub struct AggregationFailure {
    pub run_id: Uuid,
    pub reason: CatalogError,
    pub diagnostics: Vec<SubjectFailure>,
}

/// Outcome of one aggregation run. Partial failures still produce `Success`.
#[derive(Debug, Clone)]
pub enum AggregationResult {
    Success(CatalogSnapshot),
    Failure(AggregationFailure),
}

impl AggregationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, AggregationResult::Success(_))
    }

    pub fn records(&self) -> &[BookRecord] {
        match self {
            AggregationResult::Success(snapshot) => &snapshot.records,
            AggregationResult::Failure(_) => &[],
        }
    }

    pub fn diagnostics(&self) -> &[SubjectFailure] {
        match self {
            AggregationResult::Success(snapshot) => &snapshot.diagnostics,
            AggregationResult::Failure(failure) => &failure.diagnostics,
        }
    }
}

impl SubjectFailure {
    pub fn from_error(subject: &str, error: &CatalogError) -> Self {
        let reason = match error {
            CatalogError::SourceUnavailable { reason, .. } => reason.clone(),
            other => other.to_string(),
        };
        Self {
            subject: subject.to_string(),
            reason,
        }
    }
}

pub struct Aggregator {
    source: Arc<dyn CatalogSource>,
    normalizer: Normalizer,
    subjects: Vec<String>,
    limit: usize,
}

impl Aggregator {
    pub fn new(
        source: Arc<dyn CatalogSource>,
        normalizer: Normalizer,
        subjects: Vec<String>,
        limit: usize,
    ) -> Self {
        Self {
            source,
            normalizer,
            subjects,
            limit,
        }
    }

    async fn fetch_subject(&self, subject: &str) -> Result<NormalizedBatch, CatalogError> {
        let payload = self.source.fetch_subject(subject, self.limit).await?;
        let batch = self.normalizer.normalize(&payload, subject);
        debug!(
            "Subject {} settled with {} records ({} skipped)",
            subject,
            batch.records.len(),
            batch.skipped.len()
        );
        Ok(batch)
    }

    /// Queries every subject concurrently and concatenates the records in
    /// subject-list order, whatever order the queries settle in.
    pub async fn aggregate(&self) -> AggregationResult {
        let run_id = Uuid::new_v4();
        info!(
            "Aggregation {} fetching {} subjects (limit {})",
            run_id,
            self.subjects.len(),
            self.limit
        );

        let outcomes = join_all(
            self.subjects
                .iter()
                .map(|subject| self.fetch_subject(subject)),
        )
        .await;

        let mut records = Vec::new();
        let mut diagnostics = Vec::new();
        let mut skipped_entries = 0;
        let mut succeeded = 0;

        for (subject, outcome) in self.subjects.iter().zip(outcomes) {
            match outcome {
                Ok(batch) => {
                    succeeded += 1;
                    skipped_entries += batch.skipped.len();
                    records.extend(batch.records);
                }
                Err(e) => {
                    warn!("Aggregation {}: {}", run_id, e);
                    diagnostics.push(SubjectFailure::from_error(subject, &e));
                }
            }
        }

        if succeeded == 0 && !self.subjects.is_empty() {
            let reason = CatalogError::AllSourcesFailed {
                attempted: self.subjects.len(),
            };
            error!("Aggregation {} failed: {}", run_id, reason);
            return AggregationResult::Failure(AggregationFailure {
                run_id,
                reason,
                diagnostics,
            });
        }

        info!(
            "Aggregation {} complete: {} records from {}/{} subjects",
            run_id,
            records.len(),
            succeeded,
            self.subjects.len()
        );

        AggregationResult::Success(CatalogSnapshot {
            run_id,
            fetched_at: Utc::now(),
            records,
            skipped_entries,
            diagnostics,
        })
    }
}
