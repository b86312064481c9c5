use crate::models::book::{AvailabilityStatus, BookRecord, NO_DESCRIPTION};
use crate::models::errors::CatalogError;
use crate::models::payload::{SubjectPayload, WorkEntry};
use crate::utils::cover::cover_url;
use crate::utils::text::{join_names, non_blank};
use rand::Rng;
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;

pub const DEFAULT_AVAILABILITY_RATIO: f64 = 0.7;

/// Decides the synthetic availability of one work.
pub trait StatusStrategy: Send + Sync {
    fn decide(&self, entry: &WorkEntry) -> AvailabilityStatus;
}

#[derive(Debug, Clone, Copy)]
pub struct RandomStatus {
    available_ratio: f64,
}

impl RandomStatus {
    /// `available_ratio` is clamped to `[0, 1]`; NaN falls back to the
    /// default ratio.
    pub fn new(available_ratio: f64) -> Self {
        let available_ratio = if available_ratio.is_nan() {
            DEFAULT_AVAILABILITY_RATIO
        } else {
            available_ratio.clamp(0.0, 1.0)
        };
        Self { available_ratio }
    }

    pub fn available_ratio(&self) -> f64 {
        self.available_ratio
    }
}

impl Default for RandomStatus {
    fn default() -> Self {
        Self::new(DEFAULT_AVAILABILITY_RATIO)
    }
}

impl StatusStrategy for RandomStatus {
    fn decide(&self, _entry: &WorkEntry) -> AvailabilityStatus {
        if rand::rng().random_bool(self.available_ratio) {
            AvailabilityStatus::Available
        } else {
            AvailabilityStatus::Unavailable
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedStatus(pub AvailabilityStatus);

impl StatusStrategy for FixedStatus {
    fn decide(&self, _entry: &WorkEntry) -> AvailabilityStatus {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct NormalizedBatch {
    pub records: Vec<BookRecord>,
    pub skipped: Vec<CatalogError>,
}

#[derive(Clone)]
pub struct Normalizer {
    covers_base_url: String,
    strategy: Arc<dyn StatusStrategy>,
}

impl Normalizer {
    pub fn new(covers_base_url: &str, strategy: Arc<dyn StatusStrategy>) -> Self {
        Self {
            covers_base_url: covers_base_url.to_string(),
            strategy,
        }
    }

    /// Maps every work in `payload` to a record, in payload order. Entries
    /// that do not match the [`WorkEntry`] schema, or lack a key or title,
    /// are skipped and reported in `skipped`.
    pub fn normalize(&self, payload: &SubjectPayload, subject: &str) -> NormalizedBatch {
        let mut batch = NormalizedBatch::default();

        for (position, raw) in payload.works.iter().enumerate() {
            let entry = WorkEntry::deserialize(raw).map_err(|e| {
                CatalogError::malformed(subject, position, &format!("unreadable entry: {}", e))
            });
            match entry.and_then(|entry| self.normalize_entry(&entry, subject, position)) {
                Ok(record) => batch.records.push(record),
                Err(e) => {
                    warn!("Skipping entry: {}", e);
                    batch.skipped.push(e);
                }
            }
        }

        batch
    }

    pub fn normalize_entry(
        &self,
        entry: &WorkEntry,
        subject: &str,
        position: usize,
    ) -> Result<BookRecord, CatalogError> {
        let key = non_blank(entry.key.as_deref())
            .ok_or_else(|| CatalogError::malformed(subject, position, "missing key"))?;
        let title = non_blank(entry.title.as_deref())
            .ok_or_else(|| CatalogError::malformed(subject, position, "missing title"))?;

        let description = entry
            .first_sentence
            .as_ref()
            .and_then(|sentence| non_blank(sentence.first()))
            .unwrap_or(NO_DESCRIPTION)
            .to_string();

        let author = entry
            .authors
            .as_deref()
            .map(|authors| join_names(authors.iter().filter_map(|a| a.name.as_deref())))
            .unwrap_or_default();

        Ok(BookRecord {
            key: key.to_string(),
            title: title.to_string(),
            description,
            author,
            subject: subject.to_string(),
            image_ref: entry.cover_id.map(|id| cover_url(&self.covers_base_url, id)),
            status: self.strategy.decide(entry),
        })
    }

    /// Re-applies the field defaults to records that were already
    /// normalized. Running it twice yields the same records.
    pub fn renormalize(&self, records: Vec<BookRecord>) -> Vec<BookRecord> {
        records
            .into_iter()
            .map(|mut record| {
                if non_blank(Some(record.description.as_str())).is_none() {
                    record.description = NO_DESCRIPTION.to_string();
                }
                record.author = join_names(record.author.split(", "));
                record.image_ref = record
                    .image_ref
                    .filter(|image| !image.trim().is_empty());
                record
            })
            .collect()
    }
}
