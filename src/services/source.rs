use crate::models::errors::CatalogError;
use crate::models::payload::SubjectPayload;
use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

pub const CATALOG_BASE_URL: &str = "https://openlibrary.org";

#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// One outbound query for `subject`, capped at `limit` works.
    async fn fetch_subject(&self, subject: &str, limit: usize)
        -> Result<SubjectPayload, CatalogError>;
}

pub struct OpenLibrarySource {
    client: Client,
    base_url: String,
}

impl OpenLibrarySource {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.to_string(),
        }
    }

    /// `{base}/subjects/{subject}.json?limit={limit}`, with the subject
    /// percent-encoded as a single path segment.
    pub fn subject_url(&self, subject: &str, limit: usize) -> Result<Url, CatalogError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| CatalogError::unavailable(subject, e))?;
        url.path_segments_mut()
            .map_err(|_| CatalogError::unavailable(subject, "catalog base URL cannot hold a path"))?
            .pop_if_empty()
            .push("subjects")
            .push(&format!("{}.json", subject));
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());
        Ok(url)
    }
}

#[async_trait]
impl CatalogSource for OpenLibrarySource {
    async fn fetch_subject(
        &self,
        subject: &str,
        limit: usize,
    ) -> Result<SubjectPayload, CatalogError> {
        let url = self.subject_url(subject, limit)?;
        debug!("Fetching subject {} from {}", subject, url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::unavailable(subject, e))?;

        if !response.status().is_success() {
            return Err(CatalogError::unavailable(
                subject,
                format!("catalog responded with status {}", response.status()),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::unavailable(subject, e))?;

        serde_json::from_str(&body)
            .map_err(|e| CatalogError::unavailable(subject, format!("unparseable payload: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_url_carries_limit() {
        let source = OpenLibrarySource::new("https://openlibrary.org/");
        assert_eq!(
            source.subject_url("computer_science", 5).unwrap().as_str(),
            "https://openlibrary.org/subjects/computer_science.json?limit=5"
        );
    }

    #[test]
    fn subject_is_a_single_encoded_segment() {
        let source = OpenLibrarySource::new("https://openlibrary.org");
        assert_eq!(
            source.subject_url("art/music?x#y", 5).unwrap().as_str(),
            "https://openlibrary.org/subjects/art%2Fmusic%3Fx%23y.json?limit=5"
        );
    }

    #[test]
    fn keeps_base_path_prefix() {
        let source = OpenLibrarySource::new("http://localhost:9000/mirror/");
        assert_eq!(
            source.subject_url("law", 2).unwrap().as_str(),
            "http://localhost:9000/mirror/subjects/law.json?limit=2"
        );
    }

    #[test]
    fn unparseable_base_url_is_source_unavailable() {
        let source = OpenLibrarySource::new("not a url");
        assert!(matches!(
            source.subject_url("law", 2),
            Err(CatalogError::SourceUnavailable { .. })
        ));
    }
}
