use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `/subjects/{subject}.json`. Only `works` is required; each work
/// stays raw until the normalizer reads it as a [`WorkEntry`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub work_count: Option<u64>,
    pub works: Vec<Value>,
}

impl SubjectPayload {
    pub fn from_entries(name: &str, entries: Vec<WorkEntry>) -> Self {
        let works: Vec<Value> = entries
            .into_iter()
            .filter_map(|entry| serde_json::to_value(entry).ok())
            .collect();
        Self {
            name: Some(name.to_string()),
            work_count: Some(works.len() as u64),
            works,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkEntry {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub first_sentence: Option<FirstSentence>,
    #[serde(default)]
    pub authors: Option<Vec<AuthorRef>>,
    #[serde(default)]
    pub cover_id: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorRef {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// The catalog has shipped all three shapes for this field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FirstSentence {
    Text(String),
    List(Vec<String>),
    Typed { value: String },
}

impl FirstSentence {
    pub fn first(&self) -> Option<&str> {
        match self {
            FirstSentence::Text(text) => Some(text.as_str()),
            FirstSentence::List(sentences) => sentences.first().map(String::as_str),
            FirstSentence::Typed { value } => Some(value.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_subject_payload() {
        let body = r#"{
            "key": "/subjects/mathematics",
            "name": "mathematics",
            "work_count": 12,
            "works": [
                {
                    "key": "/works/OL1W",
                    "title": "Flatland",
                    "first_sentence": ["I call our world Flatland."],
                    "authors": [{"key": "/authors/OL1A", "name": "Edwin A. Abbott"}],
                    "cover_id": 42
                },
                {"key": "/works/OL2W", "title": "Elements"}
            ]
        }"#;

        let payload: SubjectPayload = serde_json::from_str(body).unwrap();
        assert_eq!(payload.name.as_deref(), Some("mathematics"));
        assert_eq!(payload.works.len(), 2);
        assert_eq!(payload.works[0]["cover_id"], 42);

        let second: WorkEntry = serde_json::from_value(payload.works[1].clone()).unwrap();
        assert!(second.authors.is_none());
        assert!(second.first_sentence.is_none());
    }

    #[test]
    fn wrong_typed_entry_does_not_reject_payload() {
        let body = r#"{"works": [
            {"key": "/works/OL1W", "title": "Good"},
            {"key": "/works/OL2W", "title": 42},
            null,
            {"key": "/works/OL3W", "title": "Also good"}
        ]}"#;

        let payload: SubjectPayload = serde_json::from_str(body).unwrap();
        assert_eq!(payload.works.len(), 4);
        assert!(serde_json::from_value::<WorkEntry>(payload.works[1].clone()).is_err());
    }

    #[test]
    fn first_sentence_shapes() {
        let text: FirstSentence = serde_json::from_str(r#""Call me Ishmael.""#).unwrap();
        let list: FirstSentence = serde_json::from_str(r#"["One.", "Two."]"#).unwrap();
        let typed: FirstSentence =
            serde_json::from_str(r#"{"type": "/type/text", "value": "Typed."}"#).unwrap();
        let empty: FirstSentence = serde_json::from_str("[]").unwrap();

        assert_eq!(text.first(), Some("Call me Ishmael."));
        assert_eq!(list.first(), Some("One."));
        assert_eq!(typed.first(), Some("Typed."));
        assert_eq!(empty.first(), None);
    }

    #[test]
    fn payload_without_works_is_rejected() {
        let result: Result<SubjectPayload, _> = serde_json::from_str(r#"{"name": "art"}"#);
        assert!(result.is_err());
    }
}
