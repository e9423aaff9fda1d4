use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::domain::{AnswerKeyEntry, Flashcard, QuizQuestion};

/// The single artifact the extraction engine produces. Every field may be
/// empty; sequence order is render order and is never re-sorted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedDocument {
    pub summary: Vec<String>,
    pub tldr: String,
    pub flashcards: Vec<Flashcard>,
    pub quiz: Vec<QuizQuestion>,
    pub answer_key: Vec<AnswerKeyEntry>,
}

impl ExtractedDocument {
    /// True when no section yielded any content. Callers decide whether a
    /// fully degraded document is a user-facing failure.
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty()
            && self.tldr.is_empty()
            && self.flashcards.is_empty()
            && self.quiz.is_empty()
            && self.answer_key.is_empty()
    }
}

/// Persistence-facing record: extracted content plus the metadata a document
/// store keeps alongside it. The engine constructs this but never stores it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct StudyDocument {
    pub id: String,
    pub name: String,
    pub content: ExtractedDocument,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

impl StudyDocument {
    pub fn new_study_document(name: &str, content: ExtractedDocument) -> Self {
        StudyDocument {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            content,
            created_at: Some(Utc::now()),
            modified_at: Some(Utc::now()),
        }
    }
}
