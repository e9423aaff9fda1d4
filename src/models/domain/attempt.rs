use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of grading one set of submitted answers against a document's quiz.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizAttempt {
    pub id: String,
    pub document_id: String,
    pub points_earned: i16,
    pub total_possible: i16,
    pub passed: bool,
    pub question_results: Vec<GradedQuestion>,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct GradedQuestion {
    pub question_index: usize,
    pub selected_label: String,
    pub is_correct: bool,
}

/// One submitted answer: which question, and the option letter the user
/// picked.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionAnswerInput {
    pub question_index: usize,
    pub selected_label: String,
}
