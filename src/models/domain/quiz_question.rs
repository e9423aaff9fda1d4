use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One multiple-choice question as recognized in the completion text.
///
/// `correct_answer_label` is whatever the `Correct Answer:` line declared,
/// or empty when no such line appeared; it is not reconciled against the
/// per-option flags at parse time.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<QuizOption>,
    pub correct_answer_label: String,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuizOption {
    pub label: String,
    pub text: String,
    pub is_correct: bool,
}

impl QuizQuestion {
    /// The option flagged by the correctness marker glyph, if any.
    pub fn marked_option(&self) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.is_correct)
    }

    /// Label to grade against: the declared label when present, otherwise
    /// the marked option's label.
    pub fn effective_correct_label(&self) -> Option<&str> {
        if !self.correct_answer_label.is_empty() {
            Some(self.correct_answer_label.as_str())
        } else {
            self.marked_option().map(|o| o.label.as_str())
        }
    }
}
