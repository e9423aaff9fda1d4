use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::{AnswerKeyEntry, QuizQuestion};

/// Answer key line: question number, period, single answer letter.
static KEY_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d+)\.\s*([A-Za-z])\s*$").expect("answer key pattern"));

/// Converts an ANSWERS span into (question number, answer label) entries.
/// Non-matching lines are silently skipped.
pub fn extract_answer_key(span: Option<&str>) -> Vec<AnswerKeyEntry> {
    let Some(span) = span else {
        return Vec::new();
    };

    span.lines()
        .filter_map(|line| {
            let caps = KEY_LINE_RE.captures(line)?;
            let question_number = caps[1].parse().ok()?;
            Some(AnswerKeyEntry {
                question_number,
                answer_label: caps[2].to_uppercase(),
            })
        })
        .collect()
}

/// A disagreement between the quiz extractor's own notion of the correct
/// answer and the trailing answer key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerKeyMismatch {
    pub question_number: u32,
    pub declared_label: Option<String>,
    pub key_label: String,
}

/// Reconciles the answer key against the extracted quiz. Key numbers are
/// 1-based positions in quiz order; entries pointing past the end of the
/// quiz report `declared_label = None`. This pass is opt-in for callers and
/// is never run during assembly.
pub fn cross_check(quiz: &[QuizQuestion], key: &[AnswerKeyEntry]) -> Vec<AnswerKeyMismatch> {
    key.iter()
        .filter_map(|entry| {
            let question = entry
                .question_number
                .checked_sub(1)
                .and_then(|i| quiz.get(i as usize));

            let declared = match question {
                Some(q) => {
                    let declared = q.effective_correct_label();
                    if declared == Some(entry.answer_label.as_str()) {
                        return None;
                    }
                    declared.map(str::to_string)
                }
                None => None,
            };

            Some(AnswerKeyMismatch {
                question_number: entry.question_number,
                declared_label: declared,
                key_label: entry.answer_label.clone(),
            })
        })
        .collect()
}
