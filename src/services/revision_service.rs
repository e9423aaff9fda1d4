use std::collections::HashMap;

use crate::models::domain::{GradedQuestion, QuizQuestion, StudyDocument};

/// A quiz question pulled back for revision, with the document it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevisionQuestion {
    pub document_id: String,
    pub document_name: String,
    pub question_index: usize,
    pub question: QuizQuestion,
}

/// Grading history per document id, newest result last.
pub type AttemptOutcomes = HashMap<String, Vec<GradedQuestion>>;

pub struct RevisionService;

impl RevisionService {
    /// Picks questions that are unanswered, or whose latest answer was
    /// incorrect, across the given documents. Document order is preserved
    /// and the result is capped at `limit`.
    pub fn select_revision_questions(
        documents: &[StudyDocument],
        outcomes: &AttemptOutcomes,
        limit: usize,
    ) -> Vec<RevisionQuestion> {
        let mut selected = Vec::new();

        for document in documents {
            let graded = outcomes.get(&document.id);
            for (index, question) in document.content.quiz.iter().enumerate() {
                if selected.len() == limit {
                    return selected;
                }
                if Self::needs_revision(graded, index) {
                    selected.push(RevisionQuestion {
                        document_id: document.id.clone(),
                        document_name: document.name.clone(),
                        question_index: index,
                        question: question.clone(),
                    });
                }
            }
        }

        selected
    }

    /// Unanswered questions and questions last answered incorrectly both
    /// qualify; the newest grade for an index wins.
    fn needs_revision(graded: Option<&Vec<GradedQuestion>>, index: usize) -> bool {
        let Some(graded) = graded else {
            return true;
        };
        match graded.iter().rev().find(|g| g.question_index == index) {
            None => true,
            Some(latest) => !latest.is_correct,
        }
    }
}
