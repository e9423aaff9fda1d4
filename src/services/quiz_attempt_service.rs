use chrono::Utc;
use uuid::Uuid;

use crate::errors::{StudyError, StudyResult};
use crate::models::domain::{GradedQuestion, QuestionAnswerInput, QuizAttempt, QuizQuestion};

pub struct QuizAttemptService;

impl QuizAttemptService {
    /// Grade submitted answers against a document's extracted quiz.
    pub fn grade_attempt(
        document_id: &str,
        quiz: &[QuizQuestion],
        submitted_answers: &[QuestionAnswerInput],
        required_score: i16,
    ) -> StudyResult<QuizAttempt> {
        let mut total_points: i16 = 0;
        let mut question_results = Vec::new();

        for submitted in submitted_answers {
            let question = quiz.get(submitted.question_index).ok_or_else(|| {
                StudyError::NotFound(format!(
                    "question index {} out of range",
                    submitted.question_index
                ))
            })?;

            let (is_correct, points) = Self::grade_question(question, &submitted.selected_label);
            total_points += points;

            question_results.push(GradedQuestion {
                question_index: submitted.question_index,
                selected_label: submitted.selected_label.clone(),
                is_correct,
            });
        }

        Ok(QuizAttempt {
            id: Uuid::new_v4().to_string(),
            document_id: document_id.to_string(),
            points_earned: total_points,
            total_possible: quiz.len() as i16,
            passed: total_points >= required_score,
            question_results,
            submitted_at: Utc::now(),
        })
    }

    /// A selection is correct when it names the question's correct option.
    /// Unknown labels grade incorrect rather than failing the attempt.
    fn grade_question(question: &QuizQuestion, selected_label: &str) -> (bool, i16) {
        let is_correct = question
            .effective_correct_label()
            .is_some_and(|label| label.eq_ignore_ascii_case(selected_label));
        (is_correct, if is_correct { 1 } else { 0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;

    fn answer(question_index: usize, selected_label: &str) -> QuestionAnswerInput {
        QuestionAnswerInput {
            question_index,
            selected_label: selected_label.to_string(),
        }
    }

    #[test]
    fn grades_correct_and_incorrect_selections() {
        let quiz = vec![
            fixtures::quiz_question("First?", "B"),
            fixtures::quiz_question("Second?", "A"),
        ];

        let attempt = QuizAttemptService::grade_attempt(
            "doc-1",
            &quiz,
            &[answer(0, "B"), answer(1, "C")],
            2,
        )
        .expect("grading should succeed");

        assert_eq!(attempt.points_earned, 1);
        assert_eq!(attempt.total_possible, 2);
        assert!(!attempt.passed);
        assert!(attempt.question_results[0].is_correct);
        assert!(!attempt.question_results[1].is_correct);
    }

    #[test]
    fn passing_score_marks_attempt_passed() {
        let quiz = vec![fixtures::quiz_question("Only?", "A")];

        let attempt = QuizAttemptService::grade_attempt("doc-1", &quiz, &[answer(0, "a")], 1)
            .expect("grading should succeed");

        assert!(attempt.passed);
    }

    #[test]
    fn out_of_range_question_index_is_not_found() {
        let quiz = vec![fixtures::quiz_question("Only?", "A")];

        let result = QuizAttemptService::grade_attempt("doc-1", &quiz, &[answer(3, "A")], 1);

        assert!(matches!(result, Err(StudyError::NotFound(_))));
    }

    #[test]
    fn unknown_label_grades_incorrect() {
        let quiz = vec![fixtures::quiz_question("Only?", "A")];

        let attempt = QuizAttemptService::grade_attempt("doc-1", &quiz, &[answer(0, "Z")], 1)
            .expect("grading should succeed");

        assert_eq!(attempt.points_earned, 0);
    }
}
