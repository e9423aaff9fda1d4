pub mod answer_key;
pub mod attempt;
pub mod document;
pub mod flashcard;
pub mod quiz_question;

pub use answer_key::AnswerKeyEntry;
pub use attempt::{GradedQuestion, QuestionAnswerInput, QuizAttempt};
pub use document::{ExtractedDocument, StudyDocument};
pub use flashcard::Flashcard;
pub use quiz_question::{QuizOption, QuizQuestion};
