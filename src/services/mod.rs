pub mod quiz_attempt_service;
pub mod revision_service;

pub use quiz_attempt_service::QuizAttemptService;
pub use revision_service::{AttemptOutcomes, RevisionQuestion, RevisionService};
