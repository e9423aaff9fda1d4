use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

impl Flashcard {
    /// A card with an empty question or answer cannot be rendered and must
    /// not be retained.
    pub fn is_well_formed(&self) -> bool {
        !self.question.is_empty() && !self.answer.is_empty()
    }
}
