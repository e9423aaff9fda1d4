use crate::models::domain::Flashcard;

/// Converts a FLASHCARDS span into question/answer pairs. Each `Q:` line is
/// paired with the next `A:` line; blank lines and stray prose between them
/// are tolerated. An orphaned question never discards its well-formed
/// neighbours.
pub fn extract_flashcards(span: Option<&str>) -> Vec<Flashcard> {
    let Some(span) = span else {
        return Vec::new();
    };

    let mut cards = Vec::new();
    let mut pending_question: Option<String> = None;

    for line in span.lines() {
        let trimmed = line.trim();

        if let Some(question) = trimmed.strip_prefix("Q:") {
            if pending_question.is_some() {
                log::debug!("dropping flashcard question with no answer");
            }
            pending_question = Some(question.trim().to_string());
        } else if let Some(answer) = trimmed.strip_prefix("A:") {
            if let Some(question) = pending_question.take() {
                let card = Flashcard {
                    question,
                    answer: answer.trim().to_string(),
                };
                if card.is_well_formed() {
                    cards.push(card);
                } else {
                    log::debug!("dropping flashcard with empty question or answer");
                }
            }
        }
    }

    cards
}
