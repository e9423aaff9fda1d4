use crate::{
    config::ExtractionConfig,
    extraction::{answer_key, bullets, flashcards, quiz, sections, sections::SectionKind},
    models::domain::ExtractedDocument,
};

/// Runs the section splitter and the per-section extractors over one raw
/// completion. Malformed content degrades to empty fields; extraction never
/// fails. Holds no state beyond its configuration, so one engine may be
/// shared across threads.
#[derive(Clone, Debug, Default)]
pub struct ExtractionEngine {
    config: ExtractionConfig,
}

impl ExtractionEngine {
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    pub fn extract(&self, raw: &str) -> ExtractedDocument {
        let spans = sections::split_sections(raw);
        if spans.is_empty() {
            log::warn!("no recognizable section anchors in completion text");
        }

        let span = |kind: SectionKind| spans.get(&kind).map(String::as_str);

        let document = ExtractedDocument {
            summary: bullets::extract_bullets(span(SectionKind::Summary)),
            tldr: span(SectionKind::Tldr)
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
            flashcards: flashcards::extract_flashcards(span(SectionKind::Flashcards)),
            quiz: quiz::extract_quiz(span(SectionKind::Quiz), self.config.min_quiz_options),
            answer_key: answer_key::extract_answer_key(span(SectionKind::Answers)),
        };

        log::debug!(
            "extracted {} summary points, {} flashcards, {} quiz questions, {} answer key entries",
            document.summary.len(),
            document.flashcards.len(),
            document.quiz.len(),
            document.answer_key.len()
        );

        document
    }
}

/// Extracts a document with the default configuration.
pub fn extract_document(raw: &str) -> ExtractedDocument {
    ExtractionEngine::default().extract(raw)
}
