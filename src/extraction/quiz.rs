use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::{QuizOption, QuizQuestion};

/// A new question block starts at a numbered line: "1. text" or "1) text".
static QUESTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+[.)]\s*(.*)$").expect("question pattern"));

/// Option line: single letter, period or parenthesis, option text.
static OPTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z])[.)]\s+(.+)$").expect("option pattern"));

static CORRECT_ANSWER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Correct Answer:\s*([A-Za-z])").expect("correct answer pattern"));

/// Glyphs that flag an option line as the correct one.
const CORRECT_MARKERS: [char; 2] = ['✅', '✓'];

/// Markers introducing the per-question explanation line.
const EXPLANATION_MARKERS: [&str; 2] = ["Why this is correct:", "Explanation:"];

/// Converts a QUIZ span into multiple-choice question records. A block is
/// retained only with a non-empty question and at least `min_options`
/// recognized options; otherwise the whole block is dropped and its
/// siblings kept.
pub fn extract_quiz(span: Option<&str>, min_options: usize) -> Vec<QuizQuestion> {
    let Some(span) = span else {
        return Vec::new();
    };

    let mut blocks: Vec<Vec<&str>> = Vec::new();
    for line in span.lines() {
        if QUESTION_RE.is_match(line.trim()) {
            blocks.push(vec![line]);
        } else if let Some(current) = blocks.last_mut() {
            current.push(line);
        }
        // lines before the first numbered question are not quiz content
    }

    blocks
        .iter()
        .filter_map(|block| parse_question_block(block, min_options))
        .collect()
}

fn parse_question_block(lines: &[&str], min_options: usize) -> Option<QuizQuestion> {
    let mut question = String::new();
    let mut options: Vec<QuizOption> = Vec::new();
    let mut correct_answer_label = String::new();
    let mut explanation = String::new();

    if let Some(first) = lines.first() {
        if let Some(caps) = QUESTION_RE.captures(first.trim()) {
            question = caps[1].trim().to_string();
        }
    }

    for line in lines.iter().skip(1) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(caps) = CORRECT_ANSWER_RE.captures(trimmed) {
            correct_answer_label = caps[1].to_uppercase();
            continue;
        }

        if let Some(text) = EXPLANATION_MARKERS
            .iter()
            .find_map(|marker| trimmed.strip_prefix(marker))
        {
            explanation = text.trim().to_string();
            continue;
        }

        // The correctness marker may sit anywhere on an option line and is
        // stripped before the option itself is recognized.
        let is_correct = CORRECT_MARKERS.iter().any(|m| trimmed.contains(*m));
        let cleaned: String = if is_correct {
            trimmed
                .chars()
                .filter(|c| !CORRECT_MARKERS.contains(c))
                .collect()
        } else {
            trimmed.to_string()
        };

        if let Some(caps) = OPTION_RE.captures(cleaned.trim()) {
            options.push(QuizOption {
                label: caps[1].to_uppercase(),
                text: caps[2].trim().to_string(),
                is_correct,
            });
            continue;
        }

        // A bare "1." marker pushes the question text onto the next line.
        if question.is_empty() {
            question = trimmed.to_string();
        }
    }

    if question.is_empty() || options.len() < min_options {
        log::debug!(
            "dropping quiz block with {} options (minimum {})",
            options.len(),
            min_options
        );
        return None;
    }

    Some(QuizQuestion {
        question,
        options,
        correct_answer_label,
        explanation,
    })
}
