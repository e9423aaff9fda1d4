/// Instruction block sent to the completion service. The section headers it
/// requests are the exact anchor tokens the extraction engine recognizes;
/// changing one side means changing the other.
pub const STUDY_MATERIAL_PROMPT: &str = "Analyze the following text and provide five separate sections:
1. Bullet-point summary of key points (start each point with '•')
2. A simple TL;DR explanation
3. 5-6 flashcard-style Q&A pairs (format as 'Q:' and 'A:')
4. A multiple-choice quiz of 4-5 questions. Number each question, give four lettered options (A. B. C. D.), mark the correct option with a ✅, then add a 'Correct Answer:' line with the letter and a 'Why this is correct:' line with a short explanation
5. An answer key listing each question number and its correct letter

Please format your response exactly like this:
SUMMARY:
• point 1
• point 2
etc.

TLDR:
your tldr text here

FLASHCARDS:
Q: question 1
A: answer 1
Q: question 2
A: answer 2
etc.

QUIZ TIME! Answer the following questions:
1. question 1
A. option one
B. option two ✅
C. option three
D. option four
Correct Answer: B
Why this is correct: short explanation here
etc.

ANSWERS:
1. B
2. D
etc.

Text to analyze: ";

/// Builds the full prompt for one document-processing request.
pub fn build_study_material_prompt(source_text: &str) -> String {
    format!("{}{}", STUDY_MATERIAL_PROMPT, source_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::sections::SECTION_ANCHORS;

    #[test]
    fn prompt_requests_every_anchor_the_splitter_recognizes() {
        for anchor in SECTION_ANCHORS {
            let found = STUDY_MATERIAL_PROMPT
                .lines()
                .any(|line| line.starts_with(anchor.token));
            assert!(found, "prompt never asks for anchor {}", anchor.token);
        }
    }

    #[test]
    fn build_prompt_appends_source_text() {
        let prompt = build_study_material_prompt("Cats are mammals.");

        assert!(prompt.starts_with("Analyze the following text"));
        assert!(prompt.ends_with("Text to analyze: Cats are mammals."));
    }
}
