pub mod answer_key;
pub mod assembler;
pub mod bullets;
pub mod flashcards;
pub mod quiz;
pub mod sections;

pub use assembler::{extract_document, ExtractionEngine};
pub use sections::{AnchorDef, SectionKind, SECTION_ANCHORS};
