use std::collections::HashMap;

/// The fixed set of sections a completion is expected to carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Summary,
    Tldr,
    Flashcards,
    Quiz,
    Answers,
}

/// A literal marker token expected at the start of a line, delimiting the
/// span that follows it.
#[derive(Clone, Copy, Debug)]
pub struct AnchorDef {
    pub kind: SectionKind,
    pub token: &'static str,
}

/// Anchor table in priority order. A span runs until the next recognized
/// anchor, whichever section that is; adding or reordering a section is a
/// change to this table, not to the scan below.
pub const SECTION_ANCHORS: &[AnchorDef] = &[
    AnchorDef {
        kind: SectionKind::Summary,
        token: "SUMMARY",
    },
    AnchorDef {
        kind: SectionKind::Tldr,
        token: "TLDR",
    },
    AnchorDef {
        kind: SectionKind::Flashcards,
        token: "FLASHCARDS",
    },
    AnchorDef {
        kind: SectionKind::Quiz,
        token: "QUIZ",
    },
    AnchorDef {
        kind: SectionKind::Answers,
        token: "ANSWERS",
    },
];

/// Partitions raw completion text into named spans. Anchors are matched
/// case-sensitively; a missing anchor simply yields no entry. No anchors at
/// all yields an empty map, never an error.
pub fn split_sections(raw: &str) -> HashMap<SectionKind, String> {
    let mut sections: HashMap<SectionKind, String> = HashMap::new();
    let mut current: Option<SectionKind> = None;

    for line in raw.lines() {
        if let Some((kind, remainder)) = match_anchor(line) {
            current = Some(kind);
            let span = sections.entry(kind).or_default();
            let remainder = remainder.trim();
            if !remainder.is_empty() {
                push_line(span, remainder);
            }
            continue;
        }

        if let Some(kind) = current {
            if let Some(span) = sections.get_mut(&kind) {
                push_line(span, line);
            }
        }
    }

    sections
}

/// Matches a line against the anchor table. The token must sit at the very
/// start of the line and be followed by end-of-line, a colon or whitespace,
/// so `SUMMARYX` never matches while `QUIZ TIME!` does. Returns the kind
/// and the remainder of the line with a leading colon stripped.
fn match_anchor(line: &str) -> Option<(SectionKind, &str)> {
    for anchor in SECTION_ANCHORS {
        if let Some(rest) = line.strip_prefix(anchor.token) {
            let boundary_ok = match rest.chars().next() {
                None => true,
                Some(c) => c == ':' || c.is_whitespace(),
            };
            if boundary_ok {
                return Some((anchor.kind, rest.strip_prefix(':').unwrap_or(rest)));
            }
        }
    }
    None
}

fn push_line(span: &mut String, line: &str) {
    if !span.is_empty() {
        span.push('\n');
    }
    span.push_str(line);
}
