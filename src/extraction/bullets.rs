/// Glyphs recognized at the start of a summary line.
const BULLET_GLYPHS: [char; 2] = ['•', '*'];

/// Converts a SUMMARY span into ordered point strings. Lines without a
/// bullet glyph, and bullets that are empty after stripping, are dropped.
pub fn extract_bullets(span: Option<&str>) -> Vec<String> {
    let Some(span) = span else {
        return Vec::new();
    };

    span.lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            let glyph = BULLET_GLYPHS.iter().find(|g| trimmed.starts_with(**g))?;
            let point = trimmed[glyph.len_utf8()..].trim();
            (!point.is_empty()).then(|| point.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_glyph_and_whitespace() {
        let points = extract_bullets(Some("• Cats are mammals\n•   Cats purr  "));

        assert_eq!(points, vec!["Cats are mammals", "Cats purr"]);
    }

    #[test]
    fn accepts_asterisk_bullets() {
        let points = extract_bullets(Some("* first\n* second"));

        assert_eq!(points, vec!["first", "second"]);
    }

    #[test]
    fn skips_lines_without_a_bullet() {
        let points = extract_bullets(Some("intro line\n• real point\ntrailing prose"));

        assert_eq!(points, vec!["real point"]);
    }

    #[test]
    fn drops_bullets_that_are_empty_after_stripping() {
        let points = extract_bullets(Some("•\n•   \n• kept"));

        assert_eq!(points, vec!["kept"]);
    }

    #[test]
    fn absent_span_yields_empty_sequence() {
        assert!(extract_bullets(None).is_empty());
    }
}
