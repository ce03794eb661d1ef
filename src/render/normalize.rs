//! Smart punctuation replacement.
//!
//! Model output routinely carries typographic quotes, dashes and bullets
//! that have no slot in the single-byte output encoding. They are mapped to
//! their plain ASCII counterparts before layout; anything else outside the
//! target set is substituted later by [`super::encoding`].

/// Fixed replacement table, applied character by character.
pub const SMART_PUNCTUATION: [(char, char); 7] = [
    ('\u{2018}', '\''), // left single quotation mark
    ('\u{2019}', '\''), // right single quotation mark
    ('\u{201C}', '"'),  // left double quotation mark
    ('\u{201D}', '"'),  // right double quotation mark
    ('\u{2013}', '-'),  // en dash
    ('\u{2014}', '-'),  // em dash
    ('\u{2022}', '*'),  // bullet
];

/// Replace smart punctuation with ASCII equivalents.
///
/// Every replacement is plain ASCII, so applying this twice is a no-op.
pub fn normalize_punctuation(text: &str) -> String {
    text.chars().map(plain_equivalent).collect()
}

fn plain_equivalent(c: char) -> char {
    SMART_PUNCTUATION
        .iter()
        .find(|(smart, _)| *smart == c)
        .map_or(c, |(_, plain)| *plain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quotes_and_dashes() {
        assert_eq!(
            normalize_punctuation("Hello \u{2014} \u{2018}world\u{2019}"),
            "Hello - 'world'"
        );
        assert_eq!(
            normalize_punctuation("\u{201C}Tenant\u{201D} \u{2013} Lessee"),
            "\"Tenant\" - Lessee"
        );
    }

    #[test]
    fn test_bullet() {
        assert_eq!(normalize_punctuation("\u{2022} Term"), "* Term");
    }

    #[test]
    fn test_other_characters_untouched() {
        let text = "Caf\u{e9} \u{a7}12 \u{1F600}";
        assert_eq!(normalize_punctuation(text), text);
    }

    #[test]
    fn test_idempotent() {
        let text = "\u{2022} \u{201C}Party\u{201D} shall \u{2014} subject to \u{2018}s.2\u{2019}";
        let once = normalize_punctuation(text);
        assert_eq!(normalize_punctuation(&once), once);
    }
}
