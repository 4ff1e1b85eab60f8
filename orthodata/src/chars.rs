//! Splitting orthography character strings into base characters and marks.

use icu_properties::{props::GeneralCategory, CodePointMapData};

/// U+25CC DOTTED CIRCLE, the placeholder base used to display a lone mark.
pub const DOTTED_CIRCLE: char = '\u{25CC}';

/// Whether `c` is a combining mark (general category Mn, Mc or Me).
pub fn is_mark(c: char) -> bool {
    matches!(
        CodePointMapData::<GeneralCategory>::new().get(c),
        GeneralCategory::NonspacingMark
            | GeneralCategory::SpacingMark
            | GeneralCategory::EnclosingMark
    )
}

/// The characters of one orthography, split by role.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SplitChars {
    pub base: Vec<char>,
    pub marks: Vec<char>,
}

/// Split whitespace separated `base` and `marks` strings into codepoints.
///
/// A base token may be a cluster such as "ə̀"; its combining marks are moved to
/// the mark list. Dotted circles are placeholders and are dropped. Both lists
/// keep the order in which characters first appear.
pub fn split_base_and_marks(base: &str, marks: &str) -> SplitChars {
    let mut out = SplitChars::default();
    for c in base.chars().filter(|c| !c.is_whitespace()) {
        if c == DOTTED_CIRCLE {
            continue;
        }
        if is_mark(c) {
            push_unique(&mut out.marks, c);
        } else {
            push_unique(&mut out.base, c);
        }
    }
    for c in marks
        .chars()
        .filter(|c| !c.is_whitespace() && *c != DOTTED_CIRCLE)
    {
        push_unique(&mut out.marks, c);
    }
    out
}

/// Codepoints of a whitespace separated list, in order, without duplicates.
pub fn split_chars(s: &str) -> Vec<char> {
    let mut out = Vec::new();
    for c in s.chars().filter(|c| !c.is_whitespace()) {
        push_unique(&mut out, c);
    }
    out
}

fn push_unique(list: &mut Vec<char>, c: char) {
    if !list.contains(&c) {
        list.push(c);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::acute('\u{0301}', true)]
    #[case::cedilla('\u{0327}', true)]
    #[case::devanagari_vowel_sign_aa('\u{093E}', true)]
    #[case::latin_a('a', false)]
    #[case::modifier_letter('\u{02BC}', false)]
    #[case::dotted_circle(DOTTED_CIRCLE, false)]
    fn mark_detection(#[case] c: char, #[case] expected: bool) {
        assert_eq!(is_mark(c), expected, "U+{:04X}", c as u32);
    }

    #[test]
    fn clusters_are_split() {
        let split = split_base_and_marks("a b ə\u{0300} c a", "\u{25CC}\u{0301} \u{25CC}\u{0300}");
        assert_eq!(
            split,
            SplitChars {
                base: vec!['a', 'b', 'ə', 'c'],
                marks: vec!['\u{0300}', '\u{0301}'],
            }
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(split_base_and_marks("", ""), SplitChars::default());
        assert!(split_chars("  ").is_empty());
    }
}
