//! Checking one orthography against a font.

use std::{collections::HashSet, fmt::Display};

use orthodata::{chars::DOTTED_CIRCLE, GlyphName, OrthographyRecord};
use serde::{Deserialize, Serialize};

use crate::{index::CharacterIndex, resolve::GlyphNameResolver};

/// How a mark is shown to a user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MarkDisplay {
    /// Marks sit on a dotted circle, so they are visible on their own.
    #[default]
    DottedCircle,
    /// The bare character.
    Raw,
}

/// A character an orthography requires, and whether it is one of its marks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrthoChar {
    pub ch: char,
    pub is_mark: bool,
}

impl OrthoChar {
    pub fn base(ch: char) -> Self {
        OrthoChar { ch, is_mark: false }
    }

    pub fn mark(ch: char) -> Self {
        OrthoChar { ch, is_mark: true }
    }

    pub fn display(&self, mode: MarkDisplay) -> String {
        match (mode, self.is_mark) {
            (MarkDisplay::DottedCircle, true) => with_dotted_circle(self.ch),
            _ => self.ch.to_string(),
        }
    }

    /// Read back a character written by [`OrthoChar::display`].
    pub fn from_display(s: &str) -> Option<Self> {
        let raw = strip_dotted_circle(s);
        let mut chars = raw.chars();
        let ch = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Some(OrthoChar {
            ch,
            is_mark: raw.len() != s.len(),
        })
    }
}

impl Display for OrthoChar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display(MarkDisplay::DottedCircle))
    }
}

/// `c` prefixed with U+25CC DOTTED CIRCLE.
pub fn with_dotted_circle(c: char) -> String {
    [DOTTED_CIRCLE, c].into_iter().collect()
}

/// Undo [`with_dotted_circle`].
///
/// Only a two character string starting with a dotted circle is changed, so
/// a lone dotted circle or a longer cluster comes back as is.
pub fn strip_dotted_circle(s: &str) -> &str {
    let mut chars = s.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(DOTTED_CIRCLE), Some(_), None) => &s[DOTTED_CIRCLE.len_utf8()..],
        _ => s,
    }
}

/// The result of checking one orthography.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub supported: Vec<OrthoChar>,
    pub unsupported: Vec<OrthoChar>,
}

impl Evaluation {
    pub fn is_complete(&self) -> bool {
        self.unsupported.is_empty()
    }
}

/// Every character an orthography needs, without duplicates.
///
/// Base characters come first in codepoint order, followed by marks in the
/// order the orthography lists them. A character listed as a mark is flagged
/// as one even if it also appears among the base characters.
pub fn required_chars(ortho: &OrthographyRecord) -> Vec<OrthoChar> {
    let mut base = ortho.base.clone();
    base.sort_unstable();
    base.dedup();

    let mut seen = HashSet::new();
    base.into_iter()
        .chain(ortho.marks.iter().copied())
        .filter(|c| seen.insert(*c))
        .map(|ch| OrthoChar {
            ch,
            is_mark: ortho.marks.contains(&ch),
        })
        .collect()
}

/// Split the characters `ortho` requires by whether the font has their glyph.
pub fn evaluate<R: GlyphNameResolver>(
    ortho: &OrthographyRecord,
    glyph_names: &HashSet<GlyphName>,
    index: &mut CharacterIndex<R>,
) -> Evaluation {
    let mut result = Evaluation::default();
    for c in required_chars(ortho) {
        let present = index
            .resolve(c.ch)
            .is_some_and(|name| glyph_names.contains(&name));
        if present {
            result.supported.push(c);
        } else {
            result.unsupported.push(c);
        }
    }
    result
}
