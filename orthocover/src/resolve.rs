//! Finding the glyph name for a character.
//!
//! The coverage check compares glyph names, not codepoints: a character is
//! supported when the glyph an editor would name for it exists in the font.
//! Where that name comes from is up to the caller, see [`GlyphNameResolver`].

use std::collections::HashMap;

use orthodata::{GlyphData, GlyphName};

use crate::repertoire::FontRepertoire;

/// Maps a character to the name of the glyph that should encode it.
pub trait GlyphNameResolver {
    /// The glyph name for `c`, or `None` if there is no canonical glyph.
    fn glyph_name_for(&self, c: char) -> Option<GlyphName>;
}

impl<T: GlyphNameResolver + ?Sized> GlyphNameResolver for &T {
    fn glyph_name_for(&self, c: char) -> Option<GlyphName> {
        (**self).glyph_name_for(c)
    }
}

impl<T: GlyphNameResolver + ?Sized> GlyphNameResolver for Box<T> {
    fn glyph_name_for(&self, c: char) -> Option<GlyphName> {
        (**self).glyph_name_for(c)
    }
}

impl GlyphNameResolver for GlyphData {
    fn glyph_name_for(&self, c: char) -> Option<GlyphName> {
        self.name_for_codepoint(c as u32).cloned()
    }
}

/// Names of the `uniXXXX` / `uXXXXX` form, which exist for every codepoint.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProductionNames;

impl ProductionNames {
    pub fn name_for(c: char) -> GlyphName {
        let cp = c as u32;
        if cp <= 0xFFFF {
            GlyphName::new(format!("uni{cp:04X}"))
        } else {
            GlyphName::new(format!("u{cp:05X}"))
        }
    }
}

impl GlyphNameResolver for ProductionNames {
    fn glyph_name_for(&self, c: char) -> Option<GlyphName> {
        Some(Self::name_for(c))
    }
}

/// The name of the glyph in the font that already encodes a character.
#[derive(Clone, Debug, Default)]
pub struct FontEncodings {
    encodings: HashMap<char, GlyphName>,
}

impl FontEncodings {
    pub fn new(repertoire: &FontRepertoire) -> Self {
        FontEncodings {
            encodings: repertoire
                .encodings()
                .map(|(c, name)| (c, name.clone()))
                .collect(),
        }
    }
}

impl GlyphNameResolver for FontEncodings {
    fn glyph_name_for(&self, c: char) -> Option<GlyphName> {
        self.encodings.get(&c).cloned()
    }
}

/// Ask `first`, and `second` only if `first` has no answer.
#[derive(Clone, Debug, Default)]
pub struct Fallback<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Fallback<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Fallback { first, second }
    }
}

impl<A: GlyphNameResolver, B: GlyphNameResolver> GlyphNameResolver for Fallback<A, B> {
    fn glyph_name_for(&self, c: char) -> Option<GlyphName> {
        self.first
            .glyph_name_for(c)
            .or_else(|| self.second.glyph_name_for(c))
    }
}
