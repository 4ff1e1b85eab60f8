//! Memoized character to glyph name lookups.

use std::collections::HashMap;

use log::{debug, trace};
use orthodata::GlyphName;

use crate::resolve::GlyphNameResolver;

/// Caches what a [`GlyphNameResolver`] says about each character, both ways.
///
/// The resolver is asked about a character at most once until [`reset`] is
/// called. Characters with no glyph name are cached too, and are simply
/// never supported.
///
/// [`reset`]: CharacterIndex::reset
#[derive(Debug)]
pub struct CharacterIndex<R> {
    resolver: R,
    by_char: HashMap<char, Option<GlyphName>>,
    by_name: HashMap<GlyphName, char>,
}

impl<R: GlyphNameResolver> CharacterIndex<R> {
    pub fn new(resolver: R) -> Self {
        CharacterIndex {
            resolver,
            by_char: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// The glyph name for `c`, asking the resolver on first use.
    pub fn resolve(&mut self, c: char) -> Option<GlyphName> {
        if let Some(cached) = self.by_char.get(&c) {
            return cached.clone();
        }
        let name = self.resolver.glyph_name_for(c);
        match &name {
            Some(name) => {
                trace!("U+{:04X} => {name}", c as u32);
                // one character per name; the first one recorded keeps it
                if let Some(prev) = self.by_name.get(name) {
                    debug!(
                        "'{name}' already stands for U+{:04X}, not U+{:04X}",
                        *prev as u32, c as u32
                    );
                } else {
                    self.by_name.insert(name.clone(), c);
                }
            }
            None => debug!("No glyph name for U+{:04X}", c as u32),
        }
        self.by_char.insert(c, name.clone());
        name
    }

    /// The glyph name already cached for `c`, without asking the resolver.
    pub fn cached_name(&self, c: char) -> Option<&GlyphName> {
        self.by_char.get(&c).and_then(Option::as_ref)
    }

    /// The character a glyph name was resolved from, if any.
    pub fn char_for_glyph(&self, name: &str) -> Option<char> {
        self.by_name.get(name).copied()
    }

    /// Number of characters looked up so far.
    pub fn len(&self) -> usize {
        self.by_char.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_char.is_empty()
    }

    /// Forget everything, e.g. because the font changed.
    pub fn reset(&mut self) {
        self.by_char.clear();
        self.by_name.clear();
    }

    /// Swap in a new resolver; this also clears the cache.
    pub fn set_resolver(&mut self, resolver: R) {
        self.resolver = resolver;
        self.reset();
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }
}
