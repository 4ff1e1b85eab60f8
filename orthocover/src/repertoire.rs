//! A read-only snapshot of what a font contains.

use std::{collections::HashSet, path::Path};

use indexmap::IndexMap;
use log::{debug, warn};
use orthodata::GlyphName;

use crate::error::Error;

/// The encoded characters and glyph names of one font.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FontRepertoire {
    // in glyph order; the first glyph to claim a codepoint keeps it
    encodings: IndexMap<char, GlyphName>,
    glyph_names: HashSet<GlyphName>,
}

impl FontRepertoire {
    /// Build from glyph names and the codepoints each glyph encodes.
    pub fn from_glyphs<N, C>(glyphs: impl IntoIterator<Item = (N, C)>) -> Self
    where
        N: Into<GlyphName>,
        C: IntoIterator<Item = char>,
    {
        let mut repertoire = FontRepertoire::default();
        for (name, codepoints) in glyphs {
            let name = name.into();
            for c in codepoints {
                if let Some(prev) = repertoire.encodings.get(&c) {
                    warn!(
                        "U+{:04X} is encoded by both '{prev}' and '{name}', keeping '{prev}'",
                        c as u32
                    );
                    continue;
                }
                repertoire.encodings.insert(c, name.clone());
            }
            repertoire.glyph_names.insert(name);
        }
        repertoire
    }

    /// Read the default layer of a UFO.
    ///
    /// Only glyph layers are read; lib, kerning, features, data and images
    /// are left on disk.
    pub fn load_ufo(path: &Path) -> Result<Self, Error> {
        let request = norad::DataRequest::none().layers(true);
        let font = norad::Font::load_requested_data(path, request)?;
        let repertoire = Self::from_glyphs(
            font.default_layer()
                .iter()
                .map(|glyph| (glyph.name().as_str(), glyph.codepoints.iter())),
        );
        debug!(
            "{}: {} glyphs, {} encoded characters",
            path.display(),
            repertoire.glyph_names.len(),
            repertoire.encodings.len()
        );
        Ok(repertoire)
    }

    pub fn encoded_characters(&self) -> impl Iterator<Item = char> + '_ {
        self.encodings.keys().copied()
    }

    pub fn encodings(&self) -> impl Iterator<Item = (char, &GlyphName)> + '_ {
        self.encodings.iter().map(|(c, name)| (*c, name))
    }

    pub fn glyph_names(&self) -> &HashSet<GlyphName> {
        &self.glyph_names
    }

    pub fn contains_char(&self, c: char) -> bool {
        self.encodings.contains_key(&c)
    }

    pub fn contains_glyph(&self, name: &str) -> bool {
        self.glyph_names.contains(name)
    }
}
