//! What a host editor needs to act on a selection of coverage rows.
//!
//! Nothing here touches a font; these functions only work out which glyphs
//! to add or select, and the text to show for them.

use indexmap::IndexSet;
use orthodata::{GlyphName, Script};
use url::form_urlencoded;

use crate::{
    coverage::CoverageResult,
    evaluate::MarkDisplay,
    export::{selected_missing, selected_supported},
    index::CharacterIndex,
    repertoire::FontRepertoire,
    resolve::{GlyphNameResolver, ProductionNames},
};

const WIKIPEDIA_SEARCH: &str = "https://en.wikipedia.org/w/index.php";

/// A glyph the font should gain to cover a missing character.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NewGlyph {
    pub name: GlyphName,
    pub codepoint: char,
}

/// Glyphs to add so the selected rows are no longer missing anything.
///
/// A character already encoded in the font, or whose glyph name is already
/// taken, is left out. Characters without a known glyph name get a
/// production name.
pub fn glyphs_to_add<R: GlyphNameResolver>(
    rows: &[&CoverageResult],
    repertoire: &FontRepertoire,
    index: &mut CharacterIndex<R>,
) -> Vec<NewGlyph> {
    let mut new_glyphs = IndexSet::new();
    for row in rows {
        for c in &row.missing {
            if repertoire.contains_char(c.ch) {
                continue;
            }
            let name = index
                .resolve(c.ch)
                .unwrap_or_else(|| ProductionNames::name_for(c.ch));
            if repertoire.contains_glyph(name.as_str()) {
                continue;
            }
            new_glyphs.insert(NewGlyph {
                name,
                codepoint: c.ch,
            });
        }
    }
    new_glyphs.into_iter().collect()
}

/// Names of the glyphs backing the supported characters of the selection.
pub fn supported_glyph_names<R: GlyphNameResolver>(
    rows: &[&CoverageResult],
    index: &mut CharacterIndex<R>,
) -> Vec<GlyphName> {
    selected_supported(rows, MarkDisplay::Raw)
        .into_iter()
        .filter_map(|c| index.resolve(c.ch))
        .collect()
}

/// Names of the glyphs the selected rows are missing, as far as known.
pub fn missing_glyph_names<R: GlyphNameResolver>(
    rows: &[&CoverageResult],
    index: &mut CharacterIndex<R>,
) -> Vec<GlyphName> {
    selected_missing(rows, MarkDisplay::Raw)
        .into_iter()
        .filter_map(|c| index.resolve(c.ch))
        .collect()
}

/// Edit-view text showing each glyph by name, e.g. "/a /b ".
pub fn tab_text<'a>(names: impl IntoIterator<Item = &'a GlyphName>) -> String {
    names.into_iter().map(|name| format!("/{name} ")).collect()
}

/// Title for a tab showing the supported glyphs of the selected languages.
pub fn supported_tab_title(rows: &[&CoverageResult]) -> String {
    let names: Vec<_> = rows.iter().map(|row| row.name.as_str()).collect();
    format!("Supported for {}", names.join(", "))
}

pub fn language_lookup_url(language: &str) -> String {
    wikipedia_search(&format!("{language} language"))
}

pub fn script_lookup_url(script: &Script) -> String {
    wikipedia_search(&format!("{script} script"))
}

fn wikipedia_search(query: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("search", query)
        .finish();
    format!("{WIKIPEDIA_SEARCH}?{query}")
}

#[cfg(test)]
mod tests {
    use orthodata::{LanguageStatus, OrthographyStatus, Speakers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{evaluate::OrthoChar, index::tests::CountingResolver};

    fn row(name: &str, missing: &str, supported: &str) -> CoverageResult {
        CoverageResult {
            code: name.to_lowercase().into(),
            name: name.into(),
            speakers: Speakers::Unknown,
            orthography_status: OrthographyStatus::Primary,
            language_status: LanguageStatus::Living,
            missing: missing.chars().map(OrthoChar::base).collect(),
            supported: supported.chars().map(OrthoChar::base).collect(),
        }
    }

    #[test]
    fn new_glyphs_skip_what_exists() {
        // 'c' is encoded by a glyph with another name, 'd' has a name that's
        // already taken by an unencoded glyph
        let repertoire = FontRepertoire::from_glyphs([
            ("a", vec!['a']),
            ("c.alt", vec!['c']),
            ("uni0064", vec![]),
        ]);
        let rows = [row("One", "bcde", "a"), row("Two", "eb", "a")];
        let selected: Vec<_> = rows.iter().collect();
        let mut index = CharacterIndex::new(ProductionNames);
        let added = glyphs_to_add(&selected, &repertoire, &mut index);
        assert_eq!(
            added,
            vec![
                NewGlyph {
                    name: "uni0062".into(),
                    codepoint: 'b'
                },
                NewGlyph {
                    name: "uni0065".into(),
                    codepoint: 'e'
                },
            ]
        );
        let names: Vec<_> = added.iter().map(|g| &g.name).collect();
        assert_eq!(tab_text(names), "/uni0062 /uni0065 ");
    }

    #[test]
    fn unresolvable_gets_production_name() {
        let rows = [row("One", "x", "")];
        let selected: Vec<_> = rows.iter().collect();
        let mut index = CharacterIndex::new(CountingResolver::default());
        let added = glyphs_to_add(&selected, &FontRepertoire::default(), &mut index);
        assert_eq!(added[0].name, "uni0078");
        assert!(missing_glyph_names(&selected, &mut index).is_empty());
    }

    #[test]
    fn supported_names_and_title() {
        let rows = [row("French", "", "ba"), row("Basque", "", "ab")];
        let selected: Vec<_> = rows.iter().collect();
        let mut index = CharacterIndex::new(ProductionNames);
        let names = supported_glyph_names(&selected, &mut index);
        assert_eq!(names, vec![GlyphName::new("uni0061"), GlyphName::new("uni0062")]);
        assert_eq!(supported_tab_title(&selected), "Supported for French, Basque");
    }

    #[test]
    fn lookup_urls() {
        assert_eq!(
            language_lookup_url("N'Ko (Manding)"),
            "https://en.wikipedia.org/w/index.php?search=N%27Ko+%28Manding%29+language"
        );
        assert_eq!(
            script_lookup_url(&Script::new("Latin")),
            "https://en.wikipedia.org/w/index.php?search=Latin+script"
        );
        assert_eq!(
            language_lookup_url("Español"),
            "https://en.wikipedia.org/w/index.php?search=Espa%C3%B1ol+language"
        );
        // query delimiters in a name stay inside the search value
        assert_eq!(
            language_lookup_url("Ga&Dangme=1"),
            "https://en.wikipedia.org/w/index.php?search=Ga%26Dangme%3D1+language"
        );
    }
}
