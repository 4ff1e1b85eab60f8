//! Coverage of every orthography written in one script.

use std::collections::HashSet;

use log::debug;
use orthodata::{LanguageDatabase, LanguageStatus, OrthographyStatus, Script, Speakers};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::{
    evaluate::{evaluate, OrthoChar},
    index::CharacterIndex,
    repertoire::FontRepertoire,
    resolve::GlyphNameResolver,
};

/// Which rows to report. Totals are computed regardless.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageFilter {
    /// Include orthographies the font fully supports.
    pub show_complete: bool,
    /// Include orthographies with at least one missing character.
    pub show_incomplete: bool,
}

impl Default for CoverageFilter {
    fn default() -> Self {
        CoverageFilter {
            show_complete: false,
            show_incomplete: true,
        }
    }
}

impl CoverageFilter {
    pub fn shows(&self, complete: bool) -> bool {
        if complete {
            self.show_complete
        } else {
            self.show_incomplete
        }
    }
}

/// One orthography of one language, as checked against the font.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageResult {
    pub code: SmolStr,
    pub name: String,
    pub speakers: Speakers,
    pub orthography_status: OrthographyStatus,
    pub language_status: LanguageStatus,
    pub missing: Vec<OrthoChar>,
    pub supported: Vec<OrthoChar>,
}

impl CoverageResult {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// How many orthographies of a script the font covers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptTotals {
    pub total: usize,
    pub complete: usize,
    pub incomplete: usize,
}

impl ScriptTotals {
    /// Whole percent of orthographies that are complete, rounded down.
    ///
    /// `None` if the script has no orthographies at all.
    pub fn percent_complete(&self) -> Option<usize> {
        (self.total > 0).then(|| self.complete * 100 / self.total)
    }
}

/// The rows and totals for one script.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptCoverage {
    pub script: Script,
    pub rows: Vec<CoverageResult>,
    pub totals: ScriptTotals,
}

impl ScriptCoverage {
    /// A one line summary, e.g. "7/10 = 70% Latin supported".
    ///
    /// With rows selected it also says how many, and how many distinct
    /// characters they are missing between them.
    pub fn status_line(&self, selected: &[&CoverageResult]) -> String {
        let percent = match self.totals.percent_complete() {
            Some(pct) => format!("{pct}%"),
            None => "no data".to_string(),
        };
        let mut line = format!(
            "{}/{} = {percent} {} supported",
            self.totals.complete, self.totals.total, self.script
        );
        if !selected.is_empty() {
            let missing: HashSet<_> = selected
                .iter()
                .flat_map(|row| row.missing.iter().map(|c| c.ch))
                .collect();
            line.push_str(&format!(
                " ({} langs, {} missing chars selected)",
                selected.len(),
                missing.len()
            ));
        }
        line
    }

    /// Rows whose language code is in `codes`, in row order.
    pub fn rows_for<'a>(&'a self, codes: &[impl AsRef<str>]) -> Vec<&'a CoverageResult> {
        self.rows
            .iter()
            .filter(|row| codes.iter().any(|code| row.code == code.as_ref()))
            .collect()
    }
}

/// Check every orthography written in `script` against the font.
///
/// Rows are sorted by how many characters they are missing, fewest first;
/// rows missing the same number keep database order.
pub fn coverage_for_script<R: GlyphNameResolver>(
    script: &Script,
    database: &LanguageDatabase,
    repertoire: &FontRepertoire,
    filter: CoverageFilter,
    index: &mut CharacterIndex<R>,
) -> ScriptCoverage {
    let glyph_names = repertoire.glyph_names();
    let mut totals = ScriptTotals::default();
    let mut rows = Vec::new();

    for lang in database.iter() {
        if lang.orthographies.is_empty() {
            continue;
        }
        for ortho in lang.orthographies_in(script) {
            totals.total += 1;
            let result = evaluate(ortho, glyph_names, index);
            let complete = result.is_complete();
            if complete {
                totals.complete += 1;
            } else {
                totals.incomplete += 1;
            }
            if !filter.shows(complete) {
                continue;
            }
            rows.push(CoverageResult {
                code: lang.code.clone(),
                name: lang.display_name().to_string(),
                speakers: lang.speakers,
                orthography_status: ortho.status,
                language_status: lang.status,
                missing: result.unsupported,
                supported: result.supported,
            });
        }
    }

    // stable, so ties stay in database order
    rows.sort_by_key(|row| row.missing.len());
    debug!(
        "{script}: {} orthographies, {} complete, {} rows shown",
        totals.total,
        totals.complete,
        rows.len()
    );
    ScriptCoverage {
        script: script.clone(),
        rows,
        totals,
    }
}
