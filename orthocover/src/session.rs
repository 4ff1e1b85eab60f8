//! Everything that lives as long as one look at one font.

use std::collections::HashMap;

use log::{debug, info};
use orthodata::{LanguageDatabase, Script};

use crate::{
    catalog::ScriptCatalog,
    coverage::{coverage_for_script, CoverageFilter, ScriptCoverage, ScriptTotals},
    error::Error,
    index::CharacterIndex,
    repertoire::FontRepertoire,
    resolve::GlyphNameResolver,
};

/// The state of an analysis: which script is shown, with which rows, and
/// what has been learned about glyph names so far.
///
/// The script catalog is built once, when the session starts. Coverage is
/// recomputed on every [`select_script`] or [`refresh`], which is what lets
/// a session follow a font that is being edited.
///
/// [`select_script`]: AnalysisSession::select_script
/// [`refresh`]: AnalysisSession::refresh
#[derive(Debug)]
pub struct AnalysisSession<'db, R> {
    database: &'db LanguageDatabase,
    index: CharacterIndex<R>,
    catalog: ScriptCatalog,
    filter: CoverageFilter,
    current_script: Option<Script>,
    totals: HashMap<Script, ScriptTotals>,
}

impl<'db, R: GlyphNameResolver> AnalysisSession<'db, R> {
    pub fn new(database: &'db LanguageDatabase, resolver: R) -> Self {
        let catalog = ScriptCatalog::new(database);
        info!("{} languages in {} scripts", database.len(), catalog.len());
        AnalysisSession {
            database,
            index: CharacterIndex::new(resolver),
            catalog,
            filter: CoverageFilter::default(),
            current_script: None,
            totals: HashMap::new(),
        }
    }

    pub fn database(&self) -> &'db LanguageDatabase {
        self.database
    }

    pub fn catalog(&self) -> &ScriptCatalog {
        &self.catalog
    }

    pub fn filter(&self) -> CoverageFilter {
        self.filter
    }

    /// Takes effect at the next [`refresh`](AnalysisSession::refresh).
    pub fn set_filter(&mut self, filter: CoverageFilter) {
        self.filter = filter;
    }

    /// The selected script, or the most spoken one if none was selected.
    pub fn current_script(&self) -> Option<&Script> {
        self.current_script
            .as_ref()
            .or_else(|| self.catalog.default_script())
    }

    /// Make `script` current and compute its coverage.
    pub fn select_script(
        &mut self,
        script: &str,
        repertoire: &FontRepertoire,
    ) -> Result<ScriptCoverage, Error> {
        let script = self
            .catalog
            .get(script)
            .map(|entry| entry.script.clone())
            .ok_or_else(|| Error::UnknownScript(script.to_string()))?;
        debug!("Selecting {script}");
        self.current_script = Some(script);
        self.refresh(repertoire)
    }

    /// Recompute coverage of the current script.
    pub fn refresh(&mut self, repertoire: &FontRepertoire) -> Result<ScriptCoverage, Error> {
        let script = self.current_script().cloned().ok_or(Error::NoScripts)?;
        let coverage = coverage_for_script(
            &script,
            self.database,
            repertoire,
            self.filter,
            &mut self.index,
        );
        self.totals.insert(script, coverage.totals);
        Ok(coverage)
    }

    /// Totals from the last time `script` was computed.
    pub fn totals_for(&self, script: &Script) -> Option<ScriptTotals> {
        self.totals.get(script).copied()
    }

    pub fn index(&self) -> &CharacterIndex<R> {
        &self.index
    }

    pub fn index_mut(&mut self) -> &mut CharacterIndex<R> {
        &mut self.index
    }

    /// Swap the glyph name source; everything cached from the old one goes.
    pub fn set_resolver(&mut self, resolver: R) {
        self.index.set_resolver(resolver);
        self.totals.clear();
    }

    /// Forget the selection, filter, cached names and totals.
    ///
    /// The catalog is kept; it depends only on the database.
    pub fn reset(&mut self) {
        self.index.reset();
        self.filter = CoverageFilter::default();
        self.current_script = None;
        self.totals.clear();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        index::tests::CountingResolver,
        resolve::{Fallback, FontEncodings, ProductionNames},
        testdata_dir,
    };

    fn database() -> LanguageDatabase {
        LanguageDatabase::load(&testdata_dir().join("languages.yaml")).unwrap()
    }

    fn codes(coverage: &ScriptCoverage) -> Vec<&str> {
        coverage.rows.iter().map(|r| r.code.as_str()).collect()
    }

    #[test]
    fn session_over_tiny_ufo() {
        let _ = env_logger::builder().is_test(true).try_init();
        let db = database();
        let font = FontRepertoire::load_ufo(&testdata_dir().join("Tiny.ufo")).unwrap();
        let resolver = Fallback::new(FontEncodings::new(&font), ProductionNames);
        let mut session = AnalysisSession::new(&db, resolver);

        assert_eq!(session.current_script().unwrap(), &Script::new("Latin"));
        let coverage = session.refresh(&font).unwrap();
        assert_eq!(
            coverage.totals,
            ScriptTotals {
                total: 3,
                complete: 2,
                incomplete: 1
            }
        );
        assert_eq!(codes(&coverage), vec!["fra"]);
        assert_eq!(coverage.rows[0].missing.len(), 1);
        assert_eq!(coverage.rows[0].missing[0].ch, 'c');
        assert_eq!(coverage.status_line(&[]), "2/3 = 66% Latin supported");

        session.set_filter(CoverageFilter {
            show_complete: true,
            show_incomplete: true,
        });
        let coverage = session.refresh(&font).unwrap();
        assert_eq!(codes(&coverage), vec!["eng", "lat", "fra"]);

        let cyrillic = session.select_script("Cyrillic", &font).unwrap();
        assert_eq!(codes(&cyrillic), vec!["rus"]);
        assert_eq!(cyrillic.totals.percent_complete(), Some(0));
        assert_eq!(session.current_script().unwrap(), &Script::new("Cyrillic"));

        // totals are remembered per script
        assert_eq!(session.totals_for(&Script::new("Latin")).unwrap().complete, 2);
        assert_eq!(session.totals_for(&Script::new("Cyrillic")).unwrap().total, 1);
    }

    #[test]
    fn unknown_script() {
        let db = database();
        let mut session = AnalysisSession::new(&db, ProductionNames);
        let err = session
            .select_script("Klingon", &FontRepertoire::default())
            .unwrap_err();
        assert!(matches!(err, Error::UnknownScript(s) if s == "Klingon"));
        assert_eq!(session.current_script().unwrap(), &Script::new("Latin"));
    }

    #[test]
    fn empty_database_has_no_scripts() {
        let db = LanguageDatabase::default();
        let mut session = AnalysisSession::new(&db, ProductionNames);
        assert!(session.current_script().is_none());
        assert!(matches!(
            session.refresh(&FontRepertoire::default()),
            Err(Error::NoScripts)
        ));
    }

    #[test]
    fn reset_forgets_everything_but_the_catalog() {
        let db = database();
        let font = FontRepertoire::default();
        let mut session = AnalysisSession::new(&db, CountingResolver::default());
        session.select_script("Cyrillic", &font).unwrap();
        session.set_filter(CoverageFilter {
            show_complete: true,
            show_incomplete: false,
        });
        assert!(!session.index().is_empty());

        session.reset();
        assert!(session.index().is_empty());
        assert_eq!(session.filter(), CoverageFilter::default());
        assert_eq!(session.current_script().unwrap(), &Script::new("Latin"));
        assert_eq!(session.totals_for(&Script::new("Cyrillic")), None);
        assert_eq!(session.catalog().len(), 2);
    }

    #[test]
    fn cached_names_are_reused_across_refreshes() {
        let db = database();
        let font = FontRepertoire::default();
        let mut session = AnalysisSession::new(&db, CountingResolver::default());
        session.refresh(&font).unwrap();
        let asked = session.index().resolver().calls.get();
        session.refresh(&font).unwrap();
        assert_eq!(session.index().resolver().calls.get(), asked);

        session.set_resolver(CountingResolver::default());
        assert!(session.index().is_empty());
    }
}
