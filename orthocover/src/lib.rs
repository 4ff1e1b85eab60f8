//! Which languages does this font support?
//!
//! Checks a font's glyphs against the orthographies in a language database
//! and reports, per script, which languages are covered and what is missing.

pub mod actions;
#[cfg(feature = "cli")]
mod args;
pub mod catalog;
pub mod coverage;
pub mod display;
mod error;
pub mod evaluate;
pub mod export;
pub mod index;
pub mod repertoire;
pub mod resolve;
pub mod session;
pub mod update;

#[cfg(feature = "cli")]
pub use args::Args;
pub use catalog::{ScriptCatalog, ScriptEntry};
pub use coverage::{CoverageFilter, CoverageResult, ScriptCoverage, ScriptTotals};
pub use error::Error;
pub use evaluate::{MarkDisplay, OrthoChar};
pub use export::ExportKind;
pub use index::CharacterIndex;
pub use repertoire::FontRepertoire;
pub use resolve::GlyphNameResolver;
pub use session::AnalysisSession;

#[cfg(feature = "cli")]
use std::{fs, io::Write};

#[cfg(feature = "cli")]
use log::{debug, info, warn};
#[cfg(feature = "cli")]
use orthodata::{GlyphData, LanguageDatabase};

#[cfg(feature = "cli")]
use resolve::{Fallback, FontEncodings, ProductionNames};

/// Check the font named by `args`, writing the report to `out`.
#[cfg(feature = "cli")]
pub fn run(args: &Args, out: &mut impl Write) -> Result<(), Error> {
    let database = LanguageDatabase::load(&args.languages)?;
    if args.list_scripts {
        let catalog = ScriptCatalog::new(&database);
        return write_out(out, &export::scripts_tsv(catalog.entries()));
    }

    let font = FontRepertoire::load_ufo(&args.ufo)?;
    let glyph_data = GlyphData::load(args.glyph_data.as_slice())?;
    // what the font already encodes, then the naming data, then uniXXXX
    let resolver = Fallback::new(
        FontEncodings::new(&font),
        Fallback::new(glyph_data, ProductionNames),
    );
    let mut session = AnalysisSession::new(&database, resolver);
    session.set_filter(args.filter());
    let coverage = match &args.script {
        Some(script) => session.select_script(script, &font)?,
        None => session.refresh(&font)?,
    };

    let selected: Vec<&CoverageResult> = if args.select.is_empty() {
        coverage.rows.iter().collect()
    } else {
        if let Some(code) = args
            .select
            .iter()
            .find(|code| !coverage.rows.iter().any(|row| row.code == code.as_str()))
        {
            return Err(Error::UnknownLanguage(code.clone()));
        }
        coverage.rows_for(args.select.as_slice())
    };
    info!("{}", coverage.status_line(&selected));

    if let Some(kind) = args.export_kind() {
        write_out(out, &export::export_missing(&selected, kind))?;
        if kind != ExportKind::OnePerLine {
            write_out(out, "\n")?;
        }
    } else if args.glyphs_to_add {
        let new_glyphs = actions::glyphs_to_add(&selected, &font, session.index_mut());
        for glyph in &new_glyphs {
            write_out(
                out,
                &format!("{}\tU+{:04X}\n", glyph.name, glyph.codepoint as u32),
            )?;
        }
        let text = actions::tab_text(new_glyphs.iter().map(|glyph| &glyph.name));
        write_out(out, &format!("{text}\n"))?;
    } else {
        write_out(out, &export::languages_tsv(&selected))?;
        write_out(out, &format!("{}\n", coverage.status_line(&[])))?;
    }

    if let Some(path) = &args.release_metadata {
        match fs::read_to_string(path) {
            Ok(json) => {
                if let Some(notice) = update::newer_release(env!("CARGO_PKG_VERSION"), &json) {
                    warn!("{notice}");
                }
            }
            Err(e) => debug!("Unable to read {}: {e}", path.display()),
        }
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn write_out(out: &mut impl Write, text: &str) -> Result<(), Error> {
    out.write_all(text.as_bytes()).map_err(Error::StdioWriteFail)
}

#[cfg(test)]
pub(crate) fn testdata_dir() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("resources/testdata")
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn report(args: &Args) -> String {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut out = Vec::new();
        run(args, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn glyph_data() -> std::path::PathBuf {
        testdata_dir().join("../../../orthodata/resources/testdata/GlyphData.xml")
    }

    #[test]
    fn default_report() {
        let args = Args::for_test("Tiny.ufo");
        assert_eq!(
            report(&args),
            "ISO\tLanguage\tL1 Speakers\tOrtho. Status\tLang. Status\tMissing Chars\tSupported\n\
             fra\tFrench\t50\tprimary\tliving\tc\ta b \u{25CC}\u{0301}\n\
             2/3 = 66% Latin supported\n"
        );
    }

    #[test]
    fn list_scripts() {
        let args = Args {
            list_scripts: true,
            ..Args::for_test("Tiny.ufo")
        };
        assert_eq!(report(&args), "Script\tL1 Speakers\nLatin\t150\nCyrillic\t80\n");
    }

    #[test]
    fn export_selected() {
        let args = Args {
            script: Some("Cyrillic".to_string()),
            export: Some(ExportKind::Unicode),
            select: vec!["rus".to_string()],
            ..Args::for_test("Tiny.ufo")
        };
        assert_eq!(report(&args), "U+0430\nU+0431\n");
    }

    #[test]
    fn glyphs_to_add_use_glyph_data_names() {
        let args = Args {
            script: Some("Cyrillic".to_string()),
            glyph_data: vec![glyph_data()],
            glyphs_to_add: true,
            ..Args::for_test("Tiny.ufo")
        };
        assert_eq!(report(&args), "a-cy\tU+0430\nbe-cy\tU+0431\n/a-cy /be-cy \n");
    }

    #[test]
    fn unknown_selection() {
        let args = Args {
            select: vec!["eng".to_string()],
            ..Args::for_test("Tiny.ufo")
        };
        // eng is complete, so hidden by default
        let err = run(&args, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, Error::UnknownLanguage(code) if code == "eng"));
    }

    #[test]
    fn unknown_script() {
        let args = Args {
            script: Some("Ogham".to_string()),
            ..Args::for_test("Tiny.ufo")
        };
        assert!(matches!(
            run(&args, &mut Vec::new()),
            Err(Error::UnknownScript(_))
        ));
    }

    #[test]
    fn missing_ufo() {
        let args = Args::for_test("Nope.ufo");
        assert!(matches!(run(&args, &mut Vec::new()), Err(Error::Ufo(_))));
    }

    #[test]
    fn release_metadata_is_optional_and_forgiving() {
        let dir = tempfile::tempdir().unwrap();
        let metadata = dir.path().join("pypi.json");
        fs::write(&metadata, "not json").unwrap();
        let args = Args {
            release_metadata: Some(metadata),
            ..Args::for_test("Tiny.ufo")
        };
        assert!(report(&args).ends_with("2/3 = 66% Latin supported\n"));
    }
}
