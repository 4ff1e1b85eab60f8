//! Command line arguments

use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::{coverage::CoverageFilter, export::ExportKind};

/// Which languages does this font support?
#[derive(Serialize, Deserialize, Parser, Debug, Clone, PartialEq)]
pub struct Args {
    /// A Hyperglot style language database, in YAML
    #[arg(short, long)]
    pub languages: PathBuf,

    /// The font to check
    #[arg(short, long)]
    pub ufo: PathBuf,

    /// GlyphData.xml files naming glyphs by codepoint. May be repeated, later
    /// files override earlier ones.
    #[arg(short, long)]
    pub glyph_data: Vec<PathBuf>,

    /// Script to report on. Defaults to the one with the most speakers.
    #[arg(short, long)]
    pub script: Option<String>,

    /// Also list orthographies the font fully supports
    #[arg(long)]
    pub show_complete: bool,

    /// Don't list orthographies with missing characters
    #[arg(long)]
    pub hide_incomplete: bool,

    /// Print the missing characters of the selected languages instead of the table
    #[arg(short, long, value_enum)]
    pub export: Option<ExportKind>,

    /// Print the glyphs the selected languages need, and edit text to show them
    #[arg(long)]
    pub glyphs_to_add: bool,

    /// Language codes to select; with none, every row shown is selected.
    #[arg(long = "select")]
    pub select: Vec<String>,

    /// List the scripts in the language database and stop
    #[arg(long)]
    pub list_scripts: bool,

    /// Package index metadata (JSON) to check for a newer release
    #[arg(long)]
    pub release_metadata: Option<PathBuf>,
}

impl Args {
    /// Manually create args for testing
    #[cfg(test)]
    pub fn for_test(ufo: &str) -> Args {
        let testdata = crate::testdata_dir();
        Args {
            languages: testdata.join("languages.yaml"),
            ufo: testdata.join(ufo),
            glyph_data: Vec::new(),
            script: None,
            show_complete: false,
            hide_incomplete: false,
            export: None,
            glyphs_to_add: false,
            select: Vec::new(),
            list_scripts: false,
            release_metadata: None,
        }
    }

    /// Which rows to show.
    pub fn filter(&self) -> CoverageFilter {
        CoverageFilter {
            show_complete: self.show_complete,
            show_incomplete: !self.hide_incomplete,
        }
    }

    pub fn export_kind(&self) -> Option<ExportKind> {
        self.export
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_flags() {
        let args = Args::parse_from([
            "orthocover",
            "--languages",
            "db.yaml",
            "--ufo",
            "Font.ufo",
            "-g",
            "a.xml",
            "-g",
            "b.xml",
            "--show-complete",
            "--hide-incomplete",
            "--export",
            "one-per-line",
            "--select",
            "fra",
            "--select",
            "eng",
        ]);
        assert_eq!(
            args.glyph_data,
            vec![PathBuf::from("a.xml"), PathBuf::from("b.xml")]
        );
        assert_eq!(
            args.filter(),
            CoverageFilter {
                show_complete: true,
                show_incomplete: false
            }
        );
        assert_eq!(args.export_kind(), Some(ExportKind::OnePerLine));
        assert_eq!(args.select, vec!["fra", "eng"]);
    }

    #[test]
    fn defaults() {
        let args = Args::parse_from(["orthocover", "-l", "db.yaml", "-u", "Font.ufo"]);
        assert_eq!(args.filter(), CoverageFilter::default());
        assert_eq!(args.export_kind(), None);
        assert!(args.glyph_data.is_empty());
        assert!(!args.list_scripts);
    }
}
