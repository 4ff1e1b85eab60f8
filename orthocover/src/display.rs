//! Turning coverage rows into table cells.
//!
//! This is the only place unknown values become text.

use orthodata::{LanguageStatus, OrthographyStatus, Speakers};

use crate::{
    catalog::ScriptEntry,
    coverage::CoverageResult,
    evaluate::{MarkDisplay, OrthoChar},
};

pub const NO_DATA: &str = "(no data)";
pub const COMPLETE: &str = "(complete)";

pub const SCRIPT_COLUMNS: [&str; 2] = ["Script", "L1 Speakers"];
pub const LANGUAGE_COLUMNS: [&str; 7] = [
    "ISO",
    "Language",
    "L1 Speakers",
    "Ortho. Status",
    "Lang. Status",
    "Missing Chars",
    "Supported",
];

pub fn speakers_cell(speakers: Speakers) -> String {
    match speakers {
        Speakers::Known(n) => n.to_string(),
        Speakers::Unknown => NO_DATA.to_string(),
    }
}

pub fn language_status_cell(status: LanguageStatus) -> &'static str {
    status.name().unwrap_or(NO_DATA)
}

pub fn orthography_status_cell(status: OrthographyStatus) -> &'static str {
    status.name().unwrap_or(NO_DATA)
}

/// Characters separated by spaces, marks on dotted circles.
pub fn char_list_cell(chars: &[OrthoChar]) -> String {
    chars
        .iter()
        .map(|c| c.display(MarkDisplay::DottedCircle))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn missing_cell(missing: &[OrthoChar]) -> String {
    if missing.is_empty() {
        COMPLETE.to_string()
    } else {
        char_list_cell(missing)
    }
}

/// Cells of a row in [`LANGUAGE_COLUMNS`] order.
pub fn language_cells(row: &CoverageResult) -> Vec<String> {
    vec![
        row.code.to_string(),
        row.name.clone(),
        speakers_cell(row.speakers),
        orthography_status_cell(row.orthography_status).to_string(),
        language_status_cell(row.language_status).to_string(),
        missing_cell(&row.missing),
        char_list_cell(&row.supported),
    ]
}

/// Cells of a row in [`SCRIPT_COLUMNS`] order.
pub fn script_cells(entry: &ScriptEntry) -> Vec<String> {
    vec![entry.script.to_string(), entry.speakers.to_string()]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn unknowns_read_no_data() {
        assert_eq!(speakers_cell(Speakers::Unknown), NO_DATA);
        assert_eq!(speakers_cell(Speakers::Known(1200)), "1200");
        assert_eq!(language_status_cell(LanguageStatus::Unknown), NO_DATA);
        assert_eq!(language_status_cell(LanguageStatus::Constructed), "constructed");
        assert_eq!(orthography_status_cell(OrthographyStatus::Unknown), NO_DATA);
        assert_eq!(orthography_status_cell(OrthographyStatus::Secondary), "secondary");
    }

    #[test]
    fn row_cells() {
        let row = CoverageResult {
            code: "fra".into(),
            name: "French".into(),
            speakers: Speakers::Known(77),
            orthography_status: OrthographyStatus::Primary,
            language_status: LanguageStatus::Living,
            missing: vec![],
            supported: vec![OrthoChar::base('a'), OrthoChar::mark('\u{0301}')],
        };
        assert_eq!(
            language_cells(&row),
            vec!["fra", "French", "77", "primary", "living", COMPLETE, "a \u{25CC}\u{0301}"]
        );
    }
}
