//! Text exports of selected coverage rows, for pasting elsewhere.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    catalog::ScriptEntry,
    coverage::CoverageResult,
    display::{language_cells, script_cells, LANGUAGE_COLUMNS, SCRIPT_COLUMNS},
    evaluate::{MarkDisplay, OrthoChar},
};

/// The ways missing characters can be exported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExportKind {
    /// Characters separated by spaces; marks keep their dotted circles
    SpaceSeparated,
    /// One character per line
    OnePerLine,
    /// A list literal, `["a", "b"]`
    List,
    /// One codepoint per line, `U+0301`
    Unicode,
    /// One codepoint per line in hexadecimal, `301`
    Hex,
    /// One codepoint per line in decimal, `769`
    Decimal,
}

/// Missing characters of the selected rows, deduplicated and sorted.
///
/// Characters are compared as displayed in `mode`, so with dotted circles a
/// character that is a mark in one row and a base in another shows up twice.
pub fn selected_missing(rows: &[&CoverageResult], mode: MarkDisplay) -> Vec<OrthoChar> {
    collect_sorted(rows.iter().flat_map(|row| row.missing.iter()), mode)
}

/// Supported characters of the selected rows, deduplicated and sorted.
pub fn selected_supported(rows: &[&CoverageResult], mode: MarkDisplay) -> Vec<OrthoChar> {
    collect_sorted(rows.iter().flat_map(|row| row.supported.iter()), mode)
}

fn collect_sorted<'a>(
    chars: impl Iterator<Item = &'a OrthoChar>,
    mode: MarkDisplay,
) -> Vec<OrthoChar> {
    let mut sorted = BTreeMap::new();
    for c in chars {
        sorted.entry(c.display(mode)).or_insert(*c);
    }
    sorted.into_values().collect()
}

/// Format the missing characters of the selected rows.
pub fn export_missing(rows: &[&CoverageResult], kind: ExportKind) -> String {
    let mode = match kind {
        ExportKind::SpaceSeparated => MarkDisplay::DottedCircle,
        _ => MarkDisplay::Raw,
    };
    let chars = selected_missing(rows, mode);
    let strings = chars.iter().map(|c| c.display(mode));
    match kind {
        ExportKind::SpaceSeparated => strings.collect::<Vec<_>>().join(" "),
        ExportKind::OnePerLine => strings.map(|s| s + "\n").collect(),
        ExportKind::List => {
            let items: Vec<_> = strings.map(|s| format!("\"{}\"", escape_quoted(&s))).collect();
            format!("[{}]", items.join(", "))
        }
        ExportKind::Unicode => codepoint_lines(&chars, |cp| format!("U+{cp:04X}")),
        ExportKind::Hex => codepoint_lines(&chars, |cp| format!("{cp:X}")),
        ExportKind::Decimal => codepoint_lines(&chars, |cp| cp.to_string()),
    }
}

fn codepoint_lines(chars: &[OrthoChar], fmt: impl Fn(u32) -> String) -> String {
    chars
        .iter()
        .map(|c| fmt(c.ch as u32))
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Tab separated text with a header row, for spreadsheets.
pub fn to_tsv(headers: &[&str], rows: impl IntoIterator<Item = Vec<String>>) -> String {
    let mut out = headers.join("\t");
    out.push('\n');
    for row in rows {
        let cells: Vec<_> = row.iter().map(|cell| cell.replace(['\t', '\n'], " ")).collect();
        out.push_str(&cells.join("\t"));
        out.push('\n');
    }
    out
}

pub fn languages_tsv(rows: &[&CoverageResult]) -> String {
    to_tsv(&LANGUAGE_COLUMNS, rows.iter().map(|row| language_cells(row)))
}

pub fn scripts_tsv(entries: &[ScriptEntry]) -> String {
    to_tsv(&SCRIPT_COLUMNS, entries.iter().map(script_cells))
}
