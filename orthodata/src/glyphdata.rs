//! Glyph naming data in the GlyphData.xml format used by Glyphs.
//!
//! Each `<glyph>` row names a glyph and usually its codepoint; this is what
//! lets us go from a character to the glyph name an editor would give it.
//! Attributes we don't use (category, script, description, …) are ignored.

use std::{collections::HashMap, num::ParseIntError, path::Path};

use log::debug;
use quick_xml::{
    events::{BytesStart, Event},
    Reader,
};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::{error::Error, types::GlyphName};

/// One row of a GlyphData file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphInfo {
    pub name: GlyphName,
    pub unicode: Option<u32>,
    pub production: Option<SmolStr>,
    pub alt_names: Vec<SmolStr>,
}

/// Codepoint to glyph name lookup built from one or more GlyphData files.
#[derive(Clone, Debug, Default)]
pub struct GlyphData {
    by_codepoint: HashMap<u32, GlyphName>,
    by_name: HashMap<GlyphName, u32>,
}

impl GlyphData {
    /// Build from parsed entries; a later entry for a codepoint wins.
    pub fn new(entries: impl IntoIterator<Item = GlyphInfo>) -> Self {
        let mut data = GlyphData::default();
        data.extend(entries);
        data
    }

    /// Load and merge files in order, so later files override earlier ones.
    pub fn load(paths: &[impl AsRef<Path>]) -> Result<Self, Error> {
        let mut data = GlyphData::default();
        for path in paths {
            let path = path.as_ref();
            let bytes = std::fs::read(path).map_err(|source| Error::FileIo {
                path: path.to_path_buf(),
                source,
            })?;
            let entries = parse_entries(&bytes).map_err(|source| Error::GlyphData {
                path: path.to_path_buf(),
                source,
            })?;
            debug!("{} glyph data entries in {}", entries.len(), path.display());
            data.extend(entries);
        }
        Ok(data)
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = GlyphInfo>) {
        for info in entries {
            let Some(cp) = info.unicode else {
                continue;
            };
            if let Some(prev) = self.by_codepoint.insert(cp, info.name.clone()) {
                self.by_name.remove(&prev);
            }
            self.by_name.insert(info.name, cp);
        }
    }

    pub fn name_for_codepoint(&self, cp: u32) -> Option<&GlyphName> {
        self.by_codepoint.get(&cp)
    }

    pub fn codepoint_for_name(&self, name: &str) -> Option<u32> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_codepoint.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_codepoint.is_empty()
    }
}

/// Parse glyph info entries out of a GlyphData xml file.
pub fn parse_entries(xml: &[u8]) -> Result<Vec<GlyphInfo>, GlyphDataError> {
    fn check_and_advance_past_preamble(reader: &mut Reader<&[u8]>) -> Result<(), GlyphDataError> {
        loop {
            let event = reader.read_event()?;
            match event {
                Event::Comment(_) => (),
                Event::Decl(_) => (),
                Event::DocType(_) => (),
                Event::Start(start) if start.name().as_ref() == b"glyphData" => return Ok(()),
                _other => {
                    return Err(GlyphDataError::WrongFirstElement);
                }
            }
        }
    }

    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    check_and_advance_past_preamble(&mut reader)?;
    let mut entries = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Empty(row) if row.name().as_ref() == b"glyph" => {
                entries.push(parse_glyph_xml(row)?)
            }
            Event::Comment(_) => (),
            Event::End(_) | Event::Eof => break,
            _other => return Err(GlyphDataError::UnexpectedContent),
        }
    }
    Ok(entries)
}

fn parse_glyph_xml(item: BytesStart) -> Result<GlyphInfo, GlyphDataError> {
    let mut name = None;
    let mut unicode = None;
    let mut production = None;
    let mut alt_names = None;

    for attr in item.attributes() {
        let attr = attr?;
        let value = attr.unescape_value()?;
        match attr.key.as_ref() {
            b"name" => name = Some(value),
            b"unicode" => unicode = Some(value),
            b"production" => production = Some(value),
            b"altNames" => alt_names = Some(value),
            _ => (),
        }
    }

    let name = name
        .map(GlyphName::new)
        .ok_or_else(|| GlyphDataError::missing_attr("name", item.attributes_raw()))?;
    let production = production.map(SmolStr::new);
    let unicode = unicode
        .map(|s| {
            u32::from_str_radix(&s, 16).map_err(|inner| GlyphDataError::InvalidUnicode {
                raw: s.into_owned(),
                inner,
            })
        })
        .transpose()?;
    let alt_names = alt_names
        .map(|names| {
            names
                .as_ref()
                .split(',')
                .map(|name| SmolStr::from(name.trim()))
                .collect()
        })
        .unwrap_or_default();

    Ok(GlyphInfo {
        name,
        unicode,
        production,
        alt_names,
    })
}

#[derive(Clone, Debug, thiserror::Error)]
pub enum GlyphDataError {
    #[error("Error parsing XML: '{0}'")]
    ReaderError(#[from] quick_xml::Error),
    #[error("Error parsing XML attribute: '{0}'")]
    XmlAttributeError(#[from] quick_xml::events::attributes::AttrError),
    #[error("the XML input did not start with a <glyphData> tag")]
    WrongFirstElement,
    #[error("expected only <glyph/> rows inside <glyphData>")]
    UnexpectedContent,
    #[error("Missing required attribute '{missing}' in '{attributes}'")]
    MissingRequiredAttribute {
        attributes: String,
        missing: &'static str,
    },
    #[error("Invalid unicode value '{raw}': '{inner}'")]
    InvalidUnicode { raw: String, inner: ParseIntError },
}

impl GlyphDataError {
    fn missing_attr(name: &'static str, raw_attrs: &[u8]) -> Self {
        let attributes = String::from_utf8_lossy(raw_attrs).into_owned();
        Self::MissingRequiredAttribute {
            attributes,
            missing: name,
        }
    }
}
