//! Reading the data an orthography coverage check needs.
//!
//! That is a language database listing the characters each orthography
//! uses, and glyph naming data to tell us which glyph a character maps to.

pub mod chars;
pub mod error;
pub mod glyphdata;
pub mod language;
pub mod types;

pub use error::Error;
pub use glyphdata::{GlyphData, GlyphInfo};
pub use language::{
    LanguageDatabase, LanguageRecord, LanguageStatus, OrthographyRecord, OrthographyStatus,
    Speakers,
};
pub use types::{GlyphName, Script};
