//! Languages, orthographies, and loading them from a Hyperglot-style database.
//!
//! The database is a YAML mapping from language code to a language entry:
//!
//! ```yaml
//! fra:
//!   name: French
//!   speakers: 77000000
//!   status: living
//!   orthographies:
//!     - script: Latin
//!       status: primary
//!       base: A B C … a b c …
//!       marks: ◌̀ ◌́ ◌̂
//! ```
//!
//! Loading is lenient. An entry that can't be understood is logged and
//! skipped so that the rest of the database stays usable.

use std::{fs, path::Path};

use indexmap::IndexMap;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::{
    chars::{split_base_and_marks, split_chars},
    error::Error,
    types::Script,
};

// orthographies may inherit from orthographies that inherit in turn
const MAX_INHERIT_DEPTH: usize = 8;

/// Number of first-language speakers, when the database knows it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Speakers {
    Known(u64),
    #[default]
    Unknown,
}

impl Speakers {
    /// The count to use when summing; unknown counts contribute nothing.
    pub fn count_or_zero(&self) -> u64 {
        match self {
            Speakers::Known(n) => *n,
            Speakers::Unknown => 0,
        }
    }

    // the database uses both a missing key and 0 to mean "we don't know"
    fn from_raw(raw: Option<&serde_yaml::Value>) -> Self {
        match raw.and_then(serde_yaml::Value::as_u64) {
            Some(0) | None => Speakers::Unknown,
            Some(n) => Speakers::Known(n),
        }
    }
}

/// The vitality of a language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageStatus {
    Living,
    Historical,
    Constructed,
    Unknown,
}

impl LanguageStatus {
    /// The database spelling, or `None` when unknown.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            LanguageStatus::Living => Some("living"),
            LanguageStatus::Historical => Some("historical"),
            LanguageStatus::Constructed => Some("constructed"),
            LanguageStatus::Unknown => None,
        }
    }

    fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            // an absent status means living
            None | Some("living") => LanguageStatus::Living,
            Some("historical") => LanguageStatus::Historical,
            Some("constructed") => LanguageStatus::Constructed,
            Some(_) => LanguageStatus::Unknown,
        }
    }
}

/// The standing of one orthography within its language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrthographyStatus {
    Primary,
    Local,
    Secondary,
    Historical,
    Transliteration,
    Deprecated,
    Unknown,
}

impl OrthographyStatus {
    /// The database spelling, or `None` when unknown.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            OrthographyStatus::Primary => Some("primary"),
            OrthographyStatus::Local => Some("local"),
            OrthographyStatus::Secondary => Some("secondary"),
            OrthographyStatus::Historical => Some("historical"),
            OrthographyStatus::Transliteration => Some("transliteration"),
            OrthographyStatus::Deprecated => Some("deprecated"),
            OrthographyStatus::Unknown => None,
        }
    }

    fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("primary") => OrthographyStatus::Primary,
            Some("local") => OrthographyStatus::Local,
            Some("secondary") => OrthographyStatus::Secondary,
            Some("historical") => OrthographyStatus::Historical,
            Some("transliteration") => OrthographyStatus::Transliteration,
            Some("deprecated") => OrthographyStatus::Deprecated,
            _ => OrthographyStatus::Unknown,
        }
    }
}

/// One way of writing a language in one script.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrthographyRecord {
    pub script: Script,
    pub status: OrthographyStatus,
    /// Base characters, in database order.
    pub base: Vec<char>,
    /// Combining marks, in database order.
    pub marks: Vec<char>,
    pub numerals: Vec<char>,
    pub punctuation: Vec<char>,
}

impl OrthographyRecord {
    /// Build an orthography from whitespace separated base and mark strings.
    pub fn new(script: impl Into<Script>, status: OrthographyStatus, base: &str, marks: &str) -> Self {
        let split = split_base_and_marks(base, marks);
        OrthographyRecord {
            script: script.into(),
            status,
            base: split.base,
            marks: split.marks,
            numerals: Vec::new(),
            punctuation: Vec::new(),
        }
    }
}

/// A language and every orthography the database lists for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRecord {
    pub code: SmolStr,
    pub name: String,
    pub preferred_name: Option<String>,
    pub speakers: Speakers,
    pub status: LanguageStatus,
    pub orthographies: Vec<OrthographyRecord>,
}

impl LanguageRecord {
    /// The preferred name if there is one, otherwise the name.
    pub fn display_name(&self) -> &str {
        self.preferred_name.as_deref().unwrap_or(&self.name)
    }

    /// Orthographies written in `script`, in database order.
    pub fn orthographies_in<'a>(
        &'a self,
        script: &'a Script,
    ) -> impl Iterator<Item = &'a OrthographyRecord> + 'a {
        self.orthographies.iter().filter(move |o| &o.script == script)
    }
}

/// Every language, in database order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageDatabase {
    languages: Vec<LanguageRecord>,
}

impl LanguageDatabase {
    pub fn new(languages: Vec<LanguageRecord>) -> Self {
        LanguageDatabase { languages }
    }

    /// Load a database from a YAML file on disk.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let yaml = fs::read_to_string(path).map_err(|source| Error::FileIo {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self::parse(&yaml).map_err(|source| Error::LanguageDatabase {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            "Loaded {} languages from {}",
            db.languages.len(),
            path.display()
        );
        Ok(db)
    }

    /// Parse a database from YAML source.
    ///
    /// Only a root that isn't a mapping is an error; bad entries are skipped.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, Error> {
        Ok(Self::parse(yaml)?)
    }

    fn parse(yaml: &str) -> Result<Self, serde_yaml::Error> {
        let root: IndexMap<String, serde_yaml::Value> = serde_yaml::from_str(yaml)?;

        let raw: IndexMap<String, RawLanguage> = root
            .into_iter()
            .filter_map(|(code, value)| match RawLanguage::parse(&code, value) {
                Ok(lang) => Some((code, lang)),
                Err(e) => {
                    warn!("Skipping language '{code}': {e}");
                    None
                }
            })
            .collect();

        let languages = raw
            .iter()
            .map(|(code, lang)| lang.to_record(code, &raw))
            .collect();
        Ok(LanguageDatabase { languages })
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageRecord> {
        self.languages.iter()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    pub fn get(&self, code: &str) -> Option<&LanguageRecord> {
        self.languages.iter().find(|lang| lang.code == code)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
struct RawLanguage {
    name: Option<String>,
    preferred_name: Option<String>,
    speakers: Option<serde_yaml::Value>,
    status: Option<String>,
    #[serde(default)]
    orthographies: Option<Vec<serde_yaml::Value>>,
    #[serde(skip)]
    parsed_orthographies: Vec<RawOrthography>,
}

#[derive(Clone, Debug, Default, Deserialize)]
struct RawOrthography {
    script: Option<String>,
    status: Option<String>,
    base: Option<String>,
    marks: Option<String>,
    numerals: Option<String>,
    punctuation: Option<String>,
    inherit: Option<String>,
}

impl RawLanguage {
    fn parse(code: &str, value: serde_yaml::Value) -> Result<Self, serde_yaml::Error> {
        let mut lang: RawLanguage = serde_yaml::from_value(value)?;
        let orthographies = lang.orthographies.take().unwrap_or_default();
        lang.parsed_orthographies = orthographies
            .into_iter()
            .enumerate()
            .filter_map(|(i, value)| match serde_yaml::from_value(value) {
                Ok(ortho) => Some(ortho),
                Err(e) => {
                    warn!("Skipping orthography {i} of '{code}': {e}");
                    None
                }
            })
            .collect();
        Ok(lang)
    }

    fn to_record(&self, code: &str, all: &IndexMap<String, RawLanguage>) -> LanguageRecord {
        let name = self.name.clone().unwrap_or_else(|| {
            debug!("Language '{code}' has no name, using its code");
            code.to_string()
        });
        let orthographies = self
            .parsed_orthographies
            .iter()
            .enumerate()
            .filter_map(|(i, raw)| {
                let resolved = raw.resolve_inherit(all, 0);
                let record = resolved.to_record();
                if record.is_none() {
                    warn!("Skipping orthography {i} of '{code}': no script");
                }
                record
            })
            .collect();
        LanguageRecord {
            code: code.into(),
            name,
            preferred_name: self.preferred_name.clone(),
            speakers: Speakers::from_raw(self.speakers.as_ref()),
            status: LanguageStatus::from_raw(self.status.as_deref()),
            orthographies,
        }
    }
}

impl RawOrthography {
    /// Fill fields we don't set from the orthography we inherit from.
    ///
    /// The parent is the other language's orthography in the same script, or
    /// its first orthography if we don't name a script. Candidates are
    /// resolved before they are compared, since a parent may itself get its
    /// script by inheriting.
    fn resolve_inherit(&self, all: &IndexMap<String, RawLanguage>, depth: usize) -> RawOrthography {
        let Some(parent_code) = self.inherit.as_deref() else {
            return self.clone();
        };
        if depth >= MAX_INHERIT_DEPTH {
            warn!("Giving up on inheritance from '{parent_code}', chain too deep");
            return self.clone();
        }
        let parent = all.get(parent_code).and_then(|lang| {
            let mut candidates = lang
                .parsed_orthographies
                .iter()
                .map(|o| o.resolve_inherit(all, depth + 1));
            match self.script.as_deref() {
                Some(script) => candidates.find(|o| o.script.as_deref() == Some(script)),
                None => candidates.next(),
            }
        });
        let Some(parent) = parent else {
            warn!("Unable to inherit from '{parent_code}', no matching orthography");
            return self.clone();
        };
        RawOrthography {
            script: self.script.clone().or(parent.script),
            status: self.status.clone().or(parent.status),
            base: self.base.clone().or(parent.base),
            marks: self.marks.clone().or(parent.marks),
            numerals: self.numerals.clone().or(parent.numerals),
            punctuation: self.punctuation.clone().or(parent.punctuation),
            inherit: None,
        }
    }

    fn to_record(&self) -> Option<OrthographyRecord> {
        let script = self.script.as_deref()?.trim();
        if script.is_empty() {
            return None;
        }
        let mut record = OrthographyRecord::new(
            script,
            OrthographyStatus::from_raw(self.status.as_deref()),
            self.base.as_deref().unwrap_or_default(),
            self.marks.as_deref().unwrap_or_default(),
        );
        record.numerals = split_chars(self.numerals.as_deref().unwrap_or_default());
        record.punctuation = split_chars(self.punctuation.as_deref().unwrap_or_default());
        Some(record)
    }
}
