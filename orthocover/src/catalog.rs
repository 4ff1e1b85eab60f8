//! The scripts in a language database, most widely used first.

use indexmap::{IndexMap, IndexSet};
use orthodata::{LanguageDatabase, Script};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptEntry {
    pub script: Script,
    /// Sum of the known speaker counts of languages written in this script.
    pub speakers: u64,
}

/// Every script that appears in a database, ranked by speakers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptCatalog {
    entries: Vec<ScriptEntry>,
}

impl ScriptCatalog {
    /// Rank scripts by the total speakers of the languages written in them.
    ///
    /// A language counts once towards each script it has an orthography in,
    /// however many orthographies it has in that script; unknown speaker
    /// counts add nothing. Equal totals keep the order in which scripts first
    /// appear in the database.
    ///
    /// Counting per orthography instead would rank a script higher for every
    /// alternative spelling system of a language, e.g. German with two Latin
    /// orthographies adding its speakers to Latin twice.
    pub fn new(database: &LanguageDatabase) -> Self {
        let mut speakers: IndexMap<Script, u64> = IndexMap::new();
        for lang in database.iter() {
            let scripts: IndexSet<&Script> = lang.orthographies.iter().map(|o| &o.script).collect();
            for script in scripts {
                *speakers.entry(script.clone()).or_default() += lang.speakers.count_or_zero();
            }
        }
        let mut entries: Vec<_> = speakers
            .into_iter()
            .map(|(script, speakers)| ScriptEntry { script, speakers })
            .collect();
        entries.sort_by(|a, b| b.speakers.cmp(&a.speakers));
        ScriptCatalog { entries }
    }

    pub fn entries(&self) -> &[ScriptEntry] {
        &self.entries
    }

    /// The script with the most speakers.
    pub fn default_script(&self) -> Option<&Script> {
        self.entries.first().map(|entry| &entry.script)
    }

    pub fn get(&self, name: &str) -> Option<&ScriptEntry> {
        self.entries.iter().find(|entry| entry.script == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
