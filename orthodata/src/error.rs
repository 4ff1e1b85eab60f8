use std::{io, path::PathBuf};

use thiserror::Error;

use crate::glyphdata::GlyphDataError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io failed for '{path}': '{source}'")]
    FileIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Unable to parse language database '{path}': '{source}'")]
    LanguageDatabase {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Unable to parse glyph data '{path}': '{source}'")]
    GlyphData {
        path: PathBuf,
        #[source]
        source: GlyphDataError,
    },
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
