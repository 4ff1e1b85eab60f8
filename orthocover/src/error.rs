use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Data(#[from] orthodata::Error),
    #[error("Unable to load UFO: {0}")]
    Ufo(#[source] Box<norad::error::FontLoadError>),
    #[error("No script named '{0}' in the language database")]
    UnknownScript(String),
    #[error("The language database has no orthographies")]
    NoScripts,
    #[error("No language '{0}' among the rows shown")]
    UnknownLanguage(String),
    #[error("failed to write to stdout or stderr: '{0}'")]
    StdioWriteFail(#[source] io::Error),
}

impl From<norad::error::FontLoadError> for Error {
    fn from(err: norad::error::FontLoadError) -> Self {
        Error::Ufo(Box::new(err))
    }
}
