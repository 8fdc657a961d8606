use crate::Source;
use relex::lexer::LexiconError;
use relex::nfa::{Nfa, NfaSpecError};
use relex::parser::{self, RegexError};
use std::path::{Path, PathBuf};
use std::{fs, io};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Error loading file {0}: {1}")]
    File(PathBuf, io::Error),
    #[error("Error parsing regex: {0}")]
    Regex(#[from] RegexError),
    #[error("Error loading automaton: {0}")]
    NfaSpec(#[from] NfaSpecError),
    #[error("Error loading lexicon: {0}")]
    Lexicon(#[from] LexiconError),
    #[error("No pattern matches the input at {0:?}")]
    Stuck(String),
}

pub fn read_file(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|e| Error::File(path.to_path_buf(), e))
}

impl Source {
    /// Loads the automaton, either by compiling the inline regex or by reading and
    /// validating the description file.
    pub fn load(&self) -> Result<Nfa, Error> {
        match (&self.regex, &self.nfa) {
            (Some(pattern), _) => Ok(parser::regex(pattern)?.to_nfa()),
            (_, Some(path)) => {
                let text = read_file(path)?;
                Ok(parser::nfa(&text)?.try_into()?)
            }
            _ => unreachable!("clap requires exactly one source"),
        }
    }
}
