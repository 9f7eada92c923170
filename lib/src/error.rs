extern crate thiserror;

use std::io;

use thiserror::Error;

/// Phoneme or pronunciation construction error.
#[derive(Debug, Error, PartialEq)]
pub enum PhonemeError {
    #[error("Empty pronunciation")]
    Empty,

    #[error("Invalid phoneme symbol: {0:?}")]
    InvalidSymbol(String),

    #[error("Invalid stress marker: {0:?}")]
    InvalidStress(char),
}

/// Pronunciation dictionary error.
#[derive(Debug, Error, PartialEq)]
pub enum DictionaryError {
    #[error("File I/O Error: {0}")]
    Io(io::ErrorKind),

    #[error("Line {line}: entry has no pronunciation")]
    MissingPronunciation { line: usize },

    #[error("Line {line}: invalid word {word:?}")]
    InvalidWord { line: usize, word: String },

    #[error("Line {line}: {source}")]
    Phoneme {
        line: usize,
        #[source]
        source: PhonemeError,
    },
}

/// Reasons a text is not a limerick candidate.
#[derive(Debug, Error, PartialEq)]
pub enum PoemError {
    #[error("Expected 5 lines, found {0}")]
    LineCount(usize),

    #[error("Line {0} has no words")]
    EmptyLine(usize),
}
