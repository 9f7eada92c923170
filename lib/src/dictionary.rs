extern crate hashbrown;

use std::{path::Path, str::FromStr, sync::Arc};

use hashbrown::hash_map::HashMap;

use crate::{
    error::DictionaryError,
    phoneme::{Phoneme, Pronunciation},
};

/// Source of candidate pronunciations for lowercase words.
///
/// Returns `None` for unknown words. When present, the list is non-empty and
/// ordered with the most likely pronunciation first.
pub trait PronunciationLookup {
    fn lookup(&self, word: &str) -> Option<&[Pronunciation]>;
}

impl<T: PronunciationLookup + ?Sized> PronunciationLookup for &T {
    #[inline]
    fn lookup(&self, word: &str) -> Option<&[Pronunciation]> {
        (**self).lookup(word)
    }
}

impl<T: PronunciationLookup + ?Sized> PronunciationLookup for Arc<T> {
    #[inline]
    fn lookup(&self, word: &str) -> Option<&[Pronunciation]> {
        (**self).lookup(word)
    }
}

/// In-memory pronunciation dictionary, read from the CMU dictionary format:
///
/// ```text
/// ;;; comment
/// beard B IH1 R D
/// fire F AY1 ER0
/// fire(2) F AY1 R  # variant
/// ```
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    entries: HashMap<String, Vec<Pronunciation>>,
}

impl Dictionary {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Appends a pronunciation to the word's list, after any existing ones.
    #[inline]
    pub fn insert(&mut self, word: &str, pronunciation: Pronunciation) {
        self.entries.entry_ref(word).or_default().push(pronunciation);
    }

    /// Number of distinct words.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Known words, in no particular order.
    #[inline]
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn parse(text: &str) -> Result<Self, DictionaryError> {
        let mut dictionary = Dictionary::new();
        let mut pronunciations = 0usize;

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;

            let content = match raw.find('#') {
                Some(position) => &raw[..position],
                None => raw,
            }
            .trim();

            if content.is_empty() || content.starts_with(";;;") {
                continue;
            }

            let mut fields = content.split_whitespace();
            let Some(term) = fields.next() else {
                continue;
            };

            let word = headword(term).ok_or_else(|| DictionaryError::InvalidWord {
                line,
                word: term.to_string(),
            })?;

            let phonemes = fields
                .map(Phoneme::from_str)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|source| DictionaryError::Phoneme { line, source })?;

            if phonemes.is_empty() {
                return Err(DictionaryError::MissingPronunciation { line });
            }

            let pronunciation = Pronunciation::new(phonemes)
                .map_err(|source| DictionaryError::Phoneme { line, source })?;

            dictionary.insert(&word.to_lowercase(), pronunciation);
            pronunciations += 1;
        }

        tracing::debug!(
            words = dictionary.len(),
            pronunciations,
            "parsed pronunciation dictionary"
        );

        Ok(dictionary)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let text = std::fs::read_to_string(path.as_ref())
            .map_err(|error| DictionaryError::Io(error.kind()))?;

        Self::parse(&text)
    }
}

impl PronunciationLookup for Dictionary {
    #[inline]
    fn lookup(&self, word: &str) -> Option<&[Pronunciation]> {
        self.entries.get(word).map(Vec::as_slice)
    }
}

impl FromStr for Dictionary {
    type Err = DictionaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Strips a `(N)` variant suffix: `fire(2)` -> `fire`.
fn headword(term: &str) -> Option<&str> {
    match term.strip_suffix(')') {
        Some(rest) => {
            let (word, variant) = rest.rsplit_once('(')?;
            let numeric = !variant.is_empty() && variant.chars().all(|ch| ch.is_ascii_digit());
            (numeric && !word.is_empty()).then_some(word)
        }
        None => Some(term),
    }
}
