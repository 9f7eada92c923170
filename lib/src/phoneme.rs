use std::{
    fmt::{Display, Formatter},
    ops::Deref,
    slice::Iter,
    str::FromStr,
};

use crate::error::PhonemeError;

/// Stress level carried by a vowel-like phoneme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stress {
    Unstressed,
    Primary,
    Secondary,
}

impl Stress {
    #[inline]
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '0' => Some(Stress::Unstressed),
            '1' => Some(Stress::Primary),
            '2' => Some(Stress::Secondary),
            _ => None,
        }
    }
}

/// A single ARPAbet phoneme, e.g. `HH` or `EH1`.
///
/// Vowel-like phonemes end in a stress digit; consonants are bare symbols.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Phoneme(String);

impl Phoneme {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The symbol without its stress digit.
    #[inline]
    pub fn symbol(&self) -> &str {
        self.0.trim_end_matches(|ch: char| ch.is_ascii_digit())
    }

    #[inline]
    pub fn stress(&self) -> Option<Stress> {
        self.0.chars().last().and_then(Stress::from_digit)
    }

    #[inline]
    pub fn is_vowel(&self) -> bool {
        self.stress().is_some()
    }
}

impl FromStr for Phoneme {
    type Err = PhonemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (symbol, stress) = match s.chars().last() {
            Some(last) if last.is_ascii_digit() => (&s[..s.len() - 1], Some(last)),
            Some(_) => (s, None),
            None => return Err(PhonemeError::InvalidSymbol(String::new())),
        };

        if symbol.is_empty() || !symbol.chars().all(|ch| ch.is_ascii_uppercase()) {
            return Err(PhonemeError::InvalidSymbol(s.to_string()));
        }

        if let Some(digit) = stress {
            Stress::from_digit(digit).ok_or(PhonemeError::InvalidStress(digit))?;
        }

        Ok(Phoneme(s.to_string()))
    }
}

impl AsRef<str> for Phoneme {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Phoneme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One candidate pronunciation of a word. Never empty.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Pronunciation(Vec<Phoneme>);

impl Pronunciation {
    pub fn new(phonemes: Vec<Phoneme>) -> Result<Self, PhonemeError> {
        if phonemes.is_empty() {
            return Err(PhonemeError::Empty);
        }

        Ok(Self(phonemes))
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, Phoneme> {
        self.0.iter()
    }

    /// Number of vowel-like phonemes.
    #[inline]
    pub fn vowel_count(&self) -> usize {
        self.iter().filter(|phoneme| phoneme.is_vowel()).count()
    }
}

impl Deref for Pronunciation {
    type Target = [Phoneme];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for Pronunciation {
    type Err = PhonemeError;

    /// Parses whitespace separated phonemes, e.g. `"B IH1 R D"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let phonemes = s
            .split_whitespace()
            .map(Phoneme::from_str)
            .collect::<Result<Vec<_>, _>>()?;

        Pronunciation::new(phonemes)
    }
}

impl Display for Pronunciation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut iter = self.iter();

        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
        }

        iter.try_for_each(|phoneme| write!(f, " {phoneme}"))
    }
}
