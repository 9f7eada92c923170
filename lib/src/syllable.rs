use crate::{dictionary::PronunciationLookup, phoneme::Pronunciation, util::Counter};

/// Counts syllables in a single lowercase word. Never returns zero.
pub trait SyllableCounter {
    fn count(&self, word: &str) -> usize;
}

/// Syllables of the shortest known pronunciation, or 1 for unknown words.
pub fn count_with<L: PronunciationLookup + ?Sized>(lookup: &L, word: &str) -> usize {
    lookup
        .lookup(word)
        .and_then(shortest)
        .map(Pronunciation::vowel_count)
        .unwrap_or(1)
        .max(1)
}

/// Fewest phonemes wins; ties go to the first listed.
#[inline]
pub fn shortest(pronunciations: &[Pronunciation]) -> Option<&Pronunciation> {
    pronunciations.iter().min_by_key(|pronunciation| pronunciation.len())
}

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];
const DIGRAPHS: [&str; 2] = ["au", "oo"];

/// Spelling based syllable guesser for words missing from the dictionary.
///
/// Counts vowel letters, then corrects for vowel digraphs, a silent final
/// `e`, a consonant-led `y` and a consonant-led final `le`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Spelling;

impl Spelling {
    pub fn new() -> Self {
        Self
    }
}

#[inline]
fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch)
}

impl SyllableCounter for Spelling {
    fn count(&self, word: &str) -> usize {
        let word = word.to_ascii_lowercase();
        let mut syllables = Counter::new(0usize);

        syllables.increment_by(word.chars().filter(|&ch| is_vowel(ch)).count());

        DIGRAPHS.iter().for_each(|digraph| {
            syllables.decrement_by(word.matches(digraph).count());
        });

        if word.ends_with('e') {
            syllables.decrement();
        }

        if let Some(index) = word.find('y') {
            if word[..index].chars().last().is_some_and(|ch| !is_vowel(ch)) {
                syllables.increment();
            }
        }

        if let Some(stem) = word.strip_suffix("le") {
            if stem.chars().last().is_some_and(|ch| !is_vowel(ch)) {
                syllables.increment();
            }
        }

        syllables.get().max(1)
    }
}
