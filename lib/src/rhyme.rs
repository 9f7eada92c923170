use crate::{
    dictionary::PronunciationLookup,
    phoneme::{Phoneme, Pronunciation},
};

/// The part of one pronunciation that takes part in rhyme comparison.
///
/// May be empty when a single-consonant pronunciation loses its onset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RhymeTail<'p>(&'p [Phoneme]);

impl<'p> RhymeTail<'p> {
    #[inline]
    pub fn phonemes(&self) -> &'p [Phoneme] {
        self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Compares the trailing `min(len)` phonemes of both tails. An empty tail
    /// only matches another empty tail.
    pub fn matches(&self, other: &RhymeTail<'_>) -> bool {
        let shared = self.len().min(other.len());

        if shared == 0 {
            return self.is_empty() && other.is_empty();
        }

        self.0[self.len() - shared..] == other.0[other.len() - shared..]
    }
}

/// Whether a word's pronunciations lose their first phoneme before
/// comparison. Decided once per word from its first pronunciation.
#[inline]
pub fn trims_onset(pronunciations: &[Pronunciation]) -> bool {
    pronunciations
        .first()
        .and_then(|pronunciation| pronunciation.first())
        .is_some_and(|phoneme| !phoneme.is_vowel())
}

pub fn rhyme_tails(pronunciations: &[Pronunciation]) -> Vec<RhymeTail<'_>> {
    let skip = usize::from(trims_onset(pronunciations));

    pronunciations
        .iter()
        .map(|pronunciation| RhymeTail(&pronunciation[skip..]))
        .collect()
}

/// True when any pair of tails from the cross product matches.
pub fn rhymes_with(a: &[Pronunciation], b: &[Pronunciation]) -> bool {
    let tails_b = rhyme_tails(b);

    rhyme_tails(a)
        .iter()
        .any(|tail_a| tails_b.iter().any(|tail_b| tail_a.matches(tail_b)))
}

/// Unknown words never rhyme, not even with themselves.
pub fn rhymes<L: PronunciationLookup + ?Sized>(lookup: &L, a: &str, b: &str) -> bool {
    match (lookup.lookup(a), lookup.lookup(b)) {
        (Some(a), Some(b)) => rhymes_with(a, b),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        dictionary::{Dictionary, PronunciationLookup},
        rhyme::{rhyme_tails, rhymes, trims_onset},
    };

    const SAMPLE: &str = "\
beard B IH1 R D
feared F IH1 R D
hen HH EH1 N
wren R EH1 N
cat K AE1 T
hat HH AE1 T
dog D AO1 G
ear IH1 R
year Y IH1 R
eye AY1
my M AY1
a AH0
a(2) EY1
the DH AH0
the(2) DH AH1
the(3) DH IY0
fire F AY1 ER0
fire(2) F AY1 R
higher HH AY1 ER0
sh SH
hush HH AH1 SH
in IH1 N
chin CH IH1 N
begin B IH0 G IH1 N
hmm HH M
hum HH AH1 M
ick IH1 K
limerick L IH1 M ER0 IH0 K
";

    fn dictionary() -> Dictionary {
        Dictionary::parse(SAMPLE).unwrap()
    }

    #[test]
    fn test_rhymes_basic_pairs() {
        let dictionary = dictionary();

        assert!(rhymes(&dictionary, "beard", "feared"));
        assert!(rhymes(&dictionary, "hen", "wren"));
        assert!(rhymes(&dictionary, "cat", "hat"));
        assert!(!rhymes(&dictionary, "cat", "dog"));
        assert!(!rhymes(&dictionary, "hen", "beard"));
    }

    #[test]
    fn test_rhymes_onset_trimmed_per_word() {
        let dictionary = dictionary();

        // `ear` starts with a vowel and is compared whole.
        assert!(rhymes(&dictionary, "ear", "year"));
        assert!(rhymes(&dictionary, "eye", "my"));
    }

    #[test]
    fn test_rhymes_any_pronunciation_pair() {
        let dictionary = dictionary();

        assert!(rhymes(&dictionary, "fire", "higher"));
        assert!(rhymes(&dictionary, "a", "the"));
    }

    #[test]
    fn test_rhymes_compares_shorter_tail_length() {
        let dictionary = dictionary();

        assert!(rhymes(&dictionary, "in", "chin"));
        assert!(rhymes(&dictionary, "in", "begin"));
        assert!(rhymes(&dictionary, "begin", "chin"));

        // Only `IH1 K` against `IH0 K` is compared; stress differs.
        assert!(!rhymes(&dictionary, "ick", "limerick"));
        assert!(!rhymes(&dictionary, "limerick", "ick"));
    }

    #[test]
    fn test_rhymes_single_phoneme_tail() {
        let dictionary = dictionary();

        // `hmm` keeps just `M`, which matches the final phoneme of `hum`.
        assert_eq!(rhyme_tails(dictionary.lookup("hmm").unwrap())[0].len(), 1);
        assert!(rhymes(&dictionary, "hmm", "hum"));
        assert!(rhymes(&dictionary, "hum", "hmm"));
        assert!(!rhymes(&dictionary, "hmm", "hen"));
    }

    #[test]
    fn test_rhymes_unknown_words() {
        let dictionary = dictionary();

        assert!(!rhymes(&dictionary, "beard", "weird"));
        assert!(!rhymes(&dictionary, "weird", "beard"));
        assert!(!rhymes(&dictionary, "weird", "weird"));
    }

    #[test]
    fn test_rhymes_empty_tail() {
        let dictionary = dictionary();
        let sh = dictionary.lookup("sh").unwrap();

        assert!(rhyme_tails(sh)[0].is_empty());
        assert!(rhymes(&dictionary, "sh", "sh"));
        assert!(!rhymes(&dictionary, "sh", "hush"));
        assert!(!rhymes(&dictionary, "hush", "sh"));
    }

    #[test]
    fn test_rhymes_symmetric() {
        let dictionary = dictionary();
        let words = [
            "beard", "feared", "hen", "wren", "cat", "hat", "dog", "ear", "year", "eye", "my",
            "a", "the", "fire", "higher", "sh", "hush", "in", "chin", "begin", "hmm", "hum",
            "ick", "limerick", "weird",
        ];

        for a in words {
            for b in words {
                assert_eq!(
                    rhymes(&dictionary, a, b),
                    rhymes(&dictionary, b, a),
                    "{a} / {b}"
                );
            }
        }
    }

    #[test]
    fn test_trims_onset_uses_first_pronunciation() {
        let dictionary = dictionary();

        assert!(trims_onset(dictionary.lookup("the").unwrap()));
        assert!(!trims_onset(dictionary.lookup("a").unwrap()));

        let tails = rhyme_tails(dictionary.lookup("a").unwrap());
        assert_eq!(tails.len(), 2);
        assert_eq!(tails[1].phonemes()[0].as_str(), "EY1");
    }
}
