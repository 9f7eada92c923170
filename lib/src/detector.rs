use crate::{
    dictionary::PronunciationLookup,
    error::PoemError,
    poem::{Limerick, LineExtractor},
    rhyme,
    syllable::{self, SyllableCounter},
};

/// Syllable counting, rhyme matching and limerick detection over one
/// pronunciation lookup.
///
/// The lookup is held read-only; pass `&Dictionary` or `Arc<Dictionary>` to
/// share one dictionary between detectors.
#[derive(Clone, Debug)]
pub struct LimerickDetector<L: PronunciationLookup> {
    lookup: L,
    extractor: LineExtractor,
}

impl<L: PronunciationLookup> LimerickDetector<L> {
    pub fn new(lookup: L) -> Self {
        Self::with_extractor(lookup, LineExtractor::default())
    }

    pub fn with_extractor(lookup: L, extractor: LineExtractor) -> Self {
        Self { lookup, extractor }
    }

    #[inline]
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Syllables in the shortest known pronunciation; 1 for unknown words.
    #[inline]
    pub fn syllable_count(&self, word: &str) -> usize {
        syllable::count_with(&self.lookup, word)
    }

    /// Whether two lowercase words rhyme. Unknown words never rhyme.
    #[inline]
    pub fn rhymes(&self, a: &str, b: &str) -> bool {
        rhyme::rhymes(&self.lookup, a, b)
    }

    pub fn limerick(&self, text: &str) -> Result<Limerick, PoemError> {
        self.extractor.extract(text)
    }

    /// Whether `text` is five lines whose last words follow AABBA.
    pub fn is_limerick(&self, text: &str) -> bool {
        match self.limerick(text) {
            Ok(limerick) => limerick.is_aabba(&self.lookup),
            Err(error) => {
                tracing::debug!(%error, "not a limerick candidate");
                false
            }
        }
    }
}

impl<L: PronunciationLookup> SyllableCounter for LimerickDetector<L> {
    fn count(&self, word: &str) -> usize {
        self.syllable_count(word)
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use crate::{
        detector::LimerickDetector,
        dictionary::Dictionary,
        poem::LineExtractor,
        syllable::{Spelling, SyllableCounter},
    };

    const SAMPLE: &str = "\
beard B IH1 R D
feared F IH1 R D
hen HH EH1 N
wren R EH1 N
cat K AE1 T
fire F AY1 ER0
fire(2) F AY1 R
family F AE1 M AH0 L IY0
family(2) F AE1 M L IY0
letter L EH1 T ER0
don't D OW1 N T
won't W OW1 N T
";

    const BEARD: &str = "There was an old man with a beard
Who said, 'It is just as I feared!'
Two owls and a hen
Four larks and a wren
Have all built their nests in my beard";

    fn dictionary() -> Dictionary {
        Dictionary::parse(SAMPLE).unwrap()
    }

    #[test]
    fn test_detector_is_limerick() {
        let detector = LimerickDetector::new(dictionary());

        assert!(detector.rhymes("beard", "feared"));
        assert!(detector.rhymes("hen", "wren"));
        assert!(detector.is_limerick(BEARD));
    }

    #[test]
    fn test_detector_b_rhyme_broken() {
        let detector = LimerickDetector::new(dictionary());
        assert!(!detector.is_limerick(&BEARD.replace("a hen", "a cat")));
    }

    #[test]
    fn test_detector_unknown_rhyme_word() {
        let detector = LimerickDetector::new(dictionary());
        assert!(!detector.is_limerick(&BEARD.replace("a wren", "a weird")));
    }

    #[test]
    fn test_detector_line_count_gate() {
        let detector = LimerickDetector::new(dictionary());
        let lines = BEARD.lines().collect::<Vec<_>>();

        assert!(!detector.is_limerick(&lines[..4].join("\n")));
        assert!(!detector.is_limerick(&[BEARD, "in my beard"].join("\n")));
        assert!(!detector.is_limerick(""));
    }

    #[test]
    fn test_detector_punctuated_endings() {
        let detector = LimerickDetector::new(dictionary());
        let text = BEARD.replacen("a beard", "a beard.", 1).replace("my beard", "my beard!");

        assert!(detector.is_limerick(&text));
    }

    #[test]
    fn test_detector_syllables() {
        let detector = LimerickDetector::new(dictionary());

        assert_eq!(detector.syllable_count("fire"), 2);
        assert_eq!(detector.syllable_count("family"), 2);
        assert_eq!(detector.syllable_count("letter"), 2);
        assert_eq!(detector.syllable_count("zzyzx"), 1);
        assert_eq!(detector.count("letter"), Spelling::new().count("letter"));
    }

    #[test]
    fn test_detector_apostrophes() {
        let text = "There was an old man with a beard
Who said, 'It is just as I feared!'
I said that I won't
And he said I don't
Have all built their nests in my beard";

        let stripping = LimerickDetector::new(dictionary());
        let keeping =
            LimerickDetector::with_extractor(dictionary(), LineExtractor::keep_inner_apostrophes());

        assert!(!stripping.is_limerick(text));
        assert!(keeping.is_limerick(text));
    }

    #[test]
    fn test_detector_shared_dictionary() {
        let dictionary = Arc::new(dictionary());

        let handles = (0..4)
            .map(|_| {
                let detector = LimerickDetector::new(Arc::clone(&dictionary));
                thread::spawn(move || detector.is_limerick(BEARD))
            })
            .collect::<Vec<_>>();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    #[test]
    fn test_detector_borrowed_dictionary() {
        let dictionary = dictionary();
        let first = LimerickDetector::new(&dictionary);
        let second = LimerickDetector::new(&dictionary);

        assert_eq!(first.rhymes("cat", "hen"), second.rhymes("hen", "cat"));
    }
}
