use crate::{
    dictionary::PronunciationLookup,
    error::PoemError,
    normalizer::{NormalizerPipeline, Punctuation},
    rhyme::rhymes,
    tokenizer::Tokenizer,
};

/// Number of lines in a limerick.
pub const LINES: usize = 5;

/// Line pairs (zero-based) that must rhyme for the AABBA scheme.
///
/// Lines 2 and 5 are only compared through line 1, and the B lines are not
/// required to differ from the A lines.
pub const AABBA: [(usize, usize); 3] = [(0, 1), (0, 4), (2, 3)];

/// Turns raw lines into rhyme words: tokenize, normalize, drop empty tokens,
/// keep the last one.
#[derive(Clone, Debug)]
pub struct LineExtractor {
    tokenizer: Tokenizer,
    pipeline: NormalizerPipeline,
}

impl LineExtractor {
    pub fn new(tokenizer: Tokenizer, pipeline: NormalizerPipeline) -> Self {
        Self {
            tokenizer,
            pipeline,
        }
    }

    /// Like the default extractor, but contractions such as `don't` keep
    /// their apostrophe.
    pub fn keep_inner_apostrophes() -> Self {
        let mut pipeline = NormalizerPipeline::new();
        pipeline.insert(Box::new(Punctuation::keep_inner_apostrophes()));

        Self::new(Tokenizer::default(), pipeline)
    }

    #[inline]
    pub fn pipeline_mut(&mut self) -> &mut NormalizerPipeline {
        &mut self.pipeline
    }

    pub fn last_word(&self, line: &str) -> Option<String> {
        let mut tokens = self.tokenizer.tokenize(line);

        if !self.pipeline.is_empty() {
            self.pipeline.run(&mut tokens);
        }

        tokens.drop_empty();
        tokens.into_last().map(String::from)
    }

    pub fn extract(&self, text: &str) -> Result<Limerick, PoemError> {
        let lines = text.trim().split('\n').collect::<Vec<_>>();

        if lines.len() != LINES {
            return Err(PoemError::LineCount(lines.len()));
        }

        let words = lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                self.last_word(line)
                    .ok_or(PoemError::EmptyLine(index + 1))
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::trace!(?words, "extracted rhyme words");

        words
            .try_into()
            .map(|words| Limerick { words })
            .map_err(|words: Vec<String>| PoemError::LineCount(words.len()))
    }
}

/// Strips `. , ' : ; ! ?` and splits on whitespace.
impl Default for LineExtractor {
    fn default() -> Self {
        let mut pipeline = NormalizerPipeline::new();
        pipeline.insert(Box::new(Punctuation::new()));

        Self::new(Tokenizer::default(), pipeline)
    }
}

/// The rhyme words of a five-line poem, one per line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Limerick {
    words: [String; LINES],
}

impl Limerick {
    #[inline]
    pub fn words(&self) -> &[String; LINES] {
        &self.words
    }

    /// Lazily yields each AABBA pair with whether it rhymes.
    pub fn checks<'a, L: PronunciationLookup + ?Sized>(
        &'a self,
        lookup: &'a L,
    ) -> impl Iterator<Item = (usize, usize, bool)> + 'a {
        AABBA.into_iter().map(move |(first, second)| {
            let rhyme = rhymes(lookup, &self.words[first], &self.words[second]);

            tracing::trace!(
                first = %self.words[first],
                second = %self.words[second],
                rhyme,
                "rhyme check"
            );

            (first, second, rhyme)
        })
    }

    pub fn is_aabba<L: PronunciationLookup + ?Sized>(&self, lookup: &L) -> bool {
        self.checks(lookup).all(|(_, _, rhyme)| rhyme)
    }
}
