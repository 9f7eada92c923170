pub mod detector;
pub mod dictionary;
pub mod error;
pub mod normalizer;
pub mod phoneme;
pub mod poem;
pub mod rhyme;
pub mod syllable;
pub mod token;
pub mod tokenizer;
pub mod util;

pub use {
    detector::LimerickDetector,
    dictionary::{Dictionary, PronunciationLookup},
    phoneme::{Phoneme, Pronunciation, Stress},
    poem::{Limerick, LineExtractor},
    syllable::{Spelling, SyllableCounter},
};
