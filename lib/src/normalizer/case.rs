use crate::{normalizer::TextNormalizer, token::Tokens};

/// ASCII lowercasing, matching the lowercase keys of the dictionary.
#[derive(Clone, Debug, Default)]
pub struct Lowercase;

impl Lowercase {
    pub fn new() -> Self {
        Self
    }
}

impl TextNormalizer for Lowercase {
    fn normalize(&self, tokens: &mut Tokens) {
        tokens.iter_mut().for_each(|token| {
            token.as_mut().make_ascii_lowercase();
        })
    }
}
