use crate::{normalizer::TextNormalizer, token::Tokens};

/// Marks removed from rhyme words.
pub const LINE_PUNCTUATION: [char; 7] = ['.', ',', '\'', ':', ';', '!', '?'];

const APOSTROPHE: char = '\'';

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Apostrophes {
    /// Remove every apostrophe: `don't` becomes `dont`.
    #[default]
    Strip,

    /// Remove apostrophes only at the edges of a token, so quotes go and
    /// contractions such as `don't` survive.
    KeepInner,
}

/// Strips the fixed mark set `. , ' : ; ! ?` from every token.
#[derive(Clone, Debug, Default)]
pub struct Punctuation {
    apostrophes: Apostrophes,
}

impl Punctuation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keep_inner_apostrophes() -> Self {
        Self {
            apostrophes: Apostrophes::KeepInner,
        }
    }
}

impl TextNormalizer for Punctuation {
    fn normalize(&self, tokens: &mut Tokens) {
        tokens.iter_mut().for_each(|token| match self.apostrophes {
            Apostrophes::Strip => {
                token.retain(|ch| !LINE_PUNCTUATION.contains(&ch));
            }
            Apostrophes::KeepInner => {
                token.retain(|ch| ch == APOSTROPHE || !LINE_PUNCTUATION.contains(&ch));

                let trimmed = token.trim_matches(APOSTROPHE);
                if trimmed.len() != token.len() {
                    let trimmed = trimmed.to_string();
                    *token.inner_mut() = trimmed;
                }
            }
        });
    }
}
