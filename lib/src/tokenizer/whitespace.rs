use crate::{
    token::{Token, Tokens},
    tokenizer::TextTokenizer,
};

/// Splits a line into words on any Unicode whitespace.
#[derive(Clone, Debug, Default)]
pub struct Whitespace;

impl Whitespace {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextTokenizer for Whitespace {
    fn tokenize<T: AsRef<str>>(&self, text: T) -> Tokens {
        text.as_ref().split_whitespace().map(Token::from).collect()
    }
}
