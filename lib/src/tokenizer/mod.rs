mod whitespace;

pub use whitespace::Whitespace;

use crate::token::Tokens;

#[derive(Clone, Debug)]
pub enum Tokenizer {
    Whitespace(Whitespace),
}

impl Tokenizer {
    pub fn tokenize(&self, text: &str) -> Tokens {
        match self {
            Tokenizer::Whitespace(tokenizer) => tokenizer.tokenize(text),
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer::Whitespace(Whitespace::new())
    }
}

pub trait TextTokenizer {
    fn tokenize<T: AsRef<str>>(&self, text: T) -> Tokens;
}
