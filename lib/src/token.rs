use std::{
    ops::{Deref, DerefMut},
    slice::IterMut,
};

/// A word token taken from a line of text.
#[derive(Clone, Debug, Default, Hash, Eq, PartialEq)]
pub struct Token(String);

impl Token {
    pub fn inner_mut(&mut self) -> &mut String {
        &mut self.0
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Token {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Token {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Token> for String {
    fn from(value: Token) -> Self {
        value.0
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Token(value)
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Token(String::from(value))
    }
}

impl AsMut<str> for Token {
    fn as_mut(&mut self) -> &mut str {
        &mut self.0
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Ordered tokens of a single line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tokens(Vec<Token>);

impl Tokens {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn last(&self) -> Option<&Token> {
        self.0.last()
    }

    /// Consumes the tokens, returning the last one.
    #[inline]
    pub fn into_last(self) -> Option<Token> {
        self.0.into_iter().last()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, Token> {
        self.0.iter_mut()
    }

    /// Drops tokens left empty by normalization.
    #[inline]
    pub fn drop_empty(&mut self) {
        self.0.retain(|token| !token.is_empty())
    }
}

impl From<Vec<Token>> for Tokens {
    fn from(value: Vec<Token>) -> Self {
        Tokens(value)
    }
}

impl FromIterator<Token> for Tokens {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Tokens(iter.into_iter().collect())
    }
}

impl IntoIterator for Tokens {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[macro_export]
macro_rules! tokens {
    ( $( $token:expr ),* $(,)? ) => {{
        $crate::token::Tokens::from(vec![
            $( $crate::token::Token::from($token) ),*
        ])
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_tokens_last() {
        let tokens = tokens!["all", "built", "their", "nests"];
        assert_eq!(tokens.last().map(|token| token.as_str()), Some("nests"));
        assert_eq!(tokens.into_last().map(String::from), Some("nests".into()));
    }

    #[test]
    fn test_tokens_drop_empty() {
        let mut tokens = tokens!["", "beard", "", ""];
        tokens.drop_empty();
        assert_eq!(tokens, tokens!["beard"]);
    }

    #[test]
    fn test_tokens_empty() {
        let tokens = tokens![];
        assert!(tokens.is_empty());
        assert_eq!(tokens.last(), None);
    }
}
