use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

lazy_static! {
    static ref SENTENCE_BREAK: Regex = Regex::new(r"[.!?]+").expect("valid regex");
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Maximal run of word characters, lower-cased.
    Word(String),
    /// One recognized emoji code point.
    Emoji(String),
}

impl Token {
    pub fn as_str(&self) -> &str {
        match self {
            Token::Word(s) | Token::Emoji(s) => s,
        }
    }

    /// Length in code points.
    pub fn char_len(&self) -> usize { self.as_str().chars().count() }

    pub fn is_emoji(&self) -> bool { matches!(self, Token::Emoji(_)) }
}

/// Letters, digits and underscore.
pub fn is_word_char(c: char) -> bool { c.is_alphanumeric() || c == '_' }

/// Closed set of emoji code points the scanner recognizes. Each code point is its own
/// token, so a sequence such as `❤️` scans as `❤` followed by U+FE0F.
#[derive(Debug, Clone, Default)]
pub struct EmojiSet {
    symbols: BTreeSet<char>,
}

impl EmojiSet {
    pub fn new<I: IntoIterator<Item = char>>(symbols: I) -> Self {
        Self { symbols: symbols.into_iter().collect() }
    }

    /// Every code point of every term in `terms`.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(terms.into_iter().flat_map(|t| t.as_ref().chars().collect::<Vec<_>>()))
    }

    pub fn contains(&self, symbol: char) -> bool { self.symbols.contains(&symbol) }

    pub fn len(&self) -> usize { self.symbols.len() }

    pub fn is_empty(&self) -> bool { self.symbols.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ { self.symbols.iter().copied() }
}

/// Scan lower-cased `text` left to right into word and emoji tokens. Anything else is skipped.
pub fn tokenize(text: &str, emoji: &EmojiSet) -> Vec<Token> {
    let lowered = text.to_lowercase();
    let mut tokens = Vec::new();
    let mut rest = lowered.as_str();
    while let Some(c) = rest.chars().next() {
        if is_word_char(c) {
            let end = rest.find(|c: char| !is_word_char(c)).unwrap_or(rest.len());
            tokens.push(Token::Word(rest[..end].to_string()));
            rest = &rest[end..];
        } else {
            if emoji.contains(c) {
                tokens.push(Token::Emoji(c.to_string()));
            }
            rest = &rest[c.len_utf8()..];
        }
    }
    tokens
}

/// Split on runs of `.`, `!` and `?`, trimming pieces and dropping empty ones.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Occurrences of recognized emoji in the raw text, independent of tokenization.
pub fn count_emoji(text: &str, emoji: &EmojiSet) -> usize {
    text.chars().filter(|c| emoji.contains(*c)).count()
}
