use crate::tokenizer::{is_word_char, EmojiSet};
use std::collections::HashMap;

pub const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "fantastic",
    "happy", "joy", "beautiful", "perfect", "love", "best", "brilliant",
    "awesome", "outstanding", "superb", "delightful", "incredible",
    "magnificent", "splendid", "success", "positive", "win", "winning",
    "excited", "thrilled", "proud", "blessed", "grateful", "thankful",
    "efficient", "effective", "innovative", "creative", "inspiring",
    "motivated", "dedicated", "accomplished", "achieved", "succeeded",
    "improved", "enhanced", "recommended", "praised", "appreciated",
    "supported", "helped",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "horrible", "awful", "worst", "hate", "sad",
    "angry", "upset", "disappointing", "poor", "ugly", "disgusting",
    "dreadful", "unpleasant", "fail", "failure", "negative", "lose",
    "losing", "worse", "problem", "frustrated", "annoyed", "unhappy",
    "miserable", "wrong", "difficult", "tough", "complicated", "confusing",
    "inefficient", "ineffective", "problematic", "concerning", "worried",
    "anxious", "stressed", "damaged", "broken", "failed", "wasted",
    "ruined", "destroyed",
];

pub const POSITIVE_EMOJI: &[&str] = &["😊", "😃", "😄", "👍", "❤️", "🌟", "✨", "💪", "👏", "🎉"];

pub const NEGATIVE_EMOJI: &[&str] = &["😠", "😢", "😭", "👎", "💔", "😤", "😫", "😩", "😰", "😱"];

/// Weight every bundled term carries.
pub const DEFAULT_WEIGHT: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Weights {
    pub pos: f64,
    pub neg: f64,
}

impl Weights {
    pub const ZERO: Weights = Weights { pos: 0.0, neg: 0.0 };
}

/// Read-only token -> polarity weight table.
///
/// Word terms are stored lower-cased. The code points of terms without any word character
/// make up the recognized emoji set used by the tokenizer. A multi code point term such as
/// `❤️` keeps its entry here but is scanned one code point at a time, so it never scores.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: HashMap<String, Weights>,
    emoji: EmojiSet,
}

impl Lexicon {
    pub fn builder() -> LexiconBuilder { LexiconBuilder::default() }

    /// Build from two term lists, every term weighted [`DEFAULT_WEIGHT`].
    pub fn from_terms<P, N, S>(positive: P, negative: N) -> Self
    where
        P: IntoIterator<Item = S>,
        N: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = Self::builder();
        for term in positive {
            builder.insert(term.as_ref(), Polarity::Positive, DEFAULT_WEIGHT);
        }
        for term in negative {
            builder.insert(term.as_ref(), Polarity::Negative, DEFAULT_WEIGHT);
        }
        builder.build()
    }

    /// The built-in English word and emoji lists.
    pub fn bundled() -> Self {
        let positive = POSITIVE_WORDS.iter().chain(POSITIVE_EMOJI);
        let negative = NEGATIVE_WORDS.iter().chain(NEGATIVE_EMOJI);
        Self::from_terms(positive, negative)
    }

    /// Weights for `token`; unknown tokens score zero on both sides.
    pub fn score_of(&self, token: &str) -> Weights {
        self.entries.get(token).copied().unwrap_or(Weights::ZERO)
    }

    pub fn emoji(&self) -> &EmojiSet { &self.emoji }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn entries(&self) -> impl Iterator<Item = (&str, Weights)> + '_ {
        self.entries.iter().map(|(term, w)| (term.as_str(), *w))
    }
}

impl Default for Lexicon {
    fn default() -> Self { Self::bundled() }
}

#[derive(Debug, Default)]
pub struct LexiconBuilder {
    entries: HashMap<String, Weights>,
}

impl LexiconBuilder {
    /// Set the weight of `term` for one polarity. Repeating a term overwrites, it never accumulates.
    pub fn insert(&mut self, term: &str, polarity: Polarity, weight: f64) -> &mut Self {
        let key = term.trim().to_lowercase();
        if key.is_empty() {
            tracing::warn!("skipping empty lexicon term");
            return self;
        }
        let slot = self.entries.entry(key).or_default();
        match polarity {
            Polarity::Positive => slot.pos = weight,
            Polarity::Negative => slot.neg = weight,
        }
        self
    }

    pub fn build(self) -> Lexicon {
        let mut symbols = Vec::new();
        for term in self.entries.keys() {
            let word_chars = term.chars().filter(|c| is_word_char(*c)).count();
            if word_chars == 0 {
                symbols.push(term.as_str());
            } else if word_chars != term.chars().count() {
                tracing::warn!(term = %term, "lexicon term mixes word and symbol characters and can never match a token");
            }
        }
        let emoji = EmojiSet::from_terms(symbols);
        Lexicon { entries: self.entries, emoji }
    }
}
