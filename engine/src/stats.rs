use crate::report::TextStats;
use crate::tokenizer::{count_emoji, EmojiSet, Token};
use std::collections::HashSet;

pub const READABILITY_MAX: f64 = 10.0;

/// Compute [`TextStats`] for `text` from its tokens and sentences. No tokens means all zeros.
pub fn compute(text: &str, tokens: &[Token], sentences: &[&str], emoji: &EmojiSet) -> TextStats {
    if tokens.is_empty() {
        return TextStats::empty();
    }

    let word_count = tokens.len();
    let sentence_count = sentences.len();
    let avg_word_length = tokens.iter().map(Token::char_len).sum::<usize>() as f64 / word_count as f64;
    let unique_words = tokens.iter().map(Token::as_str).collect::<HashSet<_>>().len();
    let vocabulary_diversity = unique_words as f64 / word_count as f64;
    let avg_sentence_length = if sentence_count > 0 { word_count as f64 / sentence_count as f64 } else { 0.0 };

    TextStats {
        word_count,
        char_count: text.chars().count(),
        sentence_count,
        avg_word_length: round2(avg_word_length),
        unique_words,
        vocabulary_diversity: round2(vocabulary_diversity),
        avg_sentence_length: round2(avg_sentence_length),
        emoji_count: count_emoji(text, emoji),
        readability_score: round2(readability(avg_word_length, avg_sentence_length)),
    }
}

/// 0..=10, higher is harder. Each factor is capped at 5 from above only; the sum is clamped.
pub fn readability(avg_word_length: f64, avg_sentence_length: f64) -> f64 {
    let word_factor = ((avg_word_length - 3.0) * 2.0).min(5.0);
    let sentence_factor = ((avg_sentence_length - 10.0) * 0.3).min(5.0);
    (word_factor + sentence_factor).clamp(0.0, READABILITY_MAX)
}

/// Two decimals, exact halves to the even digit.
pub fn round2(x: f64) -> f64 { (x * 100.0).round_ties_even() / 100.0 }
