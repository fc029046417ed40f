use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Pos,
    Neg,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Pos => "pos",
            Sentiment::Neg => "neg",
            Sentiment::Neutral => "neutral",
        }
    }
}

/// Structural statistics of one analyzed text. All fields are zero when no tokens were found.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStats {
    pub word_count: usize,
    /// Code points in the untouched input.
    pub char_count: usize,
    pub sentence_count: usize,
    pub avg_word_length: f64,
    pub unique_words: usize,
    pub vocabulary_diversity: f64,
    pub avg_sentence_length: f64,
    pub emoji_count: usize,
    pub readability_score: f64,
}

impl TextStats {
    pub fn empty() -> Self { Self::default() }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub stats: TextStats,
    /// RFC 3339 instant in UTC.
    pub timestamp: String,
}
