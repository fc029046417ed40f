use crate::lexicon::Lexicon;
use crate::report::{AnalysisResult, Sentiment, TextStats};
use crate::scoring;
use crate::stats;
use crate::tokenizer::{split_sentences, tokenize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Scores sentiment and computes text statistics against one read-only [`Lexicon`].
///
/// Holds no per-call state, so a single instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    lexicon: Lexicon,
}

impl Analyzer {
    pub fn new(lexicon: Lexicon) -> Self { Self { lexicon } }

    pub fn lexicon(&self) -> &Lexicon { &self.lexicon }

    pub fn analyze(&self, text: &str) -> AnalysisResult {
        self.analyze_at(text, OffsetDateTime::now_utc())
    }

    /// An absent text is analyzed as the empty string.
    pub fn analyze_opt(&self, text: Option<&str>) -> AnalysisResult {
        self.analyze(text.unwrap_or_default())
    }

    /// Analyze `text` stamping `at` instead of the current instant.
    pub fn analyze_at(&self, text: &str, at: OffsetDateTime) -> AnalysisResult {
        let timestamp = at.format(&Rfc3339).unwrap_or_else(|_| "".into());
        if text.is_empty() {
            return AnalysisResult {
                sentiment: Sentiment::Neutral,
                confidence: 0.0,
                stats: TextStats::empty(),
                timestamp,
            };
        }

        let emoji = self.lexicon.emoji();
        let tokens = tokenize(text, emoji);
        let sentences = split_sentences(text);
        let score = scoring::score(&tokens, &self.lexicon);
        let stats = stats::compute(text, &tokens, &sentences, emoji);
        tracing::debug!(
            tokens = tokens.len(),
            sentences = sentences.len(),
            sentiment = score.sentiment.as_str(),
            confidence = score.confidence,
            "analyzed text"
        );

        AnalysisResult { sentiment: score.sentiment, confidence: score.confidence, stats, timestamp }
    }
}
