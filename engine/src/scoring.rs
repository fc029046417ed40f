use crate::lexicon::Lexicon;
use crate::report::Sentiment;
use crate::tokenizer::Token;

/// Added to both accumulators so texts without lexicon hits still split 50/50.
pub const SMOOTHING: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub sentiment: Sentiment,
    pub confidence: f64,
}

/// Sum lexicon weights over `tokens` on top of [`SMOOTHING`] and classify the totals.
pub fn score(tokens: &[Token], lexicon: &Lexicon) -> Score {
    let (mut pos, mut neg) = (SMOOTHING, SMOOTHING);
    for token in tokens {
        let w = lexicon.score_of(token.as_str());
        pos += w.pos;
        neg += w.neg;
    }
    classify(pos, neg)
}

/// Positive only when strictly above one half; an exact tie is negative.
pub fn classify(pos: f64, neg: f64) -> Score {
    let total = pos + neg;
    if total == 0.0 {
        return Score { sentiment: Sentiment::Neutral, confidence: 0.5 };
    }
    let pos_prob = pos / total;
    let sentiment = if pos_prob > 0.5 { Sentiment::Pos } else { Sentiment::Neg };
    Score { sentiment, confidence: pos_prob.max(1.0 - pos_prob) }
}
