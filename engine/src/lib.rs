//! Lexicon-based sentiment scoring and descriptive text statistics.

pub mod analyzer;
pub mod lexicon;
pub mod persist;
pub mod report;
pub mod scoring;
pub mod stats;
pub mod tokenizer;

pub use analyzer::Analyzer;
pub use lexicon::{Lexicon, Polarity, Weights};
pub use report::{AnalysisResult, Sentiment, TextStats};
pub use tokenizer::{EmojiSet, Token};
