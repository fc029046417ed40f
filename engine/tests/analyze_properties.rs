use engine::{Analyzer, Sentiment, TextStats};

#[test]
fn positive_sentence() {
    let r = Analyzer::default().analyze("I love this, it is great!");
    assert_eq!(r.sentiment, Sentiment::Pos);
    assert!(r.confidence > 0.5);
    assert_eq!(r.stats.sentence_count, 1);
    assert_eq!(r.stats.word_count, 6);
}

#[test]
fn negative_sentences() {
    let r = Analyzer::default().analyze("This is bad. This is terrible.");
    assert_eq!(r.sentiment, Sentiment::Neg);
    assert_eq!(r.stats.sentence_count, 2);
    assert_eq!(r.stats.unique_words, 4);
    assert_eq!(r.stats.vocabulary_diversity, 0.67);
}

#[test]
fn emoji_only_input() {
    let r = Analyzer::default().analyze("😊😊👍");
    assert_eq!(r.stats.word_count, 3);
    assert_eq!(r.stats.emoji_count, 3);
    assert_eq!(r.stats.unique_words, 2);
    assert_eq!(r.stats.char_count, 3);
    assert_eq!(r.sentiment, Sentiment::Pos);
}

#[test]
fn case_and_punctuation_do_not_affect_matching() {
    let a = Analyzer::default();
    assert_eq!(a.analyze("GREAT!!").sentiment, Sentiment::Pos);
    assert_eq!(a.analyze("GREAT!!").confidence, a.analyze("great").confidence);
}

#[test]
fn empty_text_is_neutral_with_zero_stats() {
    let r = Analyzer::default().analyze("");
    assert_eq!(r.sentiment, Sentiment::Neutral);
    assert_eq!(r.confidence, 0.0);
    assert_eq!(r.stats, TextStats::empty());
    assert!(!r.timestamp.is_empty());
}

#[test]
fn text_without_lexicon_hits_ties_to_negative() {
    let r = Analyzer::default().analyze("The train leaves at noon.");
    assert_eq!(r.sentiment, Sentiment::Neg);
    assert_eq!(r.confidence, 0.5);
}

#[test]
fn balanced_hits_tie_to_negative() {
    let r = Analyzer::default().analyze("good but bad");
    assert_eq!(r.sentiment, Sentiment::Neg);
    assert_eq!(r.confidence, 0.5);
}

#[test]
fn punctuation_only_never_fails() {
    let r = Analyzer::default().analyze("?!... ,;");
    assert_eq!(r.stats, TextStats::empty());
    assert_eq!(r.sentiment, Sentiment::Neg);
}

#[test]
fn diversity_is_one_iff_tokens_distinct() {
    let a = Analyzer::default();
    assert_eq!(a.analyze("one two three").stats.vocabulary_diversity, 1.0);
    let repeated = a.analyze("one two one").stats.vocabulary_diversity;
    assert!(repeated < 1.0 && repeated > 0.0);
}

#[test]
fn readability_stays_bounded() {
    let a = Analyzer::default();
    let long_word = "x".repeat(500);
    let long_sentence = vec!["extraordinarily"; 400].join(" ");
    for text in [long_word.as_str(), long_sentence.as_str(), "a b c. d e f. g.", "I."] {
        let score = a.analyze(text).stats.readability_score;
        assert!((0.0..=10.0).contains(&score), "{text:?} scored {score}");
    }
    assert_eq!(a.analyze(&long_sentence).stats.readability_score, 10.0);
    assert_eq!(a.analyze("I.").stats.readability_score, 0.0);
}

#[test]
fn readability_matches_formula() {
    // 12 tokens averaging 5 chars over one sentence: (5-3)*2 + (12-10)*0.3 = 4.6
    let text = "Hello world again today while these house birds sleep under their trees";
    let r = Analyzer::default().analyze(text);
    assert_eq!(r.stats.word_count, 12);
    assert_eq!(r.stats.avg_word_length, 5.0);
    assert_eq!(r.stats.readability_score, 4.6);
}

#[test]
fn emoji_outside_the_set_is_invisible() {
    let r = Analyzer::default().analyze("ok 🚀🚀");
    assert_eq!(r.stats.word_count, 1);
    assert_eq!(r.stats.emoji_count, 0);
}

#[test]
fn repeated_analysis_is_stable() {
    let a = Analyzer::default();
    let text = "Proud of the team 🎉 but the launch was complicated.";
    let (x, y) = (a.analyze(text), a.analyze(text));
    assert_eq!(x.sentiment, y.sentiment);
    assert_eq!(x.confidence, y.confidence);
    assert_eq!(x.stats, y.stats);
}

#[test]
fn result_serializes_with_wire_names() {
    let r = Analyzer::default().analyze("Great day 😊");
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["sentiment"], "pos");
    let stats = json["stats"].as_object().unwrap();
    for key in [
        "word_count", "char_count", "sentence_count", "avg_word_length", "unique_words",
        "vocabulary_diversity", "avg_sentence_length", "emoji_count", "readability_score",
    ] {
        assert!(stats.contains_key(key), "missing {key}");
    }
    assert_eq!(stats.len(), 9);
}

#[test]
fn analyzer_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Analyzer>();
}

#[test]
fn heart_sequence_scans_as_two_unscored_code_points() {
    let a = Analyzer::default();
    let r = a.analyze("❤️");
    assert_eq!(r.sentiment, Sentiment::Neg);
    assert_eq!(r.confidence, 0.5);
    assert_eq!(r.stats.word_count, 2);
    assert_eq!(r.stats.emoji_count, 2);

    assert_eq!(a.analyze("I ❤ it").stats.emoji_count, 1);

    let sparkle = a.analyze("✨\u{fe0f} great");
    assert_eq!(sparkle.stats.word_count, 3);
    assert_eq!(sparkle.stats.emoji_count, 2);
    assert_eq!(sparkle.sentiment, Sentiment::Pos);
}

#[test]
fn exact_halves_round_to_even() {
    // 5 distinct of 8 tokens is 0.625
    let r = Analyzer::default().analyze("a b c d e a a a");
    assert_eq!(r.stats.unique_words, 5);
    assert_eq!(r.stats.vocabulary_diversity, 0.62);
    assert_eq!(engine::stats::round2(0.125), 0.12);
}
