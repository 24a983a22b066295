use tracing::debug;

use crate::lexicon::{self, CATEGORY_PATTERNS, KEYWORD_WEIGHT, PHRASE_WEIGHT};
use crate::models::{ClassificationResult, ObjectionCategory};

/// Classifies one utterance into an objection category.
///
/// Total over any input: empty or unmatched text comes back as
/// `ObjectionCategory::None` with confidence 0.
pub fn detect(input: &str) -> ClassificationResult {
    let normalized = input.trim().to_lowercase();
    let word_count = normalized.split_whitespace().count();

    let mut matched_keywords: Vec<String> = Vec::new();
    let mut winner = ObjectionCategory::None;
    let mut top_score = 0u32;

    for patterns in CATEGORY_PATTERNS {
        let mut score = 0u32;

        for &phrase in patterns.phrases {
            if normalized.contains(phrase) {
                score += PHRASE_WEIGHT;
                push_unique(&mut matched_keywords, phrase);
            }
        }
        for &keyword in patterns.keywords {
            if normalized.contains(keyword) {
                score += KEYWORD_WEIGHT;
                push_unique(&mut matched_keywords, keyword);
            }
        }

        // Strictly greater, so the earlier category keeps ties.
        if score > top_score {
            top_score = score;
            winner = patterns.category;
        }
    }

    let raw_confidence = if top_score == 0 || word_count == 0 {
        0.0
    } else {
        (f64::from(top_score) / (word_count as f64 * 0.5)).min(1.0)
    };

    // Below-threshold matches are demoted to none with zero confidence;
    // matched keywords are still reported.
    let (category, confidence) = if raw_confidence > lexicon::CONFIDENCE_THRESHOLD {
        (winner, raw_confidence)
    } else {
        (ObjectionCategory::None, 0.0)
    };

    debug!(%category, confidence, word_count, "objection classified");

    ClassificationResult {
        category,
        confidence,
        matched_keywords,
    }
}

fn push_unique(matched: &mut Vec<String>, pattern: &str) {
    if !matched.iter().any(|m| m.as_str() == pattern) {
        matched.push(pattern.to_string());
    }
}
