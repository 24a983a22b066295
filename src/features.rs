use std::sync::OnceLock;

use regex::Regex;

use crate::lexicon;
use crate::models::{
    FeatureSignals, IndicatorSignal, Level, QuestionQuality, QuestionSignal, QuestionType,
    StructureQuality, ValueSignal, ValueStrength,
};

/// Runs all seven analyzers over one input. Each analyzer is independent and
/// pure, so the bundle is safe to compute in any order.
pub fn extract(input: &str) -> FeatureSignals {
    let normalized = input.trim().to_lowercase();
    FeatureSignals {
        empathy: analyze_empathy(&normalized),
        specificity: analyze_specificity(&normalized),
        value_proposition: analyze_value_proposition(&normalized),
        question_usage: analyze_question_usage(&normalized),
        confidence: analyze_confidence(&normalized),
        structure: analyze_structure(&normalized),
        professionalism: analyze_professionalism(&normalized),
    }
}

pub fn analyze_empathy(normalized: &str) -> IndicatorSignal {
    let indicators = matched_phrases(normalized, lexicon::EMPATHY_PHRASES);
    let level = match indicators.len() {
        0 => Level::Low,
        1 | 2 => Level::Medium,
        _ => Level::High,
    };
    IndicatorSignal { level, indicators }
}

pub fn analyze_specificity(normalized: &str) -> IndicatorSignal {
    let indicators = matched_phrases(normalized, lexicon::SPECIFICITY_INDICATORS);
    let level = match indicators.len() {
        0 => Level::Low,
        1 | 2 => Level::Medium,
        _ => Level::High,
    };
    IndicatorSignal { level, indicators }
}

pub fn analyze_value_proposition(normalized: &str) -> ValueSignal {
    let elements = matched_phrases(normalized, lexicon::VALUE_LANGUAGE);
    let strength = match elements.len() {
        0 => ValueStrength::Weak,
        1 | 2 => ValueStrength::Moderate,
        _ => ValueStrength::Strong,
    };
    ValueSignal { strength, elements }
}

pub fn analyze_question_usage(normalized: &str) -> QuestionSignal {
    let count = normalized.matches('?').count();

    let mut types = Vec::new();
    if contains_word(normalized, lexicon::OPEN_ENDED_WORDS) {
        types.push(QuestionType::OpenEnded);
    }
    if contains_word(normalized, lexicon::HYPOTHETICAL_WORDS) {
        types.push(QuestionType::Hypothetical);
    }
    if lexicon::DISCOVERY_PHRASES.iter().any(|p| normalized.contains(p)) {
        types.push(QuestionType::Discovery);
    }

    let quality = if count >= 2 && types.len() >= 2 {
        QuestionQuality::Excellent
    } else if count >= 1 && !types.is_empty() {
        QuestionQuality::Good
    } else {
        QuestionQuality::Poor
    };

    QuestionSignal { count, types, quality }
}

pub fn analyze_confidence(normalized: &str) -> Level {
    let uncertain = count_hits(normalized, lexicon::UNCERTAIN_PHRASES);
    let confident = count_hits(normalized, lexicon::CONFIDENT_PHRASES);

    if confident >= 2 && normalized.chars().count() > 50 {
        Level::High
    } else if uncertain >= 2 {
        Level::Low
    } else {
        Level::Medium
    }
}

pub fn analyze_structure(normalized: &str) -> StructureQuality {
    let sentences = normalized
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count();
    let has_transitions = transition_regex().is_match(normalized);

    if sentences >= 3 && has_transitions {
        StructureQuality::Excellent
    } else if sentences >= 2 {
        StructureQuality::Adequate
    } else {
        StructureQuality::Poor
    }
}

pub fn analyze_professionalism(normalized: &str) -> Level {
    let casual = word_hits(normalized, lexicon::CASUAL_WORDS);
    let professional = word_hits(normalized, lexicon::PROFESSIONAL_WORDS);

    if professional >= 2 && casual == 0 {
        Level::High
    } else if casual >= 2 {
        Level::Low
    } else {
        Level::Medium
    }
}

fn matched_phrases(normalized: &str, phrases: &[&str]) -> Vec<String> {
    phrases
        .iter()
        .filter(|p| normalized.contains(*p))
        .map(|p| p.to_string())
        .collect()
}

fn count_hits(normalized: &str, phrases: &[&str]) -> usize {
    phrases.iter().filter(|p| normalized.contains(*p)).count()
}

// Whole-word matching so "show" never counts as "how".
fn contains_word(normalized: &str, words: &[&str]) -> bool {
    normalized
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .any(|token| words.contains(&token))
}

fn word_hits(normalized: &str, words: &[&str]) -> usize {
    words
        .iter()
        .filter(|word| {
            normalized
                .split(|c: char| !c.is_alphanumeric() && c != '\'')
                .any(|token| token == **word)
        })
        .count()
}

fn transition_regex() -> &'static Regex {
    static TRANSITION_RE: OnceLock<Regex> = OnceLock::new();
    TRANSITION_RE.get_or_init(|| {
        Regex::new(lexicon::TRANSITION_PATTERN).expect("transition pattern is valid")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(input: &str) -> String {
        input.trim().to_lowercase()
    }

    #[test]
    fn empty_input_yields_all_low_signals() {
        let signals = extract("");
        assert_eq!(signals.empathy.level, Level::Low);
        assert_eq!(signals.specificity.level, Level::Low);
        assert_eq!(signals.value_proposition.strength, ValueStrength::Weak);
        assert_eq!(signals.question_usage.quality, QuestionQuality::Poor);
        assert_eq!(signals.confidence, Level::Medium);
        assert_eq!(signals.structure, StructureQuality::Poor);
        assert_eq!(signals.professionalism, Level::Medium);
    }

    #[test]
    fn three_empathy_phrases_rate_high() {
        let input = normalized(
            "I understand your concern, I hear you, and I appreciate you sharing that. \
             Let's discuss this further so I can help.",
        );
        let signal = analyze_empathy(&input);
        assert_eq!(signal.level, Level::High);
        assert!(signal.indicators.len() >= 3);
    }

    #[test]
    fn one_empathy_phrase_rates_medium() {
        let signal = analyze_empathy("i hear you on that point");
        assert_eq!(signal.level, Level::Medium);
        assert_eq!(signal.indicators, vec!["i hear you".to_string()]);
    }

    #[test]
    fn specificity_counts_examples_and_numbers() {
        let input = normalized(
            "For example, our data shows teams typically save 30% per month on average.",
        );
        let signal = analyze_specificity(&input);
        assert_eq!(signal.level, Level::High);
    }

    #[test]
    fn value_language_detected() {
        let signal =
            analyze_value_proposition("the roi is clear: revenue growth and real savings");
        assert_eq!(signal.strength, ValueStrength::Strong);
        assert!(signal.elements.iter().any(|e| e == "roi"));
    }

    #[test]
    fn two_questions_of_two_types_are_excellent() {
        let input = normalized("What is blocking you today? Would a pilot help?");
        let signal = analyze_question_usage(&input);
        assert_eq!(signal.count, 2);
        assert!(signal.types.contains(&QuestionType::OpenEnded));
        assert!(signal.types.contains(&QuestionType::Hypothetical));
        assert_eq!(signal.quality, QuestionQuality::Excellent);
    }

    #[test]
    fn question_words_need_word_boundaries() {
        // "show" and "shower" must not count as open-ended "how".
        let signal = analyze_question_usage("let me show you the numbers");
        assert!(signal.types.is_empty());
        assert_eq!(signal.quality, QuestionQuality::Poor);
    }

    #[test]
    fn discovery_questions_detected() {
        let signal = analyze_question_usage("have you measured that recently?");
        assert!(signal.types.contains(&QuestionType::Discovery));
        assert_eq!(signal.quality, QuestionQuality::Good);
    }

    #[test]
    fn confident_language_in_long_input_is_high() {
        let input = normalized(
            "We can absolutely deliver this, and I guarantee the rollout stays on schedule.",
        );
        assert!(input.chars().count() > 50);
        assert_eq!(analyze_confidence(&input), Level::High);
    }

    #[test]
    fn uncertain_language_is_low() {
        assert_eq!(
            analyze_confidence("i think this could maybe work for you"),
            Level::Low
        );
    }

    #[test]
    fn confident_but_short_input_is_medium() {
        let input = "definitely. absolutely.";
        assert_eq!(analyze_confidence(input), Level::Medium);
    }

    #[test]
    fn three_sentences_with_transition_are_excellent() {
        let input = normalized(
            "You raise a fair point. However, the numbers tell a different story. \
             Finally, let's look at your own data.",
        );
        assert_eq!(analyze_structure(&input), StructureQuality::Excellent);
    }

    #[test]
    fn two_sentences_without_transition_are_adequate() {
        assert_eq!(
            analyze_structure("that is fair. let me explain."),
            StructureQuality::Adequate
        );
    }

    #[test]
    fn single_fragment_is_poor_structure() {
        assert_eq!(analyze_structure("sure thing"), StructureQuality::Poor);
    }

    #[test]
    fn professional_words_without_casual_rate_high() {
        let input = "our solution is specifically built for strategic teams";
        assert_eq!(analyze_professionalism(input), Level::High);
    }

    #[test]
    fn casual_words_rate_low() {
        assert_eq!(
            analyze_professionalism("yeah it's gonna be fine"),
            Level::Low
        );
    }

    #[test]
    fn casual_words_need_word_boundaries() {
        // "number" contains "um" but is not a filler word.
        assert_eq!(analyze_professionalism("the number is solid"), Level::Medium);
    }

    #[test]
    fn extract_is_deterministic() {
        let input = "I understand. For example, teams save 30%. What would help you decide?";
        let first = extract(input);
        let second = extract(input);
        assert_eq!(first.empathy.level, second.empathy.level);
        assert_eq!(first.question_usage.count, second.question_usage.count);
        assert_eq!(first.structure, second.structure);
    }
}
