use crate::models::{
    ClarityScore, Effectiveness, FeatureSignals, Level, ObjectionHandlingScore, QuestionQuality,
    ResponseAnalysis, StructureQuality, Technique, ToneScore, ValueStrength,
};

const BASE_RATING: u32 = 50;
const MAX_RATING: u32 = 100;

pub fn analyze_response(input: &str, signals: &FeatureSignals) -> ResponseAnalysis {
    let response_len = input.trim().chars().count();
    ResponseAnalysis {
        tone: score_tone(signals),
        clarity: score_clarity(signals, response_len),
        objection_handling: score_objection_handling(signals),
    }
}

pub fn score_tone(signals: &FeatureSignals) -> ToneScore {
    let mut rating = BASE_RATING;
    let mut suggestions = Vec::new();

    match signals.empathy.level {
        Level::High => rating += 25,
        Level::Medium => rating += 15,
        Level::Low => suggestions.push(
            "Acknowledge the prospect's concern before answering it.".to_string(),
        ),
    }

    if signals.confidence == Level::High {
        rating += 15;
    } else {
        suggestions.push(
            "Use more confident language: swap \"I think\" for \"I know\" or \"definitely\"."
                .to_string(),
        );
    }

    if signals.professionalism == Level::High {
        rating += 10;
    } else {
        suggestions.push(
            "Keep the wording professional; replace casual fillers with precise terms.".to_string(),
        );
    }

    let rating = rating.min(MAX_RATING);
    let feedback = format!(
        "Your tone shows {} empathy, {} confidence, and {} professionalism.",
        signals.empathy.level, signals.confidence, signals.professionalism
    );

    ToneScore {
        rating,
        empathy: signals.empathy.level,
        confidence: signals.confidence,
        professionalism: signals.professionalism,
        feedback,
        suggestions,
    }
}

pub fn score_clarity(signals: &FeatureSignals, response_len: usize) -> ClarityScore {
    let mut rating = BASE_RATING;
    let mut suggestions = Vec::new();

    match signals.specificity.level {
        Level::High => rating += 25,
        Level::Medium => rating += 15,
        Level::Low => suggestions.push(
            "Add a concrete example, number, or customer story.".to_string(),
        ),
    }

    if signals.structure == StructureQuality::Excellent {
        rating += 15;
    } else {
        suggestions.push(
            "Structure the response: acknowledge, explain, then ask.".to_string(),
        );
    }

    if response_len > 100 {
        rating += 10;
    }
    if response_len < 50 {
        suggestions.push(
            "Provide more detail; very short answers can read as dismissive.".to_string(),
        );
    }

    let rating = rating.min(MAX_RATING);
    let feedback = format!(
        "Your response shows {} specificity with {} structure.",
        signals.specificity.level, signals.structure
    );

    ClarityScore {
        rating,
        specificity: signals.specificity.level,
        structure: signals.structure,
        feedback,
        suggestions,
    }
}

pub fn score_objection_handling(signals: &FeatureSignals) -> ObjectionHandlingScore {
    let mut rating = BASE_RATING;
    let mut suggestions = Vec::new();

    if signals.empathy.level == Level::High && signals.specificity.level == Level::High {
        rating += 30;
    } else if signals.empathy.level >= Level::Medium && signals.specificity.level >= Level::Medium {
        rating += 20;
    } else {
        suggestions.push(
            "Use the Acknowledge-Reframe-Engage framework: validate the concern, reposition it, then ask a question."
                .to_string(),
        );
    }

    if signals.question_usage.quality == QuestionQuality::Excellent {
        rating += 15;
    } else {
        suggestions.push(
            "Ask a discovery question to keep the conversation moving.".to_string(),
        );
    }

    if signals.value_proposition.strength == ValueStrength::Strong {
        rating += 5;
    } else {
        suggestions.push(
            "Tie your answer back to ROI or a measurable outcome.".to_string(),
        );
    }

    let rating = rating.min(MAX_RATING);

    let technique = if rating >= 80 {
        Technique::Advanced
    } else if rating >= 60 {
        Technique::Basic
    } else {
        Technique::None
    };
    let effectiveness = if rating >= 80 {
        Effectiveness::High
    } else if rating >= 60 {
        Effectiveness::Moderate
    } else {
        Effectiveness::Low
    };

    let feedback = format!(
        "Objection handling rates {rating}/100 with {} question quality and {} value framing.",
        signals.question_usage.quality, signals.value_proposition.strength
    );

    ObjectionHandlingScore {
        rating,
        technique,
        effectiveness,
        feedback,
        suggestions,
    }
}

/// Unweighted mean of the three sub-ratings, rounded to nearest.
pub fn overall_score(analysis: &ResponseAnalysis) -> u32 {
    let total = analysis.tone.rating + analysis.clarity.rating + analysis.objection_handling.rating;
    (f64::from(total) / 3.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features;

    fn signals_for(input: &str) -> FeatureSignals {
        features::extract(input)
    }

    #[test]
    fn empty_input_scores_base_fifty_everywhere() {
        let signals = signals_for("");
        let analysis = analyze_response("", &signals);
        assert_eq!(analysis.tone.rating, 50);
        assert_eq!(analysis.clarity.rating, 50);
        assert_eq!(analysis.objection_handling.rating, 50);
        assert_eq!(overall_score(&analysis), 50);
    }

    #[test]
    fn high_empathy_pushes_tone_to_at_least_75() {
        let input = "I understand your concern, I hear you, and I appreciate you sharing that. \
                     Let's discuss this further so I can help.";
        let tone = score_tone(&signals_for(input));
        assert_eq!(tone.empathy, Level::High);
        assert!(tone.rating >= 75, "rating was {}", tone.rating);
    }

    #[test]
    fn short_response_gets_detail_suggestion() {
        let input = "sounds good";
        let clarity = score_clarity(&signals_for(input), input.chars().count());
        assert!(clarity
            .suggestions
            .iter()
            .any(|s| s.contains("Provide more detail")));
    }

    #[test]
    fn long_specific_response_scores_high_clarity() {
        let input = "That's a fair question. For example, our data shows teams typically save \
                     30% per month. However, the bigger win is time. Finally, the rollout takes \
                     one week.";
        let clarity = score_clarity(&signals_for(input), input.chars().count());
        // 50 + 25 (high specificity) + 15 (excellent structure) + 10 (length) = 100
        assert_eq!(clarity.rating, 100);
    }

    #[test]
    fn ratings_never_exceed_100() {
        let input = "I understand your concern and I appreciate you sharing it, it makes sense. \
                     For example, our data shows teams typically save 30% per month on average. \
                     However, the real value is revenue growth and efficiency, and I guarantee it. \
                     Absolutely. What would you need to see? Have you measured the cost today?";
        let signals = signals_for(input);
        let analysis = analyze_response(input, &signals);
        assert!(analysis.tone.rating <= 100);
        assert!(analysis.clarity.rating <= 100);
        assert!(analysis.objection_handling.rating <= 100);
    }

    #[test]
    fn medium_empathy_and_specificity_earn_partial_credit() {
        let input = "I hear you. For example, the rollout took one week at a similar firm.";
        let score = score_objection_handling(&signals_for(input));
        // 50 + 20 (both at least medium); no excellent questions, no strong value
        assert_eq!(score.rating, 70);
        assert_eq!(score.technique, Technique::Basic);
        assert_eq!(score.effectiveness, Effectiveness::Moderate);
    }

    #[test]
    fn weak_handling_suggests_the_framework() {
        let score = score_objection_handling(&signals_for("ok"));
        assert_eq!(score.rating, 50);
        assert_eq!(score.technique, Technique::None);
        assert_eq!(score.effectiveness, Effectiveness::Low);
        assert!(score
            .suggestions
            .iter()
            .any(|s| s.contains("Acknowledge-Reframe-Engage")));
    }

    #[test]
    fn overall_is_rounded_mean() {
        let input = "I hear you. For example, the rollout took one week at a similar firm.";
        let signals = signals_for(input);
        let analysis = analyze_response(input, &signals);
        let expected = (f64::from(
            analysis.tone.rating + analysis.clarity.rating + analysis.objection_handling.rating,
        ) / 3.0)
            .round() as u32;
        assert_eq!(overall_score(&analysis), expected);
    }
}
