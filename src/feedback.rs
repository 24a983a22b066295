use tracing::debug;

use crate::features;
use crate::lexicon;
use crate::models::{
    CoachingTips, FeedbackReport, IdealResponse, ImprovementEntry, Level, MissedOpportunity,
    ObjectionCategory, ResponseAnalysis, SessionProgression, SessionTurn, StrengthEntry, Trend,
    TurnSender,
};
use crate::scoring;

const STRENGTH_THRESHOLD: u32 = 75;
const IMPROVEMENT_THRESHOLD: u32 = 70;
const COACHING_THRESHOLD: u32 = 70;

/// Builds the full coaching report for one rep response.
///
/// `history` is the caller-supplied prior conversation; only rep turns feed
/// the progression average. `response_number` is 1-based.
pub fn build_feedback(
    input: &str,
    category: ObjectionCategory,
    history: &[SessionTurn],
    response_number: usize,
) -> FeedbackReport {
    let signals = features::extract(input);
    let analysis = scoring::analyze_response(input, &signals);
    let overall_score = scoring::overall_score(&analysis);
    let progression = session_progression(input, history, response_number);

    debug!(overall_score, response_number, "feedback assembled");

    FeedbackReport {
        overall_score,
        strengths: collect_strengths(&analysis),
        improvements: collect_improvements(&analysis),
        missed_opportunities: collect_missed_opportunities(input, signals.empathy.level),
        ideal_response: ideal_response(category),
        coaching_tips: coaching_tips(overall_score, &progression),
        session_progression: progression,
        response_analysis: analysis,
    }
}

fn collect_strengths(analysis: &ResponseAnalysis) -> Vec<StrengthEntry> {
    let mut strengths = Vec::new();

    if analysis.tone.rating >= STRENGTH_THRESHOLD {
        strengths.push(StrengthEntry {
            category: "tone".to_string(),
            description: "Warm, confident delivery that builds rapport.".to_string(),
            impact: "high".to_string(),
        });
    }
    if analysis.clarity.rating >= STRENGTH_THRESHOLD {
        strengths.push(StrengthEntry {
            category: "clarity".to_string(),
            description: "Specific, well-organized explanation that is easy to follow.".to_string(),
            impact: "high".to_string(),
        });
    }
    if analysis.objection_handling.rating >= STRENGTH_THRESHOLD {
        strengths.push(StrengthEntry {
            category: "objection-handling".to_string(),
            description: "Strong use of acknowledgment and discovery to move past the objection."
                .to_string(),
            impact: "high".to_string(),
        });
    }

    strengths
}

// Objection handling deliberately emits no improvements entry of its own;
// its gaps surface through the sub-score suggestions instead.
fn collect_improvements(analysis: &ResponseAnalysis) -> Vec<ImprovementEntry> {
    let mut improvements = Vec::new();

    if analysis.tone.rating < IMPROVEMENT_THRESHOLD {
        improvements.push(ImprovementEntry {
            category: "tone".to_string(),
            description: "Responses come across flat or uncertain.".to_string(),
            priority: "high".to_string(),
            specific_suggestion: "Open by validating the concern before answering it.".to_string(),
            example: "\"I completely understand why that's top of mind for you...\"".to_string(),
        });
    }
    if analysis.clarity.rating < IMPROVEMENT_THRESHOLD {
        improvements.push(ImprovementEntry {
            category: "clarity".to_string(),
            description: "Answers stay abstract instead of concrete.".to_string(),
            priority: "high".to_string(),
            specific_suggestion: "Anchor each claim with one number or one customer example."
                .to_string(),
            example: "\"A team your size cut onboarding time 40% in the first month.\"".to_string(),
        });
    }

    improvements
}

fn collect_missed_opportunities(input: &str, empathy: Level) -> Vec<MissedOpportunity> {
    let mut missed = Vec::new();

    if empathy == Level::Low {
        missed.push(MissedOpportunity {
            description: "The prospect's concern was never acknowledged.".to_string(),
            better_approach: "Lead with a short empathy statement before making your case."
                .to_string(),
            example: "\"That's a completely fair concern, and I'm glad you raised it.\"".to_string(),
        });
    }
    if !input.contains('?') {
        missed.push(MissedOpportunity {
            description: "The response ends without a question, handing control back to nobody."
                .to_string(),
            better_approach: "Close with a discovery question that keeps the conversation moving."
                .to_string(),
            example: "\"What would solving this be worth to your team?\"".to_string(),
        });
    }

    missed
}

fn ideal_response(category: ObjectionCategory) -> IdealResponse {
    let entry = match category {
        ObjectionCategory::Price => &lexicon::IDEAL_PRICE,
        ObjectionCategory::Trust => &lexicon::IDEAL_TRUST,
        _ => &lexicon::IDEAL_GENERIC,
    };
    IdealResponse {
        text: entry.text.to_string(),
        explanation: entry.explanation.to_string(),
        key_techniques: entry.key_techniques.iter().map(|t| t.to_string()).collect(),
    }
}

fn coaching_tips(overall_score: u32, progression: &SessionProgression) -> CoachingTips {
    let mut immediate = Vec::new();

    if overall_score < COACHING_THRESHOLD {
        immediate.push(lexicon::TIP_FRAMEWORK.to_string());
        immediate.push(lexicon::TIP_START_WITH_EMPATHY.to_string());
    }
    if progression.response_number >= 3 && progression.improvement_trend == Trend::Declining {
        immediate.push(lexicon::TIP_RETURN_TO_WORKED.to_string());
    }

    CoachingTips {
        immediate,
        long_term: lexicon::LONG_TERM_TIPS.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn session_progression(
    input: &str,
    history: &[SessionTurn],
    response_number: usize,
) -> SessionProgression {
    if response_number <= 1 {
        return SessionProgression {
            response_number: response_number.max(1),
            confidence_progression: "First response recorded as your baseline.".to_string(),
            improvement_trend: Trend::Consistent,
        };
    }

    let rep_lengths: Vec<usize> = history
        .iter()
        .filter(|turn| turn.sender == TurnSender::Rep)
        .map(|turn| turn.text.chars().count())
        .collect();

    let trend = if rep_lengths.is_empty() {
        Trend::Consistent
    } else {
        let avg = rep_lengths.iter().sum::<usize>() as f64 / rep_lengths.len() as f64;
        let current = input.trim().chars().count() as f64;
        if current > avg * 1.1 {
            Trend::Improving
        } else if current < avg * 0.8 {
            Trend::Declining
        } else {
            Trend::Consistent
        }
    };

    let confidence_progression = progression_message(response_number, trend);

    SessionProgression {
        response_number,
        confidence_progression,
        improvement_trend: trend,
    }
}

fn progression_message(response_number: usize, trend: Trend) -> String {
    match (response_number, trend) {
        (2, Trend::Improving) => {
            "Clear step up from your opening response: more depth this time.".to_string()
        }
        (2, Trend::Declining) => {
            "Shorter than your opening response; keep the detail coming.".to_string()
        }
        (2, Trend::Consistent) => "Holding steady after your opening response.".to_string(),
        (3, Trend::Improving) => {
            "Three responses in and still building: your answers keep gaining substance.".to_string()
        }
        (3, Trend::Declining) => {
            "Your third response lost ground; revisit the detail of your earlier answers."
                .to_string()
        }
        (3, Trend::Consistent) => "Consistent effort across all three responses.".to_string(),
        (_, Trend::Improving) => {
            "Deep into the session and still improving: responses keep getting fuller.".to_string()
        }
        (_, Trend::Declining) => {
            "Energy is fading late in the session; shorter answers are creeping in.".to_string()
        }
        (_, Trend::Consistent) => "Steady output across a long session.".to_string(),
    }
}
