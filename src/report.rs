use std::fmt::Write;

use chrono::NaiveDate;

use crate::classifier;
use crate::features;
use crate::feedback;
use crate::models::{FeedbackReport, ObjectionCategory, SessionTurn, TurnSender};
use crate::scoring;

#[derive(Debug, Clone)]
pub struct TurnScore {
    pub response_number: usize,
    pub category: ObjectionCategory,
    pub confidence: f64,
    pub tone: u32,
    pub clarity: u32,
    pub objection_handling: u32,
    pub overall: u32,
}

/// Scores every rep turn in order. The objection category for each turn is
/// detected from the prospect turn immediately before it, falling back to
/// classifying the rep's own text when the session opens with the rep.
pub fn score_turns(turns: &[SessionTurn]) -> Vec<TurnScore> {
    let mut scores = Vec::new();
    let mut response_number = 0usize;

    for (index, turn) in turns.iter().enumerate() {
        if turn.sender != TurnSender::Rep {
            continue;
        }
        response_number += 1;

        let objection_source = turns[..index]
            .iter()
            .rev()
            .find(|t| t.sender == TurnSender::Prospect)
            .map(|t| t.text.as_str())
            .unwrap_or(&turn.text);
        let classification = classifier::detect(objection_source);

        let signals = features::extract(&turn.text);
        let analysis = scoring::analyze_response(&turn.text, &signals);

        scores.push(TurnScore {
            response_number,
            category: classification.category,
            confidence: classification.confidence,
            tone: analysis.tone.rating,
            clarity: analysis.clarity.rating,
            objection_handling: analysis.objection_handling.rating,
            overall: scoring::overall_score(&analysis),
        });
    }

    scores
}

pub fn summarize_categories(scores: &[TurnScore]) -> Vec<(ObjectionCategory, usize)> {
    let mut map: std::collections::HashMap<ObjectionCategory, usize> =
        std::collections::HashMap::new();

    for score in scores {
        *map.entry(score.category).or_insert(0) += 1;
    }

    let mut summaries: Vec<(ObjectionCategory, usize)> = map.into_iter().collect();
    summaries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.as_str().cmp(b.0.as_str())));
    summaries
}

fn final_turn_feedback(turns: &[SessionTurn]) -> Option<(usize, FeedbackReport)> {
    let (last_index, last_rep) = turns
        .iter()
        .enumerate()
        .rev()
        .find(|(_, t)| t.sender == TurnSender::Rep)?;

    let response_number = turns[..=last_index]
        .iter()
        .filter(|t| t.sender == TurnSender::Rep)
        .count();
    let objection_source = turns[..last_index]
        .iter()
        .rev()
        .find(|t| t.sender == TurnSender::Prospect)
        .map(|t| t.text.as_str())
        .unwrap_or(&last_rep.text);
    let category = classifier::detect(objection_source).category;

    Some((
        response_number,
        feedback::build_feedback(&last_rep.text, category, &turns[..last_index], response_number),
    ))
}

pub fn build_report(turns: &[SessionTurn], generated_on: NaiveDate) -> String {
    let scores = score_turns(turns);
    let summaries = summarize_categories(&scores);

    let mut output = String::new();

    let _ = writeln!(output, "# Session Coaching Report");
    let _ = writeln!(
        output,
        "Generated {} across {} rep responses",
        generated_on,
        scores.len()
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Response Scores");

    if scores.is_empty() {
        let _ = writeln!(output, "No rep responses in this transcript.");
    } else {
        for score in scores.iter() {
            let _ = writeln!(
                output,
                "- Response {}: {} objection (confidence {:.2}) overall {} (tone {}, clarity {}, handling {})",
                score.response_number,
                score.category,
                score.confidence,
                score.overall,
                score.tone,
                score.clarity,
                score.objection_handling
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Objection Mix");

    if summaries.is_empty() {
        let _ = writeln!(output, "No objections classified in this transcript.");
    } else {
        for (category, count) in summaries.iter() {
            let _ = writeln!(output, "- {category}: {count} responses");
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Session Averages");

    if scores.is_empty() {
        let _ = writeln!(output, "Nothing to average.");
    } else {
        let count = scores.len() as f64;
        let mean = |pick: fn(&TurnScore) -> u32| {
            scores.iter().map(|s| f64::from(pick(s))).sum::<f64>() / count
        };
        let _ = writeln!(output, "- Overall: {:.1}", mean(|s| s.overall));
        let _ = writeln!(output, "- Tone: {:.1}", mean(|s| s.tone));
        let _ = writeln!(output, "- Clarity: {:.1}", mean(|s| s.clarity));
        let _ = writeln!(
            output,
            "- Objection handling: {:.1}",
            mean(|s| s.objection_handling)
        );
    }

    if let Some((response_number, report)) = final_turn_feedback(turns) {
        let _ = writeln!(output);
        let _ = writeln!(output, "## Final Response Coaching (response {response_number})");
        let _ = writeln!(output, "{}", report.session_progression.confidence_progression);

        if !report.strengths.is_empty() {
            let _ = writeln!(output);
            let _ = writeln!(output, "Strengths:");
            for strength in report.strengths.iter() {
                let _ = writeln!(output, "- {}: {}", strength.category, strength.description);
            }
        }
        if !report.improvements.is_empty() {
            let _ = writeln!(output);
            let _ = writeln!(output, "Improvements:");
            for improvement in report.improvements.iter() {
                let _ = writeln!(
                    output,
                    "- {}: {} {}",
                    improvement.category, improvement.description, improvement.specific_suggestion
                );
            }
        }

        let _ = writeln!(output);
        let _ = writeln!(output, "Ideal response for the final objection:");
        let _ = writeln!(output, "> {}", report.ideal_response.text);
    }

    output
}
