use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectionCategory {
    Price,
    Time,
    Authority,
    Trust,
    BrushOff,
    None,
}

impl ObjectionCategory {
    /// Categories the classifier can detect, in tie-break priority order.
    pub const DETECTABLE: [ObjectionCategory; 5] = [
        ObjectionCategory::Price,
        ObjectionCategory::Time,
        ObjectionCategory::Authority,
        ObjectionCategory::Trust,
        ObjectionCategory::BrushOff,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectionCategory::Price => "price",
            ObjectionCategory::Time => "time",
            ObjectionCategory::Authority => "authority",
            ObjectionCategory::Trust => "trust",
            ObjectionCategory::BrushOff => "brush-off",
            ObjectionCategory::None => "none",
        }
    }
}

impl fmt::Display for ObjectionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectionCategory {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "price" => Ok(ObjectionCategory::Price),
            "time" => Ok(ObjectionCategory::Time),
            "authority" => Ok(ObjectionCategory::Authority),
            "trust" => Ok(ObjectionCategory::Trust),
            "brush-off" | "brushoff" => Ok(ObjectionCategory::BrushOff),
            "none" => Ok(ObjectionCategory::None),
            other => Err(format!(
                "unknown objection category '{other}' (expected price, time, authority, trust, brush-off, or none)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueStrength {
    Weak,
    Moderate,
    Strong,
}

impl fmt::Display for ValueStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueStrength::Weak => "weak",
            ValueStrength::Moderate => "moderate",
            ValueStrength::Strong => "strong",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionQuality {
    Poor,
    Good,
    Excellent,
}

impl fmt::Display for QuestionQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuestionQuality::Poor => "poor",
            QuestionQuality::Good => "good",
            QuestionQuality::Excellent => "excellent",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructureQuality {
    Poor,
    Adequate,
    Excellent,
}

impl fmt::Display for StructureQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StructureQuality::Poor => "poor",
            StructureQuality::Adequate => "adequate",
            StructureQuality::Excellent => "excellent",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    OpenEnded,
    Hypothetical,
    Discovery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Consistent,
    Declining,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Technique {
    None,
    Basic,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effectiveness {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub category: ObjectionCategory,
    pub confidence: f64,
    pub matched_keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndicatorSignal {
    pub level: Level,
    pub indicators: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValueSignal {
    pub strength: ValueStrength,
    pub elements: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionSignal {
    pub count: usize,
    pub types: Vec<QuestionType>,
    pub quality: QuestionQuality,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSignals {
    pub empathy: IndicatorSignal,
    pub specificity: IndicatorSignal,
    pub value_proposition: ValueSignal,
    pub question_usage: QuestionSignal,
    pub confidence: Level,
    pub structure: StructureQuality,
    pub professionalism: Level,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToneScore {
    pub rating: u32,
    pub empathy: Level,
    pub confidence: Level,
    pub professionalism: Level,
    pub feedback: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClarityScore {
    pub rating: u32,
    pub specificity: Level,
    pub structure: StructureQuality,
    pub feedback: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectionHandlingScore {
    pub rating: u32,
    pub technique: Technique,
    pub effectiveness: Effectiveness,
    pub feedback: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseAnalysis {
    pub tone: ToneScore,
    pub clarity: ClarityScore,
    pub objection_handling: ObjectionHandlingScore,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthEntry {
    pub category: String,
    pub description: String,
    pub impact: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementEntry {
    pub category: String,
    pub description: String,
    pub priority: String,
    pub specific_suggestion: String,
    pub example: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissedOpportunity {
    pub description: String,
    pub better_approach: String,
    pub example: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdealResponse {
    pub text: String,
    pub explanation: String,
    pub key_techniques: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachingTips {
    pub immediate: Vec<String>,
    pub long_term: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionProgression {
    pub response_number: usize,
    pub confidence_progression: String,
    pub improvement_trend: Trend,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackReport {
    pub overall_score: u32,
    pub session_progression: SessionProgression,
    pub response_analysis: ResponseAnalysis,
    pub strengths: Vec<StrengthEntry>,
    pub improvements: Vec<ImprovementEntry>,
    pub missed_opportunities: Vec<MissedOpportunity>,
    pub ideal_response: IdealResponse,
    pub coaching_tips: CoachingTips,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnSender {
    Rep,
    Prospect,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionTurn {
    pub sender: TurnSender,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponseParts {
    pub acknowledge: String,
    pub reframe: String,
    pub engage: String,
}

impl ResponseParts {
    /// Joins acknowledge, reframe, and engage with single spaces.
    pub fn formatted(&self) -> String {
        format!("{} {} {}", self.acknowledge, self.reframe, self.engage)
    }
}
