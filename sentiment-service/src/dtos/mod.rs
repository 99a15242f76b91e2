//! Request/response types for the analysis API.

use serde::{Deserialize, Serialize};

/// Inbound body for `POST /analyze`.
///
/// `review` is required; an empty string is accepted and passed through to
/// the model unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    pub review: String,
}

/// Overall polarity of a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    Mixed,
}

/// Strength of the dominant emotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionIntensity {
    Low,
    Medium,
    High,
}

/// Emotion summary returned for a review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub overall_sentiment: Sentiment,
    pub primary_emotion: String,
    pub emotion_intensity: EmotionIntensity,
    pub key_emotions: Vec<String>,
    pub brief_explanation: String,
}
