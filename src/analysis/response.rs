use log::{error, warn};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

use super::{AnalysisError, WebSource};

const CODE_FENCE: &str = r"(?s)^```(\w*)?\s*\n?(.*?)\n?\s*```$";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SafetyRating {
    Safe,
    Caution,
    Unsafe,
}

/// Closed set of labels a model is asked to pick from
trait Vocabulary: Sized + Copy + 'static {
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;

    fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|value| value.label().eq_ignore_ascii_case(label))
    }
}

impl Vocabulary for Sentiment {
    const ALL: &'static [Self] = &[Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

impl Vocabulary for SafetyRating {
    const ALL: &'static [Self] = &[SafetyRating::Safe, SafetyRating::Caution, SafetyRating::Unsafe];

    fn label(&self) -> &'static str {
        match self {
            SafetyRating::Safe => "Safe",
            SafetyRating::Caution => "Caution",
            SafetyRating::Unsafe => "Unsafe",
        }
    }
}

/// Case-insensitive label match; anything outside the vocabulary becomes `None`
fn lenient_label<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Vocabulary,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let label = match value {
        None | Some(serde_json::Value::Null) => return Ok(None),
        Some(value) => value,
    };
    let parsed = label.as_str().and_then(T::from_label);
    if parsed.is_none() {
        warn!("Ignoring unexpected label {} in analysis response", label);
    }
    Ok(parsed)
}

/// What the model reported about a piece of sticker content; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentAnalysis {
    pub summary: Option<String>,
    pub suggested_tags: Vec<String>,
    #[serde(deserialize_with = "lenient_label")]
    pub sentiment: Option<Sentiment>,
    #[serde(deserialize_with = "lenient_label")]
    pub safety_rating: Option<SafetyRating>,
    pub sources: Vec<WebSource>,
}

/// Removes a surrounding Markdown code fence (with optional language tag)
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Ok(fence) = Regex::new(CODE_FENCE) else {
        return trimmed;
    };
    match fence.captures(trimmed).and_then(|captures| captures.get(2)) {
        Some(body) if !body.as_str().is_empty() => body.as_str().trim(),
        _ => trimmed,
    }
}

/// Parses a JSON analysis, tolerating a code fence around it
pub fn parse_analysis(text: &str) -> Result<ContentAnalysis, AnalysisError> {
    let json = strip_code_fence(text);
    serde_json::from_str(json).map_err(|err| {
        error!("❌ Failed to parse analysis response: {} (original: {:?})", err, text);
        AnalysisError::MalformedResponse(err.to_string())
    })
}
