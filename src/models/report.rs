use serde::{Deserialize, Serialize};

/// Identifies which pipeline produced a score.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ComparisonMethod {
    /// Pixel-level PSNR after resizing.
    Pixel,
    /// OCR text extraction followed by semantic similarity.
    Text,
}

/// A record of one similarity comparison between two images.
///
/// Scores from the two methods live on different scales and are not
/// comparable with each other: PSNR is unbounded and logarithmic, the text
/// score is a bounded model output.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ComparisonReport {
    /// Which pipeline computed the score.
    pub method: ComparisonMethod,
    /// Path of the reference image (defines the target resolution).
    pub reference: String,
    /// Path of the candidate image.
    pub candidate: String,
    /// The similarity score. Serialized as a string so that an infinite
    /// PSNR survives the JSON round trip.
    #[serde(with = "score_as_string")]
    pub score: f64,
    /// When the comparison ran (RFC 3339 format).
    pub generated_at: String,
}

impl ComparisonReport {
    /// Creates a report stamped with the current time.
    pub fn new(method: ComparisonMethod, reference: &str, candidate: &str, score: f64) -> Self {
        Self {
            method,
            reference: reference.to_string(),
            candidate: candidate.to_string(),
            score,
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Serializes the report to a pretty-printed JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a `ComparisonReport` from a JSON string.
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }
}

mod score_as_string {
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(score: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&score.to_string())
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<f64>().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_creation() {
        let report = ComparisonReport::new(ComparisonMethod::Pixel, "V.png", "ZC1.png", 32.5);
        assert_eq!(report.method, ComparisonMethod::Pixel);
        assert_eq!(report.reference, "V.png");
        assert_eq!(report.score, 32.5);
        assert!(!report.generated_at.is_empty());
    }

    #[test]
    fn test_report_serialization() {
        let report = ComparisonReport::new(ComparisonMethod::Text, "V.png", "LJ1.png", 0.97);
        let json = report.to_json().unwrap();
        let deserialized = ComparisonReport::from_json(&json).unwrap();

        assert_eq!(deserialized.method, ComparisonMethod::Text);
        assert_eq!(deserialized.candidate, "LJ1.png");
        assert!((deserialized.score - 0.97).abs() < 1e-9);
    }

    #[test]
    fn test_infinite_score_round_trips() {
        let report =
            ComparisonReport::new(ComparisonMethod::Pixel, "a.png", "a.png", f64::INFINITY);
        let json = report.to_json().unwrap();
        let deserialized = ComparisonReport::from_json(&json).unwrap();
        assert!(deserialized.score.is_infinite());
    }
}
