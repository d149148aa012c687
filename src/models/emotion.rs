use serde::{Deserialize, Serialize};

/// Raw per-expression probabilities produced by the client-side face model.
///
/// Missing fields default to zero. Values are not required to sum to one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawExpressions {
    pub neutral: f64,
    pub happy: f64,
    pub sad: f64,
    pub angry: f64,
    pub fearful: f64,
    pub disgusted: f64,
    pub surprised: f64,
}

impl RawExpressions {
    /// Checks every probability is a finite number in `[0, 1]`.
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("neutral", self.neutral),
            ("happy", self.happy),
            ("sad", self.sad),
            ("angry", self.angry),
            ("fearful", self.fearful),
            ("disgusted", self.disgusted),
            ("surprised", self.surprised),
        ];
        for (name, value) in fields {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(format!("Expression '{name}' must be between 0 and 1"));
            }
        }
        Ok(())
    }
}

/// One captured frame. `expressions` is absent when no face was found.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FaceFrame {
    #[serde(default)]
    pub expressions: Option<RawExpressions>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmotionLabel {
    Happy,
    Sad,
    Anxious,
    Stressed,
    Angry,
}

impl EmotionLabel {
    pub fn emoji(self) -> &'static str {
        match self {
            EmotionLabel::Happy => "😊",
            EmotionLabel::Sad => "😢",
            EmotionLabel::Anxious => "😰",
            EmotionLabel::Stressed => "😫",
            EmotionLabel::Angry => "😠",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            EmotionLabel::Happy => "text-green-600",
            EmotionLabel::Sad => "text-blue-600",
            EmotionLabel::Anxious => "text-yellow-600",
            EmotionLabel::Stressed => "text-orange-600",
            EmotionLabel::Angry => "text-red-600",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "happy" => Some(EmotionLabel::Happy),
            "sad" => Some(EmotionLabel::Sad),
            "anxious" => Some(EmotionLabel::Anxious),
            "stressed" => Some(EmotionLabel::Stressed),
            "angry" => Some(EmotionLabel::Angry),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionResult {
    pub emotion: EmotionLabel,
    /// Score × 100. Not re-normalised, so it can exceed 100.
    pub confidence: f64,
    pub emoji: &'static str,
    pub color: &'static str,
}
