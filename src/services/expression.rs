//! Maps raw face-model expression scores onto the five tracked emotions.

use crate::models::emotion::{EmotionLabel, EmotionResult, RawExpressions};

/// Weighted scores in evaluation order; this order breaks ties.
pub fn scores(expr: &RawExpressions) -> [(EmotionLabel, f64); 5] {
    [
        (EmotionLabel::Happy, expr.happy),
        (EmotionLabel::Sad, expr.sad),
        (EmotionLabel::Anxious, expr.fearful + 0.5 * expr.surprised),
        (EmotionLabel::Stressed, expr.disgusted + 0.3 * expr.neutral),
        (EmotionLabel::Angry, expr.angry),
    ]
}

/// Argmax over [`scores`], first label wins on ties. Confidence is the raw
/// score × 100 with no re-normalisation.
pub fn aggregate(expr: &RawExpressions) -> EmotionResult {
    let all = scores(expr);
    let (emotion, score) = all
        .iter()
        .skip(1)
        .fold(all[0], |best, &candidate| {
            if candidate.1 > best.1 {
                candidate
            } else {
                best
            }
        });

    EmotionResult {
        emotion,
        confidence: score * 100.0,
        emoji: emotion.emoji(),
        color: emotion.color(),
    }
}
