//! Keyword mood classifier for free-text check-ins.
//!
//! Categories are tested in table order and the first substring hit wins, so
//! "stressed" classifies as anxious even though the stressed list has it too.

use serde::Serialize;

use crate::models::profile::LifeStage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextEmotion {
    Happy,
    Sad,
    Anxious,
    Stressed,
    Angry,
    Calm,
}

const KEYWORDS: [(TextEmotion, &[&str]); 6] = [
    (
        TextEmotion::Happy,
        &["happy", "great", "wonderful", "excited", "joy", "amazing", "love"],
    ),
    (
        TextEmotion::Sad,
        &["sad", "down", "depressed", "lonely", "upset", "unhappy", "blue"],
    ),
    (
        TextEmotion::Anxious,
        &["anxious", "worried", "nervous", "stressed", "fear", "panic", "overwhelmed"],
    ),
    (
        TextEmotion::Stressed,
        &["stressed", "pressure", "burden", "exhausted", "tired", "drained"],
    ),
    (
        TextEmotion::Angry,
        &["angry", "frustrated", "mad", "furious", "irritated", "rage", "kill", "hate"],
    ),
    (
        TextEmotion::Calm,
        &["calm", "peaceful", "relaxed", "serene", "tranquil", "content", "silent"],
    ),
];

pub fn classify(text: &str) -> TextEmotion {
    let lower = text.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
        .map(|(emotion, _)| *emotion)
        .unwrap_or(TextEmotion::Calm)
}

impl TextEmotion {
    pub fn response(self) -> &'static str {
        match self {
            TextEmotion::Happy => "🎉 That's wonderful! Keep nurturing this positive energy.",
            TextEmotion::Sad => "💙 It's okay to feel down. Remember, this feeling is temporary.",
            TextEmotion::Anxious => "🌬️ Take a deep breath. You're stronger than you think.",
            TextEmotion::Stressed => "⚡ Let's work through this together. One step at a time.",
            TextEmotion::Angry => {
                "🔥 It's valid to feel frustrated. Let's channel this energy positively."
            }
            TextEmotion::Calm => "☮️ You're in a great place mentally. Maintain this peace.",
        }
    }

    pub fn coping_suggestions(self) -> [&'static str; 3] {
        match self {
            TextEmotion::Happy => [
                "Share your joy with others",
                "Document this positive moment",
                "Help someone else",
            ],
            TextEmotion::Sad => [
                "Reach out to a trusted friend",
                "Practice self-compassion",
                "Engage in a favorite activity",
            ],
            TextEmotion::Anxious => [
                "Practice deep breathing exercises",
                "Go for a walk in nature",
                "Try progressive muscle relaxation",
            ],
            TextEmotion::Stressed => [
                "Break tasks into smaller steps",
                "Take regular breaks",
                "Practice mindfulness meditation",
            ],
            TextEmotion::Angry => [
                "Physical exercise (running, yoga)",
                "Express your feelings through journaling",
                "Practice anger management techniques",
            ],
            TextEmotion::Calm => [
                "Maintain this peaceful state",
                "Practice gratitude meditation",
                "Share your tranquility with others",
            ],
        }
    }
}

pub fn stress_factors(stage: LifeStage) -> [&'static str; 6] {
    match stage {
        LifeStage::Adolescent => [
            "Academic pressure",
            "Peer relationships",
            "Family expectations",
            "Social media stress",
            "Body image concerns",
            "Future concerns",
        ],
        LifeStage::YoungAdult => [
            "Education/career uncertainty",
            "Financial worries",
            "Independence challenges",
            "Relationship challenges",
            "Mental health (anxiety, depression)",
            "Work-life balance",
        ],
        LifeStage::EarlyAdult => [
            "Career progression",
            "Job security",
            "Family balancing",
            "Financial planning",
            "Work-life balance",
            "Personal growth",
        ],
        LifeStage::MatureAdult => [
            "Raising children",
            "Job stability",
            "Aging parents",
            "Health concerns",
            "Long-term financial planning",
            "Life purpose",
        ],
    }
}
