pub mod aggregator;
pub mod companion;
pub mod content;
pub mod crisis;
pub mod detection;
pub mod expression;
pub mod gamification;
pub mod gemini;
pub mod onboarding;
pub mod text_emotion;
pub mod ticker;
