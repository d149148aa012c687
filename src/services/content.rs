//! Static wellness content: quotes, tips, crisis lines, per-emotion resources
//! and theme presets.

use serde::Serialize;

use crate::models::emotion::EmotionLabel;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
    pub category: &'static str,
}

pub const DAILY_QUOTES: [Quote; 10] = [
    Quote {
        text: "The only way out is through. Take it one step at a time.",
        author: "Robert Frost",
        category: "perseverance",
    },
    Quote {
        text: "You don't have to see the whole staircase, just take the first step.",
        author: "Martin Luther King Jr.",
        category: "courage",
    },
    Quote {
        text: "Healing doesn't mean the damage never existed. It means the damage no longer controls our lives.",
        author: "Akshay Dubey",
        category: "healing",
    },
    Quote {
        text: "Be patient with yourself. You're doing better than you think.",
        author: "Unknown",
        category: "self-compassion",
    },
    Quote {
        text: "Your mental health is a priority, not a luxury.",
        author: "Unknown",
        category: "self-care",
    },
    Quote {
        text: "Progress is progress, no matter how small.",
        author: "Unknown",
        category: "growth",
    },
    Quote {
        text: "You are not alone in this. Reach out when you need help.",
        author: "Unknown",
        category: "connection",
    },
    Quote {
        text: "Difficult roads often lead to beautiful destinations.",
        author: "Unknown",
        category: "hope",
    },
    Quote {
        text: "Your voice matters. Your feelings are valid.",
        author: "Unknown",
        category: "validation",
    },
    Quote {
        text: "Mistakes don't make you broken, they make you human.",
        author: "Unknown",
        category: "acceptance",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WellnessTip {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub emoji: &'static str,
}

pub const WELLNESS_TIPS: [WellnessTip; 8] = [
    WellnessTip {
        title: "Practice Deep Breathing",
        description: "Try the 4-7-8 technique: Breathe in for 4 counts, hold for 7, exhale for 8.",
        category: "breathing",
        emoji: "🫁",
    },
    WellnessTip {
        title: "Take a Break",
        description: "Step away from screens for 10 minutes. Go for a short walk or get some fresh air.",
        category: "breaks",
        emoji: "🚶",
    },
    WellnessTip {
        title: "Practice Gratitude",
        description: "Write down 3 things you're grateful for today, no matter how small.",
        category: "gratitude",
        emoji: "🙏",
    },
    WellnessTip {
        title: "Move Your Body",
        description: "Do 10 minutes of stretching, yoga, or any physical activity you enjoy.",
        category: "movement",
        emoji: "🧘",
    },
    WellnessTip {
        title: "Connect with Someone",
        description: "Text a friend or family member. Reach out to someone you trust.",
        category: "connection",
        emoji: "🤝",
    },
    WellnessTip {
        title: "Journaling",
        description: "Write down your thoughts and feelings without judgment. Let it flow naturally.",
        category: "journaling",
        emoji: "📓",
    },
    WellnessTip {
        title: "Listen to Music",
        description: "Play your favorite calming or uplifting playlist.",
        category: "music",
        emoji: "🎵",
    },
    WellnessTip {
        title: "Hydrate & Nourish",
        description: "Drink water and eat something healthy. Taking care of your body matters.",
        category: "nutrition",
        emoji: "🥗",
    },
];

/// Quote at `index`, wrapping around the list.
pub fn quote_at(index: usize) -> (usize, Quote) {
    let index = index % DAILY_QUOTES.len();
    (index, DAILY_QUOTES[index])
}

pub fn tip_at(index: usize) -> (usize, WellnessTip) {
    let index = index % WELLNESS_TIPS.len();
    (index, WELLNESS_TIPS[index])
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CrisisLine {
    pub name: &'static str,
    pub description: &'static str,
    pub phone: &'static str,
    pub web: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CrisisRegion {
    pub region: &'static str,
    pub emergency_number: &'static str,
    pub lines: &'static [CrisisLine],
}

pub const EMERGENCY_NOTICE: &str =
    "If you're in immediate danger, call emergency services (911 in US, 999 in UK, 112 in India)";

pub const CRISIS_REGIONS: [CrisisRegion; 3] = [
    CrisisRegion {
        region: "us",
        emergency_number: "911",
        lines: &[
            CrisisLine {
                name: "988 Suicide & Crisis Lifeline",
                description: "Free, confidential support 24/7",
                phone: "988 or 1-800-273-8255",
                web: "988lifeline.org",
                kind: "Hotline",
            },
            CrisisLine {
                name: "Crisis Text Line",
                description: "Text HOME to 741741",
                phone: "Text-based",
                web: "crisistextline.org",
                kind: "Text",
            },
        ],
    },
    CrisisRegion {
        region: "uk",
        emergency_number: "999",
        lines: &[
            CrisisLine {
                name: "Samaritans",
                description: "Support for anyone in distress",
                phone: "116 123",
                web: "samaritans.org",
                kind: "Hotline",
            },
            CrisisLine {
                name: "Mind Crisis Support",
                description: "Information and support",
                phone: "0300 123 3393",
                web: "mind.org.uk",
                kind: "Hotline",
            },
        ],
    },
    CrisisRegion {
        region: "india",
        emergency_number: "112",
        lines: &[
            CrisisLine {
                name: "iCall Mental Health",
                description: "Helpline for emotional support",
                phone: "9152987821",
                web: "icallhelpline.org",
                kind: "Hotline",
            },
            CrisisLine {
                name: "Vandrevala Foundation",
                description: "24-hour emotional support",
                phone: "9999 77 6555",
                web: "vandrevalafoundation.org",
                kind: "Hotline",
            },
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Article,
    Meditation,
    Breathing,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoodResource {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub duration: &'static str,
}

impl MoodResource {
    pub fn kind(&self) -> ResourceKind {
        if self.title.contains("Meditation") {
            ResourceKind::Meditation
        } else if self.title.contains("Breath") {
            ResourceKind::Breathing
        } else {
            ResourceKind::Article
        }
    }
}

const fn resource(
    title: &'static str,
    description: &'static str,
    category: &'static str,
    duration: &'static str,
) -> MoodResource {
    MoodResource {
        title,
        description,
        category,
        duration,
    }
}

const HAPPY_RESOURCES: &[MoodResource] = &[
    resource("Building Healthy Relationships", "Tips for creating and maintaining supportive relationships.", "Relationships", "8 min"),
    resource("Sleep Hygiene for Better Mental Health", "How quality sleep impacts your mental wellness and recovery.", "Sleep", "6 min"),
    resource("Gratitude Meditation", "Cultivate appreciation for life's blessings.", "Beginner", "10 min"),
    resource("Energizing Breath", "Boost your vitality and maintain positive energy.", "Energy", "5 min"),
];
const SAD_RESOURCES: &[MoodResource] = &[
    resource("Understanding Depression", "Comprehensive guide to recognizing and coping with depression.", "Depression", "7 min"),
    resource("Coping with Sadness", "Healthy strategies for managing difficult emotions.", "Emotions", "6 min"),
    resource("Compassion Meditation", "Be gentle and kind to yourself during difficult times.", "Beginner", "12 min"),
    resource("Calming Breath", "Soothe your nervous system gently.", "Calm", "5 min"),
];
const ANXIOUS_RESOURCES: &[MoodResource] = &[
    resource("Managing Anxiety: Practical Strategies", "Learn evidence-based techniques to manage anxiety symptoms daily.", "Anxiety", "5 min"),
    resource("Understanding Anxiety Triggers", "Identify and manage what causes your anxiety.", "Anxiety", "6 min"),
    resource("Anxiety Relief Meditation", "Guided meditation specifically for anxiety relief.", "Anxiety", "10 min"),
    resource("4-7-8 Breathing for Anxiety", "Powerful breathing technique to calm your nervous system.", "Anxiety", "5 min"),
    resource("Box Breathing", "Military technique for instant calm.", "Stress", "3 min"),
];
const STRESSED_RESOURCES: &[MoodResource] = &[
    resource("Stress Management Techniques", "Practical tools for reducing daily stress.", "Stress", "8 min"),
    resource("Work-Life Balance", "Create boundaries for better well-being.", "Lifestyle", "7 min"),
    resource("Mindfulness Body Scan", "Connect with your body and release tension.", "Intermediate", "20 min"),
    resource("Box Breathing", "Military-used technique for stress management.", "Stress", "3 min"),
    resource("Diaphragmatic Breathing", "Learn proper deep breathing techniques.", "Stress", "7 min"),
];
const ANGRY_RESOURCES: &[MoodResource] = &[
    resource("Managing Anger Healthily", "Transform anger into constructive action.", "Anger", "6 min"),
    resource("Letting Go of Resentment", "Free yourself from negative emotions.", "Emotions", "8 min"),
    resource("Calming Meditation", "Cool down your heated emotions.", "Beginner", "10 min"),
    resource("Diaphragmatic Breathing", "Slow, deep breaths to calm anger.", "Calm", "5 min"),
    resource("Cooling Breath", "Lower your emotional temperature.", "Calm", "5 min"),
];

pub fn mood_resources(emotion: EmotionLabel) -> &'static [MoodResource] {
    match emotion {
        EmotionLabel::Happy => HAPPY_RESOURCES,
        EmotionLabel::Sad => SAD_RESOURCES,
        EmotionLabel::Anxious => ANXIOUS_RESOURCES,
        EmotionLabel::Stressed => STRESSED_RESOURCES,
        EmotionLabel::Angry => ANGRY_RESOURCES,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientPreset {
    pub name: &'static str,
    pub from: &'static str,
    pub to: &'static str,
}

pub const GRADIENT_PRESETS: [GradientPreset; 8] = [
    GradientPreset { name: "Cyan to Green", from: "#00A8D6", to: "#7AD68A" },
    GradientPreset { name: "Red to Pink", from: "#FF512F", to: "#DD2476" },
    GradientPreset { name: "Purple to Blue", from: "#667eea", to: "#764ba2" },
    GradientPreset { name: "Orange to Pink", from: "#f093fb", to: "#f5576c" },
    GradientPreset { name: "Blue to Teal", from: "#3D8FD9", to: "#00C9D6" },
    GradientPreset { name: "Sunset", from: "#fa709a", to: "#fee140" },
    GradientPreset { name: "Ocean", from: "#2E3192", to: "#1BFFFF" },
    GradientPreset { name: "Forest", from: "#134E5E", to: "#71B280" },
];

// ---------------------------------------------------------------------------
// Problem categories
// ---------------------------------------------------------------------------

/// Audience for the "what's on your mind" picker. Its cut-offs differ from
/// both [`LifeStage`](crate::models::profile::LifeStage) and the companion's
/// age groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemAudience {
    Teen,
    YoungAdult,
    Professional,
    Senior,
}

impl ProblemAudience {
    /// Under-13s fall back to the young-adult list.
    pub fn from_age(age: u32) -> Self {
        match age {
            0..=12 => Self::YoungAdult,
            13..=17 => Self::Teen,
            18..=24 => Self::YoungAdult,
            25..=49 => Self::Professional,
            _ => Self::Senior,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProblemCategory {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

const fn category(id: &'static str, label: &'static str, icon: &'static str) -> ProblemCategory {
    ProblemCategory { id, label, icon }
}

const TEEN_PROBLEMS: [ProblemCategory; 8] = [
    category("academic", "Academic Stress & Exam Pressure", "📚"),
    category("bullying", "Peer Pressure & Bullying", "👥"),
    category("social-media", "Social Media Anxiety & Comparison", "📱"),
    category("identity", "Identity & Self-Esteem Issues", "🎭"),
    category("heartbreak", "First Relationships & Heartbreak", "💔"),
    category("family", "Family Conflicts & Parental Expectations", "🏠"),
    category("gaming", "Gaming/Screen Addiction", "🎮"),
    category("anxiety", "Anxiety & Depression Symptoms", "😰"),
];

const YOUNG_ADULT_PROBLEMS: [ProblemCategory; 8] = [
    category("career", "Career Confusion & Job Search Stress", "💼"),
    category("financial", "Financial Pressure & Student Loans", "💰"),
    category("dating", "Romantic Relationships & Dating Anxiety", "❤️"),
    category("college", "College/University Adjustment Issues", "🎓"),
    category("independence", "Living Independently for First Time", "🏡"),
    category("loneliness", "Friendship Dynamics & Loneliness", "🤝"),
    category("purpose", "Purpose & Direction in Life", "🎯"),
    category("mental-health", "Mental Health (Anxiety/Depression)", "🧠"),
];

const PROFESSIONAL_PROBLEMS: [ProblemCategory; 8] = [
    category("parenting", "Parenting Challenges & Child Behavior", "👶"),
    category("marriage", "Marriage/Partnership Issues", "💑"),
    category("worklife", "Work-Life Balance Struggles", "⚖️"),
    category("money", "Financial Stress (Mortgage, EMIs, Savings)", "💵"),
    category("aging-parents", "Caring for Aging Parents", "👴"),
    category("career-change", "Career Stagnation or Change", "🔄"),
    category("postpartum", "Pregnancy/Postpartum Challenges", "🤰"),
    category("burnout", "Burnout & Exhaustion", "😓"),
];

const SENIOR_PROBLEMS: [ProblemCategory; 8] = [
    category("health", "Health Issues & Chronic Conditions", "🏥"),
    category("medication", "Medication Management Concerns", "💊"),
    category("isolation", "Loneliness & Social Isolation", "😔"),
    category("aging", "Aging & Loss of Independence", "🧓"),
    category("grief", "Grief & Loss (spouse, friends)", "💔"),
    category("retirement", "Retirement Adjustment", "🏠"),
    category("family-relationships", "Strained Family Relationships", "👨‍👩‍👧‍👦"),
    category("cognitive", "Memory & Cognitive Concerns", "🧠"),
];

pub fn problem_categories(audience: ProblemAudience) -> &'static [ProblemCategory] {
    match audience {
        ProblemAudience::Teen => &TEEN_PROBLEMS,
        ProblemAudience::YoungAdult => &YOUNG_ADULT_PROBLEMS,
        ProblemAudience::Professional => &PROFESSIONAL_PROBLEMS,
        ProblemAudience::Senior => &SENIOR_PROBLEMS,
    }
}
