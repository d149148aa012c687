use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Badge {
    FirstStep,
    WeekWarrior,
    MonthMaster,
    JournalKeeper,
    MeditationPro,
    HelpingHand,
    Resilience,
    Mindful,
}

#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub id: Badge,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const ACHIEVEMENTS: [Achievement; 8] = [
    Achievement {
        id: Badge::FirstStep,
        name: "First Step",
        description: "Complete your first mood check-in",
        icon: "🎯",
    },
    Achievement {
        id: Badge::WeekWarrior,
        name: "Week Warrior",
        description: "Maintain a 7-day streak",
        icon: "⚔️",
    },
    Achievement {
        id: Badge::MonthMaster,
        name: "Month Master",
        description: "Maintain a 30-day streak",
        icon: "👑",
    },
    Achievement {
        id: Badge::JournalKeeper,
        name: "Journal Keeper",
        description: "Write 10 journal entries",
        icon: "📔",
    },
    Achievement {
        id: Badge::MeditationPro,
        name: "Meditation Pro",
        description: "Complete 10 meditations",
        icon: "🧘",
    },
    Achievement {
        id: Badge::HelpingHand,
        name: "Helping Hand",
        description: "Share support with others",
        icon: "🤝",
    },
    Achievement {
        id: Badge::Resilience,
        name: "Resilience",
        description: "Overcome a challenging mood",
        icon: "💪",
    },
    Achievement {
        id: Badge::Mindful,
        name: "Mindful",
        description: "Complete breathing exercises",
        icon: "🌿",
    },
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessStats {
    pub streak: u32,
    pub total_check_ins: u32,
    pub badges: BTreeSet<Badge>,
    pub last_check_in: Option<NaiveDate>,
}

impl Default for WellnessStats {
    fn default() -> Self {
        Self {
            streak: 0,
            total_check_ins: 0,
            badges: BTreeSet::from([Badge::FirstStep]),
            last_check_in: None,
        }
    }
}
