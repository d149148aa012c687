//! Check-in bookkeeping and badge unlocks.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::mood::MoodEntry;
use crate::models::stats::{Achievement, Badge, WellnessStats, ACHIEVEMENTS};
use crate::services::aggregator;

pub const WEEK_WARRIOR_STREAK: u32 = 7;
pub const MONTH_MASTER_STREAK: u32 = 30;
pub const JOURNAL_KEEPER_ENTRIES: usize = 10;

/// Badges earned by crossing a threshold. Pure; never removes anything.
pub fn unlocked_badges(streak: u32, total_check_ins: u32, journal_entries: usize) -> BTreeSet<Badge> {
    let mut badges = BTreeSet::new();
    if total_check_ins >= 1 {
        badges.insert(Badge::FirstStep);
    }
    if streak >= WEEK_WARRIOR_STREAK {
        badges.insert(Badge::WeekWarrior);
    }
    if streak >= MONTH_MASTER_STREAK {
        badges.insert(Badge::MonthMaster);
    }
    if journal_entries >= JOURNAL_KEEPER_ENTRIES {
        badges.insert(Badge::JournalKeeper);
    }
    badges
}

/// Merges newly unlocked badges into the current set.
pub fn merge_badges(
    current: &BTreeSet<Badge>,
    streak: u32,
    total_check_ins: u32,
    journal_entries: usize,
) -> BTreeSet<Badge> {
    current
        .union(&unlocked_badges(streak, total_check_ins, journal_entries))
        .copied()
        .collect()
}

/// Stats after one more mood save. `history` already contains the new entry.
pub fn apply_check_in(
    stats: &WellnessStats,
    history: &[MoodEntry],
    journal_entries: usize,
    today: NaiveDate,
) -> WellnessStats {
    let streak = aggregator::current_streak(history, today);
    let total_check_ins = stats.total_check_ins + 1;

    WellnessStats {
        streak,
        total_check_ins,
        badges: merge_badges(&stats.badges, streak, total_check_ins, journal_entries),
        last_check_in: Some(today),
    }
}

/// Re-evaluates badges without counting a check-in, e.g. after a journal
/// entry is written.
pub fn refresh_badges(stats: &WellnessStats, journal_entries: usize) -> WellnessStats {
    WellnessStats {
        badges: merge_badges(&stats.badges, stats.streak, stats.total_check_ins, journal_entries),
        ..stats.clone()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementBoard {
    pub stats: WellnessStats,
    pub earned: Vec<Achievement>,
    pub locked: Vec<Achievement>,
    /// Progress toward a 30-day streak, capped at 100.
    pub streak_progress: f64,
    /// Progress toward 50 check-ins, capped at 100.
    pub check_in_progress: f64,
}

impl AchievementBoard {
    pub fn new(stats: WellnessStats) -> Self {
        let (earned, locked): (Vec<Achievement>, Vec<Achievement>) = ACHIEVEMENTS
            .iter()
            .cloned()
            .partition(|a| stats.badges.contains(&a.id));

        let streak_progress = (f64::from(stats.streak) / 30.0 * 100.0).min(100.0);
        let check_in_progress = (f64::from(stats.total_check_ins) / 50.0 * 100.0).min(100.0);

        Self {
            stats,
            earned,
            locked,
            streak_progress,
            check_in_progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn history_ending(today: NaiveDate, days: i64) -> Vec<MoodEntry> {
        (0..days)
            .map(|offset| MoodEntry {
                date: today - Duration::days(offset),
                mood: 6,
                timestamp: 0,
            })
            .collect()
    }

    #[test]
    fn thresholds_unlock_badges() {
        assert!(unlocked_badges(0, 0, 0).is_empty());
        assert_eq!(unlocked_badges(1, 1, 0), BTreeSet::from([Badge::FirstStep]));
        assert_eq!(
            unlocked_badges(30, 30, 10),
            BTreeSet::from([
                Badge::FirstStep,
                Badge::WeekWarrior,
                Badge::MonthMaster,
                Badge::JournalKeeper,
            ])
        );
        assert!(!unlocked_badges(6, 6, 9).contains(&Badge::WeekWarrior));
    }

    #[test]
    fn merging_is_idempotent() {
        let current = BTreeSet::from([Badge::FirstStep]);
        let once = merge_badges(&current, 7, 12, 3);
        let twice = merge_badges(&once, 7, 12, 3);
        assert_eq!(once, twice);
        assert!(once.contains(&Badge::WeekWarrior));
    }

    #[test]
    fn lower_streak_never_revokes_badges() {
        let current = merge_badges(&BTreeSet::new(), 30, 30, 0);
        let after_gap = merge_badges(&current, 1, 31, 0);
        assert!(after_gap.contains(&Badge::MonthMaster));
        assert!(after_gap.contains(&Badge::WeekWarrior));
        assert!(after_gap.is_superset(&current));
    }

    #[test]
    fn check_in_counts_and_recomputes_streak() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
        let history = history_ending(today, 7);
        let stats = WellnessStats {
            total_check_ins: 6,
            ..WellnessStats::default()
        };

        let next = apply_check_in(&stats, &history, 0, today);
        assert_eq!(next.total_check_ins, 7);
        assert_eq!(next.streak, 7);
        assert_eq!(next.last_check_in, Some(today));
        assert!(next.badges.contains(&Badge::WeekWarrior));
    }

    #[test]
    fn journal_writes_refresh_badges_only() {
        let stats = WellnessStats {
            streak: 2,
            total_check_ins: 4,
            ..WellnessStats::default()
        };
        let refreshed = refresh_badges(&stats, 10);
        assert_eq!(refreshed.total_check_ins, 4);
        assert_eq!(refreshed.streak, 2);
        assert!(refreshed.badges.contains(&Badge::JournalKeeper));
    }

    #[test]
    fn board_splits_catalog_into_earned_and_locked() {
        let board = AchievementBoard::new(WellnessStats {
            streak: 45,
            total_check_ins: 10,
            ..WellnessStats::default()
        });
        assert_eq!(board.earned.len(), 1);
        assert_eq!(board.locked.len(), ACHIEVEMENTS.len() - 1);
        assert_eq!(board.streak_progress, 100.0);
        assert_eq!(board.check_in_progress, 20.0);
    }
}
