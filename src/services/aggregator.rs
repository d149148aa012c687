//! Mood history aggregation: the 7-day chart, trend, best day and streaks.
//!
//! Everything here is a pure function of the history and the given `today`.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::models::mood::MoodEntry;

pub const WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySlot {
    pub date: NaiveDate,
    /// Short weekday name, e.g. "Mon".
    pub day: String,
    pub average: Option<f64>,
    pub entries: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodSummary {
    pub days: Vec<DaySlot>,
    pub trend: f64,
    pub best_day: Option<DaySlot>,
    pub average: Option<f64>,
    pub average_label: Option<&'static str>,
    pub streak: u32,
    pub longest_streak: u32,
}

/// One slot per calendar day from `today - 6` through `today`, averaging
/// same-day entries.
pub fn weekly_slots(history: &[MoodEntry], today: NaiveDate) -> Vec<DaySlot> {
    (0..WINDOW_DAYS)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            let moods: Vec<f64> = history
                .iter()
                .filter(|e| e.date == date)
                .map(|e| f64::from(e.mood))
                .collect();
            let average = if moods.is_empty() {
                None
            } else {
                Some(moods.iter().sum::<f64>() / moods.len() as f64)
            };
            DaySlot {
                date,
                day: date.format("%a").to_string(),
                average,
                entries: moods.len(),
            }
        })
        .collect()
}

/// Last populated slot minus first populated slot.
pub fn trend(slots: &[DaySlot]) -> f64 {
    let mut populated = slots.iter().filter_map(|s| s.average);
    let Some(first) = populated.next() else {
        return 0.0;
    };
    match populated.last() {
        Some(last) => last - first,
        None => 0.0,
    }
}

/// Highest average; the earliest slot wins a tie.
pub fn best_day(slots: &[DaySlot]) -> Option<&DaySlot> {
    let mut best: Option<(&DaySlot, f64)> = None;
    for slot in slots {
        if let Some(avg) = slot.average {
            if best.map_or(true, |(_, top)| avg > top) {
                best = Some((slot, avg));
            }
        }
    }
    best.map(|(slot, _)| slot)
}

/// Consecutive check-in days ending today, or yesterday when today has no
/// entry yet. Any older gap means the streak is broken.
pub fn current_streak(history: &[MoodEntry], today: NaiveDate) -> u32 {
    let days: BTreeSet<NaiveDate> = history.iter().map(|e| e.date).collect();

    let mut check_date = if days.contains(&today) {
        today
    } else {
        today - Duration::days(1)
    };

    let mut streak = 0u32;
    while days.contains(&check_date) {
        streak += 1;
        check_date -= Duration::days(1);
    }
    streak
}

pub fn longest_streak(history: &[MoodEntry]) -> u32 {
    let days: BTreeSet<NaiveDate> = history.iter().map(|e| e.date).collect();

    let mut longest = 0u32;
    let mut streak = 0u32;
    let mut prev: Option<NaiveDate> = None;

    for date in days {
        streak = match prev {
            Some(p) if date == p + Duration::days(1) => streak + 1,
            _ => 1,
        };
        longest = longest.max(streak);
        prev = Some(date);
    }
    longest
}

pub fn mood_label(value: f64) -> &'static str {
    if value <= 3.0 {
        "Very Low"
    } else if value <= 5.0 {
        "Low"
    } else if value <= 7.0 {
        "Moderate"
    } else if value <= 9.0 {
        "Good"
    } else {
        "Excellent"
    }
}

pub fn summarize(history: &[MoodEntry], today: NaiveDate) -> MoodSummary {
    let days = weekly_slots(history, today);

    let in_window: Vec<f64> = history
        .iter()
        .filter(|e| e.date <= today && e.date > today - Duration::days(WINDOW_DAYS))
        .map(|e| f64::from(e.mood))
        .collect();
    let average = if in_window.is_empty() {
        None
    } else {
        Some(in_window.iter().sum::<f64>() / in_window.len() as f64)
    };

    MoodSummary {
        trend: trend(&days),
        best_day: best_day(&days).cloned(),
        average,
        average_label: average.map(mood_label),
        streak: current_streak(history, today),
        longest_streak: longest_streak(history),
        days,
    }
}
