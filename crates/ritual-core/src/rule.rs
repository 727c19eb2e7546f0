use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A recurrence rule authored in the settings UI.
///
/// Exactly one variant is active per rule value. Weekdays are numbered
/// 0=Sunday through 6=Saturday.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecurrenceRule {
    /// Matches any date whose weekday is in `days`.
    Weekdays { days: Vec<u8> },
    /// Matches when the 1-based day-of-year is divisible by `n`. The count
    /// restarts at every year boundary rather than rolling from an anchor.
    IntervalDays { n: u32 },
    /// Matches the `week`-th (1..=5) occurrence of `weekday` in the month.
    NthWeekday { week: u8, weekday: u8 },
    /// Matches a literal day-of-month. Day 31 never matches in a shorter
    /// month; there is no clamping to month-end.
    MonthlyDate { day: u8 },
}

impl RecurrenceRule {
    /// Pure date-match predicate. Total: out-of-contract field values
    /// (e.g. `n == 0`) never match instead of panicking.
    pub fn matches(&self, date: NaiveDate) -> bool {
        match self {
            RecurrenceRule::Weekdays { days } => {
                let weekday = date.weekday().num_days_from_sunday() as u8;
                days.contains(&weekday)
            }
            RecurrenceRule::IntervalDays { n } => {
                if *n == 0 {
                    return false;
                }
                date.ordinal() % n == 0
            }
            RecurrenceRule::NthWeekday { week, weekday } => {
                let date_weekday = date.weekday().num_days_from_sunday() as u8;
                let week_of_month = (date.day() + 6) / 7;
                date_weekday == *weekday && week_of_month == u32::from(*week)
            }
            RecurrenceRule::MonthlyDate { day } => date.day() == u32::from(*day),
        }
    }
}

impl std::fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
        match self {
            RecurrenceRule::Weekdays { days } => {
                let names: Vec<&str> = days
                    .iter()
                    .map(|d| DAY_NAMES.get(usize::from(*d)).copied().unwrap_or("?"))
                    .collect();
                write!(f, "on {}", names.join(","))
            }
            RecurrenceRule::IntervalDays { n } => write!(f, "every {n} days (year-reset)"),
            RecurrenceRule::NthWeekday { week, weekday } => {
                let name = DAY_NAMES.get(usize::from(*weekday)).copied().unwrap_or("?");
                write!(f, "week {week} {name} of the month")
            }
            RecurrenceRule::MonthlyDate { day } => write!(f, "day {day} of the month"),
        }
    }
}
