//! Calendar-day helpers for streak accounting and display formatting.
//!
//! All streak comparisons happen at calendar-day granularity in the caller's
//! local time zone. Two instants count as the same day iff they fall on the
//! same local date; time-of-day never enters the streak logic.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone};

/// A date with no time-of-day component.
pub type CalendarDay = NaiveDate;

/// Truncate an instant to its local calendar day.
pub fn to_calendar_day<Tz: TimeZone>(instant: &DateTime<Tz>) -> CalendarDay {
    instant.date_naive()
}

/// Ordinal day within the instant's local year, in `[1, 366]`.
///
/// Used only to pick the deterministic "affirmation of the day".
pub fn day_of_year<Tz: TimeZone>(instant: &DateTime<Tz>) -> u32 {
    instant.ordinal()
}

/// Signed difference `a - b` in whole days.
///
/// `days_between(today, yesterday) == 1`.
pub fn days_between(a: CalendarDay, b: CalendarDay) -> i64 {
    (a - b).num_days()
}

/// Describe `date` relative to `today`.
///
/// "Today" / "Yesterday" / "N days ago" (2-6) / "N weeks ago" (7-29, floored),
/// otherwise the absolute `MM/DD/YYYY` form. Future dates also fall through
/// to the absolute form.
pub fn relative_description(date: CalendarDay, today: CalendarDay) -> String {
    match days_between(today, date) {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        n @ 2..=6 => format!("{n} days ago"),
        n @ 7..=29 => {
            let weeks = n / 7;
            if weeks == 1 {
                "1 week ago".to_string()
            } else {
                format!("{weeks} weeks ago")
            }
        }
        _ => format_date(date),
    }
}

/// Format as `MM/DD/YYYY`.
pub fn format_date(date: CalendarDay) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// Format as "January 1, 2023".
pub fn format_pretty_date(date: CalendarDay) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Format the time-of-day as "12:30 PM".
pub fn format_time<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    instant.naive_local().format("%-I:%M %p").to_string()
}
