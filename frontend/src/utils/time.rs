use chrono::{Datelike, Local, NaiveDate};

use crate::config;

pub fn today() -> NaiveDate {
    config::current()
        .reference_date
        .unwrap_or_else(|| Local::now().date_naive())
}

/// "Apr 5, 2025"
pub fn format_long(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// "Apr 5"
pub fn format_short(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

pub fn format_optional_long(date: Option<NaiveDate>) -> String {
    date.map(format_long).unwrap_or_else(|| "N/A".into())
}

pub fn relative_day_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".into(),
        1 => "Tomorrow".into(),
        -1 => "Yesterday".into(),
        _ => format_long(date),
    }
}

pub fn parse_input_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(30)
}
