//! Display Formatting
//!
//! Date, time, and address formatting for infection cards. Timestamps are
//! unix seconds; the viewer's zone is passed in as minutes east of UTC so the
//! formatting itself stays pure and testable off-browser.

use chrono::{DateTime, Datelike, FixedOffset, Timelike};

/// "Weekday, Month Dth", e.g. "Sunday, March 5th"
pub fn format_date(timestamp: i64, offset_minutes: i32) -> String {
    let Some(dt) = local_datetime(timestamp, offset_minutes) else {
        return "Unknown".to_string();
    };

    let day = dt.day();
    format!(
        "{}, {} {}{}",
        dt.format("%A"),
        dt.format("%B"),
        day,
        ordinal_suffix(day)
    )
}

/// "h:mm AM/PM (zone)", e.g. "8:07 PM (UTC-4)"
pub fn format_time(timestamp: i64, offset_minutes: i32) -> String {
    let Some(dt) = local_datetime(timestamp, offset_minutes) else {
        return "Unknown".to_string();
    };

    let hours = dt.hour();
    let am_pm = if hours >= 12 { "PM" } else { "AM" };
    let hours12 = if hours % 12 == 0 { 12 } else { hours % 12 };

    format!(
        "{}:{:02} {} ({})",
        hours12,
        dt.minute(),
        am_pm,
        zone_label(offset_minutes)
    )
}

/// Shorten a wallet address for narrow layouts
pub fn abbreviate_address(address: &str) -> String {
    match address.get(..16) {
        Some(head) if address.len() > 16 => format!("{}...", head),
        _ => address.to_string(),
    }
}

fn local_datetime(timestamp: i64, offset_minutes: i32) -> Option<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(offset_minutes * 60)?;
    DateTime::from_timestamp(timestamp, 0).map(|utc| utc.with_timezone(&offset))
}

fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

fn zone_label(offset_minutes: i32) -> String {
    if offset_minutes == 0 {
        return "UTC".to_string();
    }
    let sign = if offset_minutes < 0 { '-' } else { '+' };
    let hours = offset_minutes.abs() / 60;
    let minutes = offset_minutes.abs() % 60;
    if minutes == 0 {
        format!("UTC{}{}", sign, hours)
    } else {
        format!("UTC{}{}:{:02}", sign, hours, minutes)
    }
}
