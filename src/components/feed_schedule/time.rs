use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Parse time string in HH:MM format
pub fn parse_time(time_str: &str) -> Option<(u32, u32)> {
    let parts: Vec<&str> = time_str.split(':').collect();
    if parts.len() != 2 {
        return None;
    }
    let hour = parts[0].parse::<u32>().ok()?;
    let minute = parts[1].parse::<u32>().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}

/// Weekday number with Sunday as 0, matching the stored schedule rows
pub fn weekday_number(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Resolve a calendar date plus wall-clock time in the given timezone to
/// the single UTC instant the device should fire at.
///
/// The timezone database answers directly here; daylight-saving edges are
/// the only cases needing a decision. An ambiguous local time (clocks
/// rolled back, the hour occurs twice) takes its first occurrence. A
/// nonexistent local time (clocks jumped forward over it) resolves to the
/// first valid instant after the gap.
pub fn resolve_local(date: NaiveDate, hour: u32, minute: u32, tz: Tz) -> Option<DateTime<Utc>> {
    let naive = date.and_hms_opt(hour, minute, 0)?;
    let resolved = match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => first_instant_after_gap(naive, tz)?,
    };
    Some(resolved.with_timezone(&Utc))
}

/// Same resolution as [`resolve_local`], in device epoch seconds
pub fn local_epoch(date: NaiveDate, hour: u32, minute: u32, tz: Tz) -> Option<i64> {
    resolve_local(date, hour, minute, tz).map(|dt| dt.timestamp())
}

/// Probe forward in 15-minute steps until the local clock exists again.
/// Transition gaps in the tz database never exceed two hours.
fn first_instant_after_gap(naive: NaiveDateTime, tz: Tz) -> Option<DateTime<Tz>> {
    for step in 1..=8 {
        let probe = naive + Duration::minutes(15 * step);
        if let Some(dt) = tz.from_local_datetime(&probe).earliest() {
            return Some(dt);
        }
    }
    None
}
