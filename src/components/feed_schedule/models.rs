use chrono::{DateTime, Utc};
use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};

/// One feeding event within a day
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedingSession {
    pub id: String,
    /// Wall-clock time of day in 24-hour HH:MM format
    pub time: String,
    /// Feed units dispensed per occurrence, always positive
    pub feed_amount: f64,
}

/// Repeat period of a schedule, as understood by the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Interval {
    Daily,
    Weekly,
    Biweekly,
    FourWeekly,
}

impl Interval {
    /// Repeat period in seconds. The device re-fires each command at this
    /// interval after its first occurrence, so these are fixed durations
    /// rather than calendar arithmetic.
    pub const fn repeat_seconds(self) -> i64 {
        match self {
            Interval::Daily => 86_400,
            Interval::Weekly => 604_800,
            Interval::Biweekly => 1_209_600,
            Interval::FourWeekly => 2_419_200,
        }
    }
}

/// A recurrence rule plus the sessions it fires on each matching day
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedingSchedule {
    /// First valid occurrence; its time-of-day only matters for the
    /// same-day comparison against earlier session times
    pub start_date: DateTime<Utc>,
    /// Recurrence bound carried onto every command; open-ended when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    pub interval: Interval,
    /// Weekdays the schedule fires on, Sunday = 0 through Saturday = 6.
    /// Ignored for daily schedules.
    #[serde(default)]
    pub days_of_week: Vec<u8>,
    pub sessions: Vec<FeedingSession>,
}

/// Compiled device-facing command. Serializes as the positional 4-tuple
/// `[start, end|null, interval, amount]` the feeder firmware expects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleCommand {
    /// Epoch seconds of the first occurrence
    pub start: i64,
    /// Epoch seconds after which the device stops repeating, if bounded
    pub end: Option<i64>,
    /// Repeat period in seconds
    pub interval_seconds: i64,
    /// Feed units dispensed per occurrence
    pub feed_amount: f64,
}

impl Serialize for ScheduleCommand {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(4)?;
        tuple.serialize_element(&self.start)?;
        tuple.serialize_element(&self.end)?;
        tuple.serialize_element(&self.interval_seconds)?;
        tuple.serialize_element(&self.feed_amount)?;
        tuple.end()
    }
}

/// The soonest upcoming feeding across one or more schedules
#[derive(Debug, Clone, PartialEq)]
pub struct NextFeeding {
    pub date: DateTime<Utc>,
    pub session: FeedingSession,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_repeat_seconds() {
        assert_eq!(Interval::Daily.repeat_seconds(), 86_400);
        assert_eq!(Interval::Weekly.repeat_seconds(), 604_800);
        assert_eq!(Interval::Biweekly.repeat_seconds(), 1_209_600);
        assert_eq!(Interval::FourWeekly.repeat_seconds(), 2_419_200);
    }

    #[test]
    fn test_interval_wire_names() {
        assert_eq!(
            serde_json::to_string(&Interval::FourWeekly).unwrap(),
            "\"four-weekly\""
        );
        assert_eq!(
            serde_json::from_str::<Interval>("\"biweekly\"").unwrap(),
            Interval::Biweekly
        );
    }

    #[test]
    fn test_command_serializes_as_tuple() {
        let command = ScheduleCommand {
            start: 1_737_446_400,
            end: None,
            interval_seconds: 86_400,
            feed_amount: 2.5,
        };
        assert_eq!(
            serde_json::to_string(&command).unwrap(),
            "[1737446400,null,86400,2.5]"
        );
    }

    #[test]
    fn test_session_uses_row_field_names() {
        let session: FeedingSession =
            serde_json::from_str(r#"{"id":"s1","time":"08:00","feedAmount":2.5}"#).unwrap();
        assert_eq!(session.time, "08:00");
        assert_eq!(session.feed_amount, 2.5);
    }
}
