use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use tracing::warn;

use super::models::{FeedingSchedule, Interval, NextFeeding};
use super::time::{parse_time, resolve_local, weekday_number};

/// How many days ahead to look for a matching day before giving up. A
/// schedule with no match inside a year, such as a weekly rule with an
/// empty weekday list, is reported as having nothing upcoming.
const SCAN_HORIZON_DAYS: i64 = 365;

/// Find the soonest feeding strictly after `now`, or `None` when the
/// schedule has lapsed or nothing matches within the scan horizon.
pub fn next_feeding(
    schedule: &FeedingSchedule,
    now: DateTime<Utc>,
    tz: Tz,
) -> Option<NextFeeding> {
    // A lapsed schedule never produces an upcoming feeding
    if let Some(end) = schedule.end_date {
        if end < now {
            return None;
        }
    }

    let start_day = schedule.start_date.with_timezone(&tz).date_naive();

    // Walk from the schedule start when it lies in the future, otherwise
    // from today; candidate instants are filtered against `now` below
    let mut day = if now < schedule.start_date {
        start_day
    } else {
        now.with_timezone(&tz).date_naive()
    };

    for _ in 0..SCAN_HORIZON_DAYS {
        if day >= start_day && recurs_on(schedule, start_day, day) {
            let mut soonest: Option<NextFeeding> = None;

            for session in &schedule.sessions {
                let (hour, minute) = match parse_time(&session.time) {
                    Some(parts) => parts,
                    None => {
                        warn!(
                            "Skipping session {} with invalid time {:?}",
                            session.id, session.time
                        );
                        continue;
                    }
                };

                let date = match resolve_local(day, hour, minute, tz) {
                    Some(instant) => instant,
                    None => continue,
                };

                if date <= now {
                    continue;
                }

                if soonest.as_ref().map_or(true, |best| date < best.date) {
                    soonest = Some(NextFeeding {
                        date,
                        session: session.clone(),
                    });
                }
            }

            if soonest.is_some() {
                return soonest;
            }
        }

        day += Duration::days(1);
    }

    None
}

/// Find the soonest feeding across several schedules
pub fn next_feeding_across(
    schedules: &[FeedingSchedule],
    now: DateTime<Utc>,
    tz: Tz,
) -> Option<NextFeeding> {
    schedules
        .iter()
        .filter_map(|schedule| next_feeding(schedule, now, tz))
        .min_by_key(|next| next.date)
}

/// Whether the recurrence rule fires on the given day
fn recurs_on(schedule: &FeedingSchedule, start_day: NaiveDate, day: NaiveDate) -> bool {
    match schedule.interval {
        Interval::Daily => true,
        Interval::Weekly => on_listed_weekday(schedule, day),
        Interval::Biweekly => {
            on_listed_weekday(schedule, day) && weeks_since(start_day, day) % 2 == 0
        }
        Interval::FourWeekly => {
            on_listed_weekday(schedule, day) && weeks_since(start_day, day) % 4 == 0
        }
    }
}

fn on_listed_weekday(schedule: &FeedingSchedule, day: NaiveDate) -> bool {
    schedule.days_of_week.contains(&weekday_number(day))
}

/// Whole weeks elapsed between the schedule's start day and the candidate
fn weeks_since(start_day: NaiveDate, day: NaiveDate) -> i64 {
    (day - start_day).num_days() / 7
}
