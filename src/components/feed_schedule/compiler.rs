use chrono::Duration;
use chrono_tz::Tz;
use tracing::{debug, warn};

use super::models::{FeedingSchedule, Interval, ScheduleCommand};
use super::time::{local_epoch, parse_time, weekday_number};
use crate::error::{timezone_error, FeederResult};

/// Expand schedules into device commands, interpreting wall-clock times in
/// the named IANA timezone. Use `"UTC"` when no timezone is configured.
pub fn compile(
    schedules: &[FeedingSchedule],
    timezone: &str,
) -> FeederResult<Vec<ScheduleCommand>> {
    let tz: Tz = timezone.parse().map_err(|_| timezone_error(timezone))?;
    Ok(compile_in(schedules, tz))
}

/// Expand schedules into device commands in an already-resolved timezone.
///
/// Output order is schedules as given, then weekdays as listed in each
/// schedule, then sessions as listed. The device receives only the first
/// occurrence per (weekday, session) pair and repeats it at the command's
/// interval, so no further occurrences are enumerated here.
pub fn compile_in(schedules: &[FeedingSchedule], tz: Tz) -> Vec<ScheduleCommand> {
    let mut commands = Vec::new();

    for schedule in schedules {
        expand_schedule(schedule, tz, &mut commands);
    }

    debug!(
        "Compiled {} schedule(s) into {} device command(s)",
        schedules.len(),
        commands.len()
    );

    commands
}

/// Expand a single schedule, appending one command per session (daily) or
/// per (weekday, session) pair (weekly family).
fn expand_schedule(schedule: &FeedingSchedule, tz: Tz, commands: &mut Vec<ScheduleCommand>) {
    let interval_seconds = schedule.interval.repeat_seconds();

    // Calendar days are taken in the target zone; the stored instants are UTC
    let start_day = schedule.start_date.with_timezone(&tz).date_naive();
    let end_day = schedule.end_date.map(|end| end.with_timezone(&tz).date_naive());

    match schedule.interval {
        Interval::Daily => {
            // Every day matches, so the first occurrence is the start date
            // itself and the weekday list is ignored
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

                let start = match local_epoch(start_day, hour, minute, tz) {
                    Some(epoch) => epoch,
                    None => continue,
                };

                // The end bound reuses the session's own time-of-day on the
                // end date's calendar day, not the stored end time-of-day
                let end = end_day.and_then(|day| local_epoch(day, hour, minute, tz));

                commands.push(ScheduleCommand {
                    start,
                    end,
                    interval_seconds,
                    feed_amount: session.feed_amount,
                });
            }
        }
        Interval::Weekly | Interval::Biweekly | Interval::FourWeekly => {
            let start_weekday = weekday_number(start_day);

            for &weekday in &schedule.days_of_week {
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

                    // First calendar day on or after the start whose weekday
                    // matches the target
                    let days_ahead =
                        (i64::from(weekday) - i64::from(start_weekday)).rem_euclid(7);
                    let mut first_day = start_day + Duration::days(days_ahead);

                    let mut start = match local_epoch(first_day, hour, minute, tz) {
                        Some(epoch) => epoch,
                        None => continue,
                    };

                    // Same-day session earlier than the schedule's own start
                    // instant would fire in the past; push it a full week out.
                    // A session exactly at the start instant stays put.
                    if days_ahead == 0 && start < schedule.start_date.timestamp() {
                        first_day += Duration::days(7);
                        start = match local_epoch(first_day, hour, minute, tz) {
                            Some(epoch) => epoch,
                            None => continue,
                        };
                    }

                    // Shared across weekdays: only the session time varies
                    let end = end_day.and_then(|day| local_epoch(day, hour, minute, tz));

                    commands.push(ScheduleCommand {
                        start,
                        end,
                        interval_seconds,
                        feed_amount: session.feed_amount,
                    });
                }
            }
        }
    }
}
