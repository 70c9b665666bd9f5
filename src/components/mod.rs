// Export components
pub mod feed_schedule;

// Re-export the schedule compiler surface
pub use feed_schedule::{
    compile, compile_in, next_feeding, next_feeding_across, FeedingSchedule, FeedingSession,
    Interval, NextFeeding, ScheduleCommand, SchedulePayload,
};
