mod compiler;
pub mod models;
mod next;
mod payload;
pub mod time;

pub use compiler::{compile, compile_in};
pub use models::{FeedingSchedule, FeedingSession, Interval, NextFeeding, ScheduleCommand};
pub use next::{next_feeding, next_feeding_across};
pub use payload::SchedulePayload;
