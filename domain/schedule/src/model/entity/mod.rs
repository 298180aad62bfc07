pub mod tracking;
pub mod weekly_schedule;

#[rustfmt::skip]
pub use {
    tracking::OrderTrackingRecord,
    weekly_schedule::WeeklyScheduleEntry,
};
