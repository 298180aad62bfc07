mod tracking;
mod weekly_schedule;

#[rustfmt::skip]
pub use {
    tracking::OrderTrackingRepo,
    weekly_schedule::WeeklyScheduleRepo,
};
