use chrono::NaiveDate;
use kernel::AggregateRoot;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// # Weekly schedule entry
///
/// The orders planned for one asset on one calendar day. Lookups go through
/// (asset tag, day); the id only names the row.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyScheduleEntry {
    pub id: Uuid,
    pub asset_tag: String,
    pub day: NaiveDate,
    pub orders: Vec<PlannedOrder>,
    /// Rolled-up status for the asset's whole day.
    #[serde(default)]
    pub asset_status: ScheduleStatus,
}

/// One planned order on the schedule.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlannedOrder {
    pub order_number: String,
    pub order_type: String,
    pub description: String,
    #[serde(default)]
    pub status: ScheduleStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
    #[default]
    Pending,
    Completed,
    /// A release closed the ticket with part of the checklist undone.
    CompletedPartial,
}

impl WeeklyScheduleEntry {
    pub fn order_mut(&mut self, order_number: &str) -> Option<&mut PlannedOrder> {
        self.orders.iter_mut().find(|el| el.order_number == order_number)
    }
}

impl AggregateRoot for WeeklyScheduleEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}
