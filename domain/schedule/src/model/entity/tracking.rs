use chrono::NaiveDate;
use kernel::AggregateRoot;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::vo::OrderDisplayStatus;

/// Manually maintained override of one order's reconciled status.
///
/// A non-pending record beats every other reconciliation source.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderTrackingRecord {
    pub id: Uuid,
    pub asset_tag: String,
    pub order_number: String,
    /// Monday of the schedule week the record belongs to.
    pub week_start: NaiveDate,
    pub status: OrderDisplayStatus,
    pub reason: Option<String>,
    pub recommendation: Option<String>,
}

impl AggregateRoot for OrderTrackingRecord {
    fn id(&self) -> Uuid {
        self.id
    }
}
