use chrono::{DateTime, Utc};
use kernel::AggregateRoot;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::entity::ticket::MaintenanceType;

/// Immutable snapshot written when a ticket is closed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseRecord {
    pub id: Uuid,
    pub ticket_id: Uuid,
    pub asset_tag: String,
    pub maintenance_type: MaintenanceType,
    pub shift_letter: String,
    pub released_at: DateTime<Utc>,
    pub allocated_worker_names: Vec<String>,
    pub activities_performed: String,
    pub orders_completed: Vec<String>,
    pub orders_not_completed: Vec<NotCompletedOrder>,
    pub outcome_class: OutcomeClass,
    pub release_status: ReleaseStatus,
    pub schedule_link_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NotCompletedOrder {
    pub order_number: String,
    pub reason: String,
    pub recommendation: String,
}

/// How much of a preventive checklist the release actually covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeClass {
    /// The ticket carried no checklist (corrective work).
    #[default]
    NotApplicable,
    /// Every checklist order done.
    Total,
    /// At least one order pending or not completed.
    Partial,
}

impl OutcomeClass {
    pub fn release_status(&self) -> ReleaseStatus {
        match self {
            Self::NotApplicable | Self::Total => ReleaseStatus::Released,
            Self::Partial => ReleaseStatus::ReleasedWithPendingItems,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseStatus {
    #[default]
    Released,
    ReleasedWithPendingItems,
}

impl ReleaseRecord {
    /// Whether the record's completed or not-completed lists name this order.
    pub fn mentions_order(&self, order_number: &str) -> bool {
        self.orders_completed.iter().any(|el| el == order_number)
            || self.orders_not_completed.iter().any(|el| el.order_number == order_number)
    }
}

impl AggregateRoot for ReleaseRecord {
    fn id(&self) -> Uuid {
        self.id
    }
}
