pub mod msg;
pub mod shift_log;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::exception::MaintenanceException;
use crate::model::entity::order::CompletionState;
use crate::model::entity::release_record::ReleaseRecord;
use crate::model::entity::ticket::MaintenanceType;
use crate::model::entity::MaintenanceOrderItem;

pub use shift_log::{ShiftKey, ShiftKeyed, ShiftLog};

/// Ambient shift configuration consumed by the release transaction.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ShiftContext {
    pub shift_letter: String,
    pub date: NaiveDate,
    pub supervisor: String,
    pub lead_tech: String,
}

/// How to attach a worker who is already allocated elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttachMode {
    /// Drop the worker's other allocations and start over as rank 1 here.
    Move,
    /// Keep existing allocations and append this one as the next rank.
    AddAsNextActivity,
}

/// Input for ticket creation and batch import.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDraft {
    pub asset_tag: String,
    pub maintenance_type: MaintenanceType,
    pub opened_at: DateTime<Utc>,
    pub location: String,
    pub stop_reason: String,
    pub pending_activities: String,
    #[serde(default)]
    pub preventive_orders: Vec<MaintenanceOrderItem>,
    pub schedule_link_id: Option<Uuid>,
}

/// Per-row outcome of a batch import; one bad row does not sink the rest.
#[derive(Debug, Default)]
pub struct BulkImportReport {
    pub created: Vec<Uuid>,
    pub failures: Vec<BulkImportFailure>,
}

#[derive(Debug)]
pub struct BulkImportFailure {
    pub asset_tag: String,
    pub cause: MaintenanceException,
}

/// Edit of one checklist order on a live ticket.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderCompletionUpdate {
    pub order_number: String,
    pub completion_state: CompletionState,
    pub not_completed_reason: Option<String>,
    pub not_completed_recommendation: Option<String>,
}

/// Operator input to the release transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseCommand {
    pub ticket_id: Uuid,
    pub activities_performed: String,
}

/// What a release produced.
#[derive(Debug, Clone)]
pub struct ReleaseOutcome {
    pub record: ReleaseRecord,
    /// Other open tickets left on the same asset; non-fatal.
    pub partial_asset_warning: Option<PartialAssetRelease>,
    /// True when a record already existed and nothing was re-applied.
    pub replayed: bool,
}

/// Non-fatal release warning: the asset keeps other open tickets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialAssetRelease {
    pub asset_tag: String,
    pub other_open_ticket_ids: Vec<Uuid>,
}
