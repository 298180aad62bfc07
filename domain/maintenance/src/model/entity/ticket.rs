use chrono::{DateTime, NaiveDate, Utc};
use kernel::AggregateRoot;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::entity::order::{CompletionState, MaintenanceOrderItem};
use crate::model::entity::release_record::OutcomeClass;
use crate::model::vo::shift_log::{ShiftKey, ShiftKeyed, ShiftLog};
use crate::model::vo::TicketDraft;

/// # Equipment ticket
///
/// One open maintenance job tracked against a physical asset. At most one
/// non-completed ticket may exist per (asset tag, maintenance type) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentTicket {
    pub id: Uuid,
    /// Asset code, e.g. "CS1901".
    pub asset_tag: String,
    pub maintenance_type: MaintenanceType,
    pub status: TicketStatus,
    pub opened_at: DateTime<Utc>,
    pub location: String,
    /// Why the equipment is stopped.
    pub stop_reason: String,
    /// Free-text backlog of activities still due.
    pub pending_activities: String,
    /// One entry per (shift letter, date); later writes replace in place.
    #[serde(default)]
    pub shift_activity_log: ShiftLog<ShiftActivityEntry>,
    /// Checklist of scheduled orders; only filled on preventive tickets.
    #[serde(default)]
    pub preventive_orders: Vec<MaintenanceOrderItem>,
    /// One entry per (shift letter, date); later writes replace in place.
    #[serde(default)]
    pub order_history_log: ShiftLog<OrderHistoryEntry>,
    /// Weekly-schedule entry this ticket fulfills.
    pub schedule_link_id: Option<Uuid>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceType {
    #[default]
    Corrective,
    Preventive,
}

impl std::fmt::Display for MaintenanceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Corrective => write!(f, "corrective"),
            Self::Preventive => write!(f, "preventive"),
        }
    }
}

/// Ticket lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    /// # Awaiting labor
    /// No worker allocated yet; also re-entered automatically when the last
    /// allocation is removed.
    #[default]
    AwaitingLabor,
    /// # Awaiting parts
    /// Manual state; survives allocation changes until a user edit.
    AwaitingParts,
    /// # Awaiting auxiliary equipment
    /// Manual state; survives allocation changes until a user edit.
    AwaitingAuxiliaryEquipment,
    /// # In progress
    /// At least one worker allocated.
    InProgress,
    /// # Completed
    /// Released. Terminal; the ticket remains as a read-only historical row.
    Completed,
}

impl TicketStatus {
    /// Manual states that do not auto-revert when the last allocation goes.
    pub fn is_sticky_manual(&self) -> bool {
        matches!(self, Self::AwaitingParts | Self::AwaitingAuxiliaryEquipment)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// What one shift did on the ticket.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ShiftActivityEntry {
    pub shift_letter: String,
    pub date: NaiveDate,
    pub supervisor: String,
    pub lead_tech: String,
    pub activities: String,
}

impl ShiftKeyed for ShiftActivityEntry {
    fn shift_key(&self) -> ShiftKey {
        (self.shift_letter.clone(), self.date)
    }
}

/// Which orders one shift finished or left behind.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderHistoryEntry {
    pub shift_letter: String,
    pub date: NaiveDate,
    pub orders_completed: Vec<String>,
    pub orders_not_completed: Vec<String>,
}

impl ShiftKeyed for OrderHistoryEntry {
    fn shift_key(&self) -> ShiftKey {
        (self.shift_letter.clone(), self.date)
    }
}

impl EquipmentTicket {
    pub fn is_open(&self) -> bool {
        !self.status.is_completed()
    }

    pub fn upsert_shift_activity(&mut self, entry: ShiftActivityEntry) {
        self.shift_activity_log.upsert(entry);
    }

    pub fn upsert_order_history(&mut self, entry: OrderHistoryEntry) {
        self.order_history_log.upsert(entry);
    }

    pub fn order_mut(&mut self, order_number: &str) -> Option<&mut MaintenanceOrderItem> {
        self.preventive_orders.iter_mut().find(|el| el.order_number == order_number)
    }

    /// Release outcome over the current checklist states.
    pub fn classify_outcome(&self) -> OutcomeClass {
        if self.preventive_orders.is_empty() {
            return OutcomeClass::NotApplicable;
        }
        if self.preventive_orders.iter().all(|el| el.is_done()) {
            OutcomeClass::Total
        } else {
            OutcomeClass::Partial
        }
    }

    /// Orders marked not completed but missing reason or recommendation.
    pub fn unjustified_not_completed(&self) -> Vec<&MaintenanceOrderItem> {
        self.preventive_orders
            .iter()
            .filter(|el| {
                matches!(el.completion_state, CompletionState::NotCompleted)
                    && !el.has_complete_justification()
            })
            .collect()
    }

    /// Turn the transient per-shift markers into the permanent one.
    pub fn finalize_order_states(&mut self) {
        for order in self.preventive_orders.iter_mut() {
            if matches!(order.completion_state, CompletionState::CompletedThisShift) {
                order.completion_state = CompletionState::Completed;
            }
        }
    }
}

impl From<TicketDraft> for EquipmentTicket {
    fn from(draft: TicketDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            asset_tag: draft.asset_tag,
            maintenance_type: draft.maintenance_type,
            status: TicketStatus::default(),
            opened_at: draft.opened_at,
            location: draft.location,
            stop_reason: draft.stop_reason,
            pending_activities: draft.pending_activities,
            shift_activity_log: ShiftLog::default(),
            preventive_orders: draft.preventive_orders,
            order_history_log: ShiftLog::default(),
            schedule_link_id: draft.schedule_link_id,
        }
    }
}

impl AggregateRoot for EquipmentTicket {
    fn id(&self) -> Uuid {
        self.id
    }
}
