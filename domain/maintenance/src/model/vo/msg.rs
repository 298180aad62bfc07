use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::entity::ticket::{MaintenanceType, TicketStatus};
use crate::model::entity::EquipmentTicket;

/// One polled view of a ticket; the minimum the change classifier needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketSnapshot {
    pub id: Uuid,
    pub asset_tag: String,
    pub maintenance_type: MaintenanceType,
    pub status: TicketStatus,
}

impl From<&EquipmentTicket> for TicketSnapshot {
    fn from(ticket: &EquipmentTicket) -> Self {
        Self {
            id: ticket.id,
            asset_tag: ticket.asset_tag.clone(),
            maintenance_type: ticket.maintenance_type,
            status: ticket.status,
        }
    }
}

/// At most one of these is reported per poll; opens win over closes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TicketChange {
    NewlyOpened { ticket: TicketSnapshot },
    NewlyClosed { ticket: TicketSnapshot },
}
