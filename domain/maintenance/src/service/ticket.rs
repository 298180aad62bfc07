use async_trait::async_trait;
use uuid::Uuid;

use crate::exception::MaintenanceResult;
use crate::model::entity::ticket::{ShiftActivityEntry, TicketStatus};
use crate::model::entity::EquipmentTicket;
use crate::model::vo::{BulkImportReport, OrderCompletionUpdate, TicketDraft};

#[async_trait]
pub trait TicketService: Send + Sync {
    /// Guarded creation. `cross_type_confirmed` acknowledges an open ticket
    /// of the other maintenance type on the same asset.
    async fn create(
        &self,
        draft: TicketDraft,
        cross_type_confirmed: bool,
    ) -> MaintenanceResult<EquipmentTicket>;

    /// Batch import; each row passes the same creation guard.
    async fn bulk_import(&self, drafts: Vec<TicketDraft>) -> MaintenanceResult<BulkImportReport>;

    /// Manual status edit. `Completed` is rejected; only a release completes
    /// a ticket.
    async fn set_status(&self, ticket_id: Uuid, status: TicketStatus) -> MaintenanceResult<()>;

    async fn upsert_shift_activity(
        &self,
        ticket_id: Uuid,
        entry: ShiftActivityEntry,
    ) -> MaintenanceResult<()>;

    /// Edit one checklist order on a live preventive ticket.
    async fn set_order_completion(
        &self,
        ticket_id: Uuid,
        update: OrderCompletionUpdate,
    ) -> MaintenanceResult<()>;

    async fn open_tickets(&self) -> MaintenanceResult<Vec<EquipmentTicket>>;

    async fn open_tickets_by_asset(
        &self,
        asset_tag: &str,
    ) -> MaintenanceResult<Vec<EquipmentTicket>>;
}
