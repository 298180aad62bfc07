use async_trait::async_trait;
use uuid::Uuid;

use crate::exception::MaintenanceResult;
use crate::model::entity::Allocation;
use crate::model::vo::AttachMode;

#[async_trait]
pub trait AllocationService: Send + Sync {
    /// Attach a worker to a ticket. `mode` is required when the worker
    /// already holds allocations on other tickets; `AttachModeRequired`
    /// reports them otherwise so the caller can prompt.
    async fn attach(
        &self,
        worker_id: Uuid,
        ticket_id: Uuid,
        mode: Option<AttachMode>,
    ) -> MaintenanceResult<Allocation>;

    /// Remove one allocation, closing the rank gap it leaves for its worker.
    async fn detach(&self, allocation_id: Uuid) -> MaintenanceResult<()>;
}
