use async_trait::async_trait;
use kernel::DBRepository;
use uuid::Uuid;

use crate::model::entity::Allocation;

#[async_trait]
pub trait AllocationRepo: DBRepository<Allocation> + Send + Sync {
    /// A worker's live allocations across all tickets.
    async fn get_by_worker_id(&self, worker_id: Uuid) -> anyhow::Result<Vec<Allocation>>;

    /// Everyone currently attached to one ticket.
    async fn get_by_ticket_id(&self, ticket_id: Uuid) -> anyhow::Result<Vec<Allocation>>;

    async fn get_by_worker_and_ticket(
        &self,
        worker_id: Uuid,
        ticket_id: Uuid,
    ) -> anyhow::Result<Option<Allocation>>;
}
