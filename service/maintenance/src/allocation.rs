use std::sync::Arc;

use async_trait::async_trait;
use domain_maintenance::exception::{MaintenanceException, MaintenanceResult};
use domain_maintenance::model::entity::ticket::TicketStatus;
use domain_maintenance::model::entity::Allocation;
use domain_maintenance::model::vo::AttachMode;
use domain_maintenance::repository::{AllocationRepo, TicketRepo};
use domain_maintenance::service::AllocationService;
use kernel::{MutableRepository, ReadOnlyRepository};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct AllocationServiceImpl {
    allocation_repo: Arc<dyn AllocationRepo>,
    ticket_repo: Arc<dyn TicketRepo>,
}

#[async_trait]
impl AllocationService for AllocationServiceImpl {
    async fn attach(
        &self,
        worker_id: Uuid,
        ticket_id: Uuid,
        mode: Option<AttachMode>,
    ) -> MaintenanceResult<Allocation> {
        let mut ticket = self.ticket_repo.get_by_id(ticket_id).await?;
        if ticket.status.is_completed() {
            return Err(MaintenanceException::TicketAlreadyCompleted { ticket_id });
        }
        if self
            .allocation_repo
            .get_by_worker_and_ticket(worker_id, ticket_id)
            .await?
            .is_some()
        {
            return Err(MaintenanceException::AlreadyAllocatedHere { worker_id, ticket_id });
        }

        // Rank math runs against a fresh read of the worker's allocations.
        let existing = self.allocation_repo.get_by_worker_id(worker_id).await?;
        let allocation = if existing.is_empty() {
            Allocation {
                id: Uuid::new_v4(),
                worker_id,
                ticket_id,
                activity_rank: 1,
            }
        } else {
            match mode {
                None => {
                    return Err(MaintenanceException::AttachModeRequired { worker_id, existing })
                }
                Some(AttachMode::Move) => {
                    for el in existing.iter() {
                        self.remove_allocation(el.id).await?;
                    }
                    Allocation {
                        id: Uuid::new_v4(),
                        worker_id,
                        ticket_id,
                        activity_rank: 1,
                    }
                }
                Some(AttachMode::AddAsNextActivity) => Allocation {
                    id: Uuid::new_v4(),
                    worker_id,
                    ticket_id,
                    activity_rank: existing.len() as u32 + 1,
                },
            }
        };
        self.allocation_repo.insert(&allocation).await?;
        if matches!(ticket.status, TicketStatus::AwaitingLabor) {
            ticket.status = TicketStatus::InProgress;
            self.ticket_repo.update(&ticket).await?;
        }
        self.allocation_repo.save_changed().await?;
        self.ticket_repo.save_changed().await?;
        tracing::info!(%worker_id, %ticket_id, rank = allocation.activity_rank, "worker attached");
        Ok(allocation)
    }

    async fn detach(&self, allocation_id: Uuid) -> MaintenanceResult<()> {
        let allocation = self.allocation_repo.get_by_id(allocation_id).await?;
        self.remove_allocation(allocation_id).await?;
        self.allocation_repo.save_changed().await?;
        self.ticket_repo.save_changed().await?;
        tracing::info!(
            worker_id = %allocation.worker_id,
            ticket_id = %allocation.ticket_id,
            "worker detached"
        );
        Ok(())
    }
}

impl AllocationServiceImpl {
    /// Remove one allocation, close its worker's rank gap, and auto-revert
    /// the ticket it pointed at when nobody is left on it.
    async fn remove_allocation(&self, allocation_id: Uuid) -> MaintenanceResult<()> {
        // Fresh read: ranks may have shifted since the caller's snapshot.
        let allocation = self.allocation_repo.get_by_id(allocation_id).await?;
        resequence_after_removal(self.allocation_repo.as_ref(), &allocation).await?;

        let left_on_ticket = self.allocation_repo.get_by_ticket_id(allocation.ticket_id).await?;
        if left_on_ticket.is_empty() {
            let mut ticket = self.ticket_repo.get_by_id(allocation.ticket_id).await?;
            // Manual waiting states stick; only in-progress falls back.
            if matches!(ticket.status, TicketStatus::InProgress) {
                ticket.status = TicketStatus::AwaitingLabor;
                self.ticket_repo.update(&ticket).await?;
            }
        }
        Ok(())
    }
}

/// Delete one allocation and close the rank gap it leaves: every other live
/// allocation of the same worker with a higher rank moves down one,
/// whichever ticket it is on.
pub(crate) async fn resequence_after_removal(
    allocation_repo: &dyn AllocationRepo,
    removed: &Allocation,
) -> anyhow::Result<()> {
    allocation_repo.delete_by_id(removed.id).await?;
    let mut remaining = allocation_repo.get_by_worker_id(removed.worker_id).await?;
    for el in remaining.iter_mut() {
        if el.activity_rank > removed.activity_rank {
            el.activity_rank -= 1;
            allocation_repo.update(el).await?;
        }
    }
    Ok(())
}
