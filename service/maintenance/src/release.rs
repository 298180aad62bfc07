use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use domain_maintenance::exception::{MaintenanceException, MaintenanceResult};
use domain_maintenance::model::entity::order::CompletionState;
use domain_maintenance::model::entity::release_record::{
    NotCompletedOrder, OutcomeClass, ReleaseRecord,
};
use domain_maintenance::model::entity::ticket::{
    OrderHistoryEntry, ShiftActivityEntry, TicketStatus,
};
use domain_maintenance::model::entity::EquipmentTicket;
use domain_maintenance::model::vo::{PartialAssetRelease, ReleaseCommand, ReleaseOutcome};
use domain_maintenance::repository::{AllocationRepo, ReleaseRecordRepo, TicketRepo, WorkerRepo};
use domain_maintenance::service::{ReleaseService, ShiftContextProvider};
use domain_schedule::model::entity::weekly_schedule::ScheduleStatus;
use domain_schedule::repository::WeeklyScheduleRepo;
use kernel::{MutableRepository, ReadOnlyRepository};
use typed_builder::TypedBuilder;
use uuid::Uuid;

use crate::allocation::resequence_after_removal;

#[derive(TypedBuilder)]
pub struct ReleaseServiceImpl {
    ticket_repo: Arc<dyn TicketRepo>,
    allocation_repo: Arc<dyn AllocationRepo>,
    worker_repo: Arc<dyn WorkerRepo>,
    release_record_repo: Arc<dyn ReleaseRecordRepo>,
    schedule_repo: Arc<dyn WeeklyScheduleRepo>,
    shift_provider: Arc<dyn ShiftContextProvider>,
}

#[async_trait]
impl ReleaseService for ReleaseServiceImpl {
    async fn release(&self, command: ReleaseCommand) -> MaintenanceResult<ReleaseOutcome> {
        let shift = self.shift_provider.current().ok_or(MaintenanceException::NoActiveShift)?;
        if command.activities_performed.trim().is_empty() {
            return Err(MaintenanceException::MissingActivitiesPerformed);
        }

        let mut ticket = self.ticket_repo.get_by_id(command.ticket_id).await?;

        // A close that already finished stays closed; nothing is re-applied.
        // A completed ticket without its record is a close that failed after
        // the status flip and runs the remaining steps again.
        if let Some(record) = self.release_record_repo.get_by_ticket_id(ticket.id).await? {
            return Ok(ReleaseOutcome {
                record,
                partial_asset_warning: None,
                replayed: true,
            });
        }

        if let Some(order) = ticket.unjustified_not_completed().first() {
            return Err(MaintenanceException::IncompleteNotCompletedJustification {
                order_number: order.order_number.clone(),
            });
        }

        let other_open_ticket_ids: Vec<Uuid> = self
            .ticket_repo
            .get_open_by_asset(&ticket.asset_tag)
            .await?
            .into_iter()
            .filter(|el| el.id != ticket.id)
            .map(|el| el.id)
            .collect();
        let partial_asset_warning = if other_open_ticket_ids.is_empty() {
            None
        } else {
            tracing::warn!(
                asset_tag = %ticket.asset_tag,
                other_tickets = other_open_ticket_ids.len(),
                "asset keeps other open tickets after this release"
            );
            Some(PartialAssetRelease {
                asset_tag: ticket.asset_tag.clone(),
                other_open_ticket_ids,
            })
        };

        let outcome_class = ticket.classify_outcome();

        ticket.upsert_shift_activity(ShiftActivityEntry {
            shift_letter: shift.shift_letter.clone(),
            date: shift.date,
            supervisor: shift.supervisor.clone(),
            lead_tech: shift.lead_tech.clone(),
            activities: command.activities_performed.clone(),
        });

        let orders_completed: Vec<String> = ticket
            .preventive_orders
            .iter()
            .filter(|el| el.is_done())
            .map(|el| el.order_number.clone())
            .collect();
        let orders_not_completed: Vec<NotCompletedOrder> = ticket
            .preventive_orders
            .iter()
            .filter(|el| matches!(el.completion_state, CompletionState::NotCompleted))
            .map(|el| NotCompletedOrder {
                order_number: el.order_number.clone(),
                reason: el.not_completed_reason.clone().unwrap_or_default(),
                recommendation: el.not_completed_recommendation.clone().unwrap_or_default(),
            })
            .collect();
        if !ticket.preventive_orders.is_empty() {
            ticket.upsert_order_history(OrderHistoryEntry {
                shift_letter: shift.shift_letter.clone(),
                date: shift.date,
                orders_completed: orders_completed.clone(),
                orders_not_completed: orders_not_completed
                    .iter()
                    .map(|el| el.order_number.clone())
                    .collect(),
            });
        }

        ticket.finalize_order_states();

        if let Some(link_id) = ticket.schedule_link_id {
            self.propagate_to_schedule(link_id, &ticket, outcome_class).await?;
        }

        // Log writes and the status flip land in one serialized update.
        ticket.status = TicketStatus::Completed;
        self.ticket_repo.update(&ticket).await?;
        self.ticket_repo.save_changed().await?;

        let allocations = self.allocation_repo.get_by_ticket_id(ticket.id).await?;
        let mut allocated_worker_names = Vec::with_capacity(allocations.len());
        for allocation in allocations.iter() {
            allocated_worker_names
                .push(self.worker_repo.get_by_id(allocation.worker_id).await?.name);
        }

        // The record is written before allocation cleanup so a failure below
        // never leaves a completed ticket without it.
        let record = ReleaseRecord {
            id: Uuid::new_v4(),
            ticket_id: ticket.id,
            asset_tag: ticket.asset_tag.clone(),
            maintenance_type: ticket.maintenance_type,
            shift_letter: shift.shift_letter.clone(),
            released_at: Utc::now(),
            allocated_worker_names,
            activities_performed: command.activities_performed,
            orders_completed,
            orders_not_completed,
            outcome_class,
            release_status: outcome_class.release_status(),
            schedule_link_id: ticket.schedule_link_id,
        };
        self.release_record_repo.insert(&record).await?;
        self.release_record_repo.save_changed().await?;

        for allocation in allocations.iter() {
            resequence_after_removal(self.allocation_repo.as_ref(), allocation).await?;
        }
        self.allocation_repo.save_changed().await?;

        tracing::info!(
            ticket_id = %ticket.id,
            asset_tag = %ticket.asset_tag,
            outcome = ?outcome_class,
            "ticket released"
        );
        Ok(ReleaseOutcome {
            record,
            partial_asset_warning,
            replayed: false,
        })
    }
}

impl ReleaseServiceImpl {
    /// Write the outcome back onto the planned week. Entries are matched by
    /// (asset tag, day); a link whose entry is gone is a no-op.
    async fn propagate_to_schedule(
        &self,
        link_id: Uuid,
        ticket: &EquipmentTicket,
        outcome_class: OutcomeClass,
    ) -> anyhow::Result<()> {
        let target = match outcome_class {
            OutcomeClass::Total => ScheduleStatus::Completed,
            OutcomeClass::Partial => ScheduleStatus::CompletedPartial,
            OutcomeClass::NotApplicable => return Ok(()),
        };
        let Some(linked) = self.schedule_repo.find_by_id(link_id).await? else {
            tracing::warn!(%link_id, "schedule link points at a removed entry; skipping");
            return Ok(());
        };
        let Some(mut entry) =
            self.schedule_repo.get_by_asset_and_day(&ticket.asset_tag, linked.day).await?
        else {
            return Ok(());
        };
        for order in ticket.preventive_orders.iter() {
            if let Some(planned) = entry.order_mut(&order.order_number) {
                planned.status = target;
            }
        }
        entry.asset_status = target;
        self.schedule_repo.update(&entry).await?;
        self.schedule_repo.save_changed().await?;
        Ok(())
    }
}
