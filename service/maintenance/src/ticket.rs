use std::sync::Arc;

use async_trait::async_trait;
use domain_maintenance::exception::{MaintenanceException, MaintenanceResult};
use domain_maintenance::model::entity::ticket::{ShiftActivityEntry, TicketStatus};
use domain_maintenance::model::entity::EquipmentTicket;
use domain_maintenance::model::vo::{
    BulkImportFailure, BulkImportReport, OrderCompletionUpdate, TicketDraft,
};
use domain_maintenance::repository::TicketRepo;
use domain_maintenance::service::TicketService;
use kernel::{MutableRepository, ReadOnlyRepository};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct TicketServiceImpl {
    ticket_repo: Arc<dyn TicketRepo>,
}

#[async_trait]
impl TicketService for TicketServiceImpl {
    async fn create(
        &self,
        draft: TicketDraft,
        cross_type_confirmed: bool,
    ) -> MaintenanceResult<EquipmentTicket> {
        self.creation_guard(&draft, cross_type_confirmed).await?;
        let ticket = EquipmentTicket::from(draft);
        self.ticket_repo.insert(&ticket).await?;
        self.ticket_repo.save_changed().await?;
        tracing::info!(
            ticket_id = %ticket.id,
            asset_tag = %ticket.asset_tag,
            maintenance_type = %ticket.maintenance_type,
            "ticket opened"
        );
        Ok(ticket)
    }

    async fn bulk_import(&self, drafts: Vec<TicketDraft>) -> MaintenanceResult<BulkImportReport> {
        let mut report = BulkImportReport::default();
        let mut accepted: Vec<EquipmentTicket> = vec![];
        for draft in drafts {
            // Rows accepted earlier in the batch count against the guard too.
            let intra_batch = accepted.iter().find(|el| el.asset_tag == draft.asset_tag);
            let guard = match intra_batch {
                Some(el) if el.maintenance_type == draft.maintenance_type => {
                    Err(MaintenanceException::DuplicateActiveTicket {
                        asset_tag: draft.asset_tag.clone(),
                        maintenance_type: draft.maintenance_type,
                        existing_ticket_id: el.id,
                    })
                }
                Some(el) => Err(MaintenanceException::CrossTypeConfirmationRequired {
                    asset_tag: draft.asset_tag.clone(),
                    existing_ticket_id: el.id,
                }),
                None => self.creation_guard(&draft, false).await,
            };
            match guard {
                Ok(()) => {
                    let ticket = EquipmentTicket::from(draft);
                    report.created.push(ticket.id);
                    accepted.push(ticket);
                }
                Err(cause) => report.failures.push(BulkImportFailure {
                    asset_tag: draft.asset_tag,
                    cause,
                }),
            }
        }
        if !accepted.is_empty() {
            self.ticket_repo.insert_list(&accepted).await?;
            self.ticket_repo.save_changed().await?;
        }
        tracing::info!(
            created = report.created.len(),
            failed = report.failures.len(),
            "ticket batch imported"
        );
        Ok(report)
    }

    async fn set_status(&self, ticket_id: Uuid, status: TicketStatus) -> MaintenanceResult<()> {
        if matches!(status, TicketStatus::Completed) {
            return Err(MaintenanceException::ReleaseRequired { ticket_id });
        }
        let mut ticket = self.ticket_repo.get_by_id(ticket_id).await?;
        if ticket.status.is_completed() {
            return Err(MaintenanceException::TicketAlreadyCompleted { ticket_id });
        }
        ticket.status = status;
        self.ticket_repo.update(&ticket).await?;
        self.ticket_repo.save_changed().await?;
        Ok(())
    }

    async fn upsert_shift_activity(
        &self,
        ticket_id: Uuid,
        entry: ShiftActivityEntry,
    ) -> MaintenanceResult<()> {
        let mut ticket = self.ticket_repo.get_by_id(ticket_id).await?;
        if ticket.status.is_completed() {
            return Err(MaintenanceException::TicketAlreadyCompleted { ticket_id });
        }
        ticket.upsert_shift_activity(entry);
        self.ticket_repo.update(&ticket).await?;
        self.ticket_repo.save_changed().await?;
        Ok(())
    }

    async fn set_order_completion(
        &self,
        ticket_id: Uuid,
        update: OrderCompletionUpdate,
    ) -> MaintenanceResult<()> {
        let mut ticket = self.ticket_repo.get_by_id(ticket_id).await?;
        if ticket.status.is_completed() {
            return Err(MaintenanceException::TicketAlreadyCompleted { ticket_id });
        }
        let OrderCompletionUpdate {
            order_number,
            completion_state,
            not_completed_reason,
            not_completed_recommendation,
        } = update;
        let Some(order) = ticket.order_mut(&order_number) else {
            return Err(MaintenanceException::NoSuchOrder {
                ticket_id,
                order_number,
            });
        };
        order.completion_state = completion_state;
        order.not_completed_reason = not_completed_reason;
        order.not_completed_recommendation = not_completed_recommendation;
        self.ticket_repo.update(&ticket).await?;
        self.ticket_repo.save_changed().await?;
        Ok(())
    }

    async fn open_tickets(&self) -> MaintenanceResult<Vec<EquipmentTicket>> {
        Ok(self.ticket_repo.get_all_open().await?)
    }

    async fn open_tickets_by_asset(
        &self,
        asset_tag: &str,
    ) -> MaintenanceResult<Vec<EquipmentTicket>> {
        Ok(self.ticket_repo.get_open_by_asset(asset_tag).await?)
    }
}

impl TicketServiceImpl {
    /// One open ticket per (asset, type); a second type on the same asset
    /// only with explicit confirmation.
    async fn creation_guard(
        &self,
        draft: &TicketDraft,
        cross_type_confirmed: bool,
    ) -> MaintenanceResult<()> {
        let open = self.ticket_repo.get_open_by_asset(&draft.asset_tag).await?;
        if let Some(same) = open.iter().find(|el| el.maintenance_type == draft.maintenance_type) {
            return Err(MaintenanceException::DuplicateActiveTicket {
                asset_tag: draft.asset_tag.clone(),
                maintenance_type: draft.maintenance_type,
                existing_ticket_id: same.id,
            });
        }
        if let Some(other) = open.first() {
            if !cross_type_confirmed {
                return Err(MaintenanceException::CrossTypeConfirmationRequired {
                    asset_tag: draft.asset_tag.clone(),
                    existing_ticket_id: other.id,
                });
            }
        }
        Ok(())
    }
}
