use thiserror::Error;
use uuid::Uuid;

use crate::model::entity::ticket::MaintenanceType;
use crate::model::entity::Allocation;

pub type MaintenanceResult<T> = Result<T, MaintenanceException>;

#[derive(Error, Debug)]
pub enum MaintenanceException {
    #[error("An open {maintenance_type} ticket already exists for asset: {asset_tag}.")]
    DuplicateActiveTicket {
        asset_tag: String,
        maintenance_type: MaintenanceType,
        existing_ticket_id: Uuid,
    },

    #[error(
        "Asset: {asset_tag} has an open ticket of the other maintenance type; creating a second one needs explicit confirmation."
    )]
    CrossTypeConfirmationRequired {
        asset_tag: String,
        existing_ticket_id: Uuid,
    },

    #[error("Worker: {worker_id} is already allocated to ticket: {ticket_id}.")]
    AlreadyAllocatedHere { worker_id: Uuid, ticket_id: Uuid },

    #[error(
        "Worker: {worker_id} holds allocations on other tickets; choose move or add-as-next-activity."
    )]
    AttachModeRequired {
        worker_id: Uuid,
        existing: Vec<Allocation>,
    },

    #[error("Ticket: {ticket_id} is completed and can no longer be changed.")]
    TicketAlreadyCompleted { ticket_id: Uuid },

    #[error("Ticket: {ticket_id} can only reach completed through a release.")]
    ReleaseRequired { ticket_id: Uuid },

    #[error("There is no order: {order_number} on ticket: {ticket_id}.")]
    NoSuchOrder {
        ticket_id: Uuid,
        order_number: String,
    },

    #[error("No active shift context; a release needs one.")]
    NoActiveShift,

    #[error("Performed-activities text is mandatory on release.")]
    MissingActivitiesPerformed,

    #[error(
        "Order: {order_number} is marked not completed without both reason and recommendation."
    )]
    IncompleteNotCompletedJustification { order_number: String },

    #[error("Maintenance internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for MaintenanceException {
    fn from(e: anyhow::Error) -> Self {
        MaintenanceException::InternalError { source: e }
    }
}
