use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use domain_maintenance::model::entity::order::{CompletionState, MaintenanceOrderItem};
use domain_maintenance::model::entity::ticket::MaintenanceType;
use domain_maintenance::model::entity::Worker;
use domain_maintenance::model::vo::{ShiftContext, TicketDraft};
use infrastructure_memory::{
    MemoryAllocationRepo, MemoryDb, MemoryReleaseRecordRepo, MemoryTicketRepo,
    MemoryWeeklyScheduleRepo, MemoryWorkerRepo, StaticShiftProvider,
};
use service_maintenance::{AllocationServiceImpl, ReleaseServiceImpl, TicketServiceImpl};
use uuid::Uuid;

pub fn shift_context() -> ShiftContext {
    ShiftContext {
        shift_letter: "A".to_owned(),
        date: NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(),
        supervisor: "Silva".to_owned(),
        lead_tech: "Costa".to_owned(),
    }
}

pub struct World {
    pub db: Arc<MemoryDb>,
    pub ticket_repo: Arc<MemoryTicketRepo>,
    pub allocation_repo: Arc<MemoryAllocationRepo>,
    pub tickets: TicketServiceImpl,
    pub allocations: AllocationServiceImpl,
    pub releases: ReleaseServiceImpl,
}

pub fn world() -> World {
    world_with_shift(Some(shift_context()))
}

pub fn world_with_shift(shift: Option<ShiftContext>) -> World {
    let db = Arc::new(MemoryDb::default());
    let ticket_repo = Arc::new(MemoryTicketRepo::new(db.clone()));
    let allocation_repo = Arc::new(MemoryAllocationRepo::new(db.clone()));
    let worker_repo = Arc::new(MemoryWorkerRepo::new(db.clone()));
    let release_record_repo = Arc::new(MemoryReleaseRecordRepo::new(db.clone()));
    let schedule_repo = Arc::new(MemoryWeeklyScheduleRepo::new(db.clone()));
    let shift_provider = Arc::new(StaticShiftProvider::new(shift));

    World {
        tickets: TicketServiceImpl::builder().ticket_repo(ticket_repo.clone()).build(),
        allocations: AllocationServiceImpl::builder()
            .allocation_repo(allocation_repo.clone())
            .ticket_repo(ticket_repo.clone())
            .build(),
        releases: ReleaseServiceImpl::builder()
            .ticket_repo(ticket_repo.clone())
            .allocation_repo(allocation_repo.clone())
            .worker_repo(worker_repo)
            .release_record_repo(release_record_repo)
            .schedule_repo(schedule_repo)
            .shift_provider(shift_provider)
            .build(),
        db,
        ticket_repo,
        allocation_repo,
    }
}

pub fn corrective_draft(asset_tag: &str) -> TicketDraft {
    TicketDraft {
        asset_tag: asset_tag.to_owned(),
        maintenance_type: MaintenanceType::Corrective,
        opened_at: Utc::now(),
        location: "mine front".to_owned(),
        stop_reason: "hydraulic leak".to_owned(),
        pending_activities: String::new(),
        preventive_orders: vec![],
        schedule_link_id: None,
    }
}

pub fn preventive_draft(asset_tag: &str, orders: Vec<MaintenanceOrderItem>) -> TicketDraft {
    TicketDraft {
        asset_tag: asset_tag.to_owned(),
        maintenance_type: MaintenanceType::Preventive,
        opened_at: Utc::now(),
        location: "workshop".to_owned(),
        stop_reason: "weekly preventive".to_owned(),
        pending_activities: String::new(),
        preventive_orders: orders,
        schedule_link_id: None,
    }
}

pub fn order(number: &str, state: CompletionState) -> MaintenanceOrderItem {
    MaintenanceOrderItem {
        order_number: number.to_owned(),
        order_type: "lubrication".to_owned(),
        description: format!("order {number}"),
        completion_state: state,
        not_completed_reason: None,
        not_completed_recommendation: None,
    }
}

pub fn seed_worker(db: &MemoryDb, name: &str) -> Uuid {
    let worker = Worker {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        company: "own fleet".to_owned(),
        role: "mechanic".to_owned(),
        home_shift_letter: "A".to_owned(),
        is_present: true,
        is_available: true,
        occupation_reason: None,
    };
    let id = worker.id;
    db.workers.insert(id, worker);
    id
}
