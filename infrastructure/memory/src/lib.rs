//! In-memory backing store.
//!
//! One `MemoryDb` holds every collection; each repository implementation
//! wraps the same shared handle. Backs the app binary and the service
//! crates' scenario tests.

pub mod maintenance;
pub mod schedule;
pub mod shift;

use dashmap::DashMap;
use domain_maintenance::model::entity::{Allocation, EquipmentTicket, ReleaseRecord, Worker};
use domain_schedule::model::entity::{OrderTrackingRecord, WeeklyScheduleEntry};
use uuid::Uuid;

#[rustfmt::skip]
pub use {
    maintenance::{
        MemoryAllocationRepo, MemoryReleaseRecordRepo, MemoryTicketRepo, MemoryWorkerRepo,
    },
    schedule::{MemoryOrderTrackingRepo, MemoryWeeklyScheduleRepo},
    shift::StaticShiftProvider,
};

#[derive(Default)]
pub struct MemoryDb {
    pub tickets: DashMap<Uuid, EquipmentTicket>,
    pub workers: DashMap<Uuid, Worker>,
    pub allocations: DashMap<Uuid, Allocation>,
    pub release_records: DashMap<Uuid, ReleaseRecord>,
    pub schedule_entries: DashMap<Uuid, WeeklyScheduleEntry>,
    pub tracking_records: DashMap<Uuid, OrderTrackingRecord>,
}
