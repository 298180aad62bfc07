use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use domain_maintenance::model::entity::{Allocation, EquipmentTicket, ReleaseRecord, Worker};
use domain_maintenance::repository::{AllocationRepo, ReleaseRecordRepo, TicketRepo, WorkerRepo};
use kernel::{DBRepository, MutableRepository, ReadOnlyRepository};
use uuid::Uuid;

use crate::MemoryDb;

pub struct MemoryTicketRepo {
    db: Arc<MemoryDb>,
}

impl MemoryTicketRepo {
    pub fn new(db: Arc<MemoryDb>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReadOnlyRepository<EquipmentTicket> for MemoryTicketRepo {
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<EquipmentTicket> {
        self.db
            .tickets
            .get(&id)
            .map(|el| el.clone())
            .with_context(|| format!("No such ticket: {id}"))
    }

    async fn get_all(&self) -> anyhow::Result<Vec<EquipmentTicket>> {
        Ok(self.db.tickets.iter().map(|el| el.value().clone()).collect())
    }
}

#[async_trait]
impl MutableRepository<EquipmentTicket> for MemoryTicketRepo {
    async fn insert(&self, entity: &EquipmentTicket) -> anyhow::Result<Uuid> {
        self.db.tickets.insert(entity.id, entity.clone());
        Ok(entity.id)
    }

    async fn update(&self, entity: &EquipmentTicket) -> anyhow::Result<()> {
        if !self.db.tickets.contains_key(&entity.id) {
            anyhow::bail!("No such ticket: {}", entity.id);
        }
        self.db.tickets.insert(entity.id, entity.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<()> {
        self.db.tickets.remove(&id);
        Ok(())
    }
}

impl DBRepository<EquipmentTicket> for MemoryTicketRepo {}

#[async_trait]
impl TicketRepo for MemoryTicketRepo {
    async fn get_open_by_asset(&self, asset_tag: &str) -> anyhow::Result<Vec<EquipmentTicket>> {
        Ok(self
            .db
            .tickets
            .iter()
            .filter(|el| el.asset_tag == asset_tag && el.is_open())
            .map(|el| el.value().clone())
            .collect())
    }

    async fn get_all_open(&self) -> anyhow::Result<Vec<EquipmentTicket>> {
        Ok(self
            .db
            .tickets
            .iter()
            .filter(|el| el.is_open())
            .map(|el| el.value().clone())
            .collect())
    }
}

pub struct MemoryWorkerRepo {
    db: Arc<MemoryDb>,
}

impl MemoryWorkerRepo {
    pub fn new(db: Arc<MemoryDb>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReadOnlyRepository<Worker> for MemoryWorkerRepo {
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Worker> {
        self.db
            .workers
            .get(&id)
            .map(|el| el.clone())
            .with_context(|| format!("No such worker: {id}"))
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Worker>> {
        Ok(self.db.workers.iter().map(|el| el.value().clone()).collect())
    }
}

#[async_trait]
impl WorkerRepo for MemoryWorkerRepo {
    async fn get_allocatable(&self, shift_letter: &str) -> anyhow::Result<Vec<Worker>> {
        Ok(self
            .db
            .workers
            .iter()
            .filter(|el| el.home_shift_letter == shift_letter && el.is_allocatable())
            .map(|el| el.value().clone())
            .collect())
    }
}

pub struct MemoryAllocationRepo {
    db: Arc<MemoryDb>,
}

impl MemoryAllocationRepo {
    pub fn new(db: Arc<MemoryDb>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReadOnlyRepository<Allocation> for MemoryAllocationRepo {
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Allocation> {
        self.db
            .allocations
            .get(&id)
            .map(|el| el.clone())
            .with_context(|| format!("No such allocation: {id}"))
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Allocation>> {
        Ok(self.db.allocations.iter().map(|el| el.value().clone()).collect())
    }
}

#[async_trait]
impl MutableRepository<Allocation> for MemoryAllocationRepo {
    async fn insert(&self, entity: &Allocation) -> anyhow::Result<Uuid> {
        self.db.allocations.insert(entity.id, entity.clone());
        Ok(entity.id)
    }

    async fn update(&self, entity: &Allocation) -> anyhow::Result<()> {
        if !self.db.allocations.contains_key(&entity.id) {
            anyhow::bail!("No such allocation: {}", entity.id);
        }
        self.db.allocations.insert(entity.id, entity.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<()> {
        self.db.allocations.remove(&id);
        Ok(())
    }
}

impl DBRepository<Allocation> for MemoryAllocationRepo {}

#[async_trait]
impl AllocationRepo for MemoryAllocationRepo {
    async fn get_by_worker_id(&self, worker_id: Uuid) -> anyhow::Result<Vec<Allocation>> {
        let mut allocations: Vec<_> = self
            .db
            .allocations
            .iter()
            .filter(|el| el.worker_id == worker_id)
            .map(|el| el.value().clone())
            .collect();
        allocations.sort_by_key(|el| el.activity_rank);
        Ok(allocations)
    }

    async fn get_by_ticket_id(&self, ticket_id: Uuid) -> anyhow::Result<Vec<Allocation>> {
        let mut allocations: Vec<_> = self
            .db
            .allocations
            .iter()
            .filter(|el| el.ticket_id == ticket_id)
            .map(|el| el.value().clone())
            .collect();
        allocations.sort_by_key(|el| el.activity_rank);
        Ok(allocations)
    }

    async fn get_by_worker_and_ticket(
        &self,
        worker_id: Uuid,
        ticket_id: Uuid,
    ) -> anyhow::Result<Option<Allocation>> {
        Ok(self
            .db
            .allocations
            .iter()
            .find(|el| el.worker_id == worker_id && el.ticket_id == ticket_id)
            .map(|el| el.value().clone()))
    }
}

pub struct MemoryReleaseRecordRepo {
    db: Arc<MemoryDb>,
}

impl MemoryReleaseRecordRepo {
    pub fn new(db: Arc<MemoryDb>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReadOnlyRepository<ReleaseRecord> for MemoryReleaseRecordRepo {
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<ReleaseRecord> {
        self.db
            .release_records
            .get(&id)
            .map(|el| el.clone())
            .with_context(|| format!("No such release record: {id}"))
    }

    async fn get_all(&self) -> anyhow::Result<Vec<ReleaseRecord>> {
        Ok(self.db.release_records.iter().map(|el| el.value().clone()).collect())
    }
}

#[async_trait]
impl MutableRepository<ReleaseRecord> for MemoryReleaseRecordRepo {
    async fn insert(&self, entity: &ReleaseRecord) -> anyhow::Result<Uuid> {
        self.db.release_records.insert(entity.id, entity.clone());
        Ok(entity.id)
    }
}

impl DBRepository<ReleaseRecord> for MemoryReleaseRecordRepo {}

#[async_trait]
impl ReleaseRecordRepo for MemoryReleaseRecordRepo {
    async fn get_by_ticket_id(&self, ticket_id: Uuid) -> anyhow::Result<Option<ReleaseRecord>> {
        Ok(self
            .db
            .release_records
            .iter()
            .find(|el| el.ticket_id == ticket_id)
            .map(|el| el.value().clone()))
    }

    async fn get_by_asset(&self, asset_tag: &str) -> anyhow::Result<Vec<ReleaseRecord>> {
        Ok(self
            .db
            .release_records
            .iter()
            .filter(|el| el.asset_tag == asset_tag)
            .map(|el| el.value().clone())
            .collect())
    }
}
